//! Creation journal
//!
//! Every vehicle accepted by `POST /vehicles` is appended here as one JSON
//! line before it is saved. The journal is append-only and never read back
//! by the service.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::vehicle::VehicleDoc;

/// Append-only record of created vehicles
pub trait CreationJournal: Send + Sync {
    /// Append one record. The record is flushed before this returns.
    fn append(&self, doc: &VehicleDoc) -> io::Result<()>;
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "journal lock poisoned")
}

/// File-backed journal, one JSON document per line
pub struct FileJournal {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileJournal {
    /// Open or create the journal file, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CreationJournal for FileJournal {
    fn append(&self, doc: &VehicleDoc) -> io::Result<()> {
        let line = serde_json::to_string(doc)?;
        let mut writer = self.writer.lock().map_err(|_| poisoned())?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

/// In-memory journal for testing
#[derive(Debug, Default)]
pub struct MemoryJournal {
    records: Mutex<Vec<VehicleDoc>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<VehicleDoc> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl CreationJournal for MemoryJournal {
    fn append(&self, doc: &VehicleDoc) -> io::Result<()> {
        self.records.lock().map_err(|_| poisoned())?.push(doc.clone());
        Ok(())
    }
}
