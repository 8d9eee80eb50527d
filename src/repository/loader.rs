//! Seed loader
//!
//! Reads a JSON array of flat vehicle records into a map suitable for
//! [`super::VehicleMap::new`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::vehicle::{Vehicle, VehicleDoc, VehicleId};

/// Seed loading errors
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("seed record {index} has no id")]
    MissingId { index: usize },
}

/// Load vehicles from a JSON seed file.
///
/// Every record must carry an `id`. Records sharing an id collapse to the
/// last one in the file.
pub fn load_vehicles(path: impl AsRef<Path>) -> Result<HashMap<VehicleId, Vehicle>, LoaderError> {
    let content = fs::read_to_string(path.as_ref())?;
    let records: Vec<Value> = serde_json::from_str(&content)?;

    let mut vehicles = HashMap::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if record.get("id").map_or(true, Value::is_null) {
            return Err(LoaderError::MissingId { index });
        }
        let doc: VehicleDoc = serde_json::from_value(record)?;
        let vehicle = Vehicle::from(doc);
        if let Some(previous) = vehicles.insert(vehicle.id, vehicle) {
            tracing::warn!(id = previous.id, index, "duplicate seed id, keeping the later record");
        }
    }
    Ok(vehicles)
}
