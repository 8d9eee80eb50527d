//! CLI-specific error types
//!
//! Any CLI error ends the process with a non-zero status.

use std::io;

use thiserror::Error;

use crate::repository::{LoaderError, RepositoryError};

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("config file already exists: {0}")]
    AlreadyInitialized(String),

    #[error("seed error: {0}")]
    Seed(#[from] LoaderError),

    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
