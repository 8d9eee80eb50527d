//! CLI module for motorpool
//!
//! Provides command-line interface for:
//! - serve: Load config and seed data, then serve HTTP
//! - init: Write a default configuration file

mod args;
mod commands;
mod config;
mod errors;
mod logging;

pub use args::{Cli, Command};
pub use commands::{build_state, init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use logging::init_logging;
