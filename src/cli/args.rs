//! CLI argument definitions using clap
//!
//! Commands:
//! - motorpool serve [--config <path>] [--port <port>]
//! - motorpool init [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// motorpool - query and register vehicles over HTTP
#[derive(Parser, Debug)]
#[command(name = "motorpool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file; defaults are used when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the configuration
        #[arg(long, default_value = "./motorpool.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
