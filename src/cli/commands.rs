//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, VehicleState};
use crate::journal::FileJournal;
use crate::repository::{load_vehicles, VehicleMap};
use crate::service::VehicleDefault;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::logging::init_logging;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => {
            let mut config = Config::load_or_default(config.as_deref())?;
            if let Some(port) = port {
                config.http.port = port;
                config.validate()?;
            }
            serve(config)
        }
        Command::Init { config } => init(&config),
    }
}

/// Write a default config file, refusing to overwrite
pub fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::AlreadyInitialized(path.display().to_string()));
    }
    let content = serde_json::to_string_pretty(&Config::default())?;
    std::fs::write(path, content)?;
    println!("wrote {}", path.display());
    Ok(())
}

/// Assemble the repository, service and journal behind the HTTP state
pub fn build_state(config: &Config) -> CliResult<Arc<VehicleState>> {
    let vehicles = match &config.seed_path {
        Some(path) => {
            let vehicles = load_vehicles(path)?;
            tracing::info!(path = %path.display(), count = vehicles.len(), "seed loaded");
            vehicles
        }
        None => Default::default(),
    };

    let journal = FileJournal::open(&config.journal_path)?;
    tracing::info!(path = %journal.path().display(), "journal opened");

    let service = Arc::new(VehicleDefault::new(VehicleMap::new(vehicles)));
    Ok(Arc::new(VehicleState::new(service, Arc::new(journal))?))
}

/// Boot and serve until Ctrl-C or SIGTERM
pub fn serve(config: Config) -> CliResult<()> {
    init_logging(&config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let state = build_state(&config)?;
        let server = HttpServer::new(config.http.clone(), state);
        server.start(shutdown_signal()).await?;
        Ok::<(), CliError>(())
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received SIGINT"),
        _ = terminate => tracing::info!("received SIGTERM"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motorpool.json");

        init(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motorpool.json");
        fs::write(&path, "{}").unwrap();

        assert!(matches!(init(&path), Err(CliError::AlreadyInitialized(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_build_state_with_missing_seed_fails() {
        let dir = tempdir().unwrap();
        let config = Config {
            seed_path: Some(dir.path().join("absent.json")),
            journal_path: dir.path().join("created.jsonl"),
            ..Default::default()
        };

        assert!(matches!(build_state(&config), Err(CliError::Seed(_))));
    }
}
