//! CLI command implementations
//!
//! The serve command wires the whole stack together: config, store,
//! catalog service, optional seed load, then the HTTP server on a
//! tokio runtime.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogService;
use crate::http_server::{HttpServer, HttpServerConfig, VehicleJson};
use crate::observability::Logger;
use crate::store::MemoryVehicleStore;
use crate::vehicle::VehicleRecord;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure.
///
/// Every field defaults, so an absent file yields a fully working
/// config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Optional JSON array of vehicle records loaded at boot through
    /// the validated batch-insert path
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("invalid config JSON: {}", e)))
    }

    /// Load configuration, falling back to defaults when the file does
    /// not exist
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Main CLI entry point.
///
/// Parses arguments and dispatches; this is the only function main.rs
/// should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Start the catalog HTTP server.
///
/// Boot sequence:
/// 1. Load config (defaults when absent), apply the port override
/// 2. Build the in-memory store and catalog service
/// 3. Load the seed file, if configured; a rejected seed aborts boot
/// 4. Serve until stopped
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port_override {
        config.server.port = port;
    }

    let store = Arc::new(MemoryVehicleStore::new());
    let service = CatalogService::new(store);

    if let Some(seed_path) = &config.seed_path {
        let count = load_seed(&service, seed_path)?;
        Logger::info(
            "SEED_LOADED",
            &[
                ("count", &count.to_string()),
                ("path", &seed_path.display().to_string()),
            ],
        );
    }

    let server = HttpServer::with_config(service, config.server);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server(format!("HTTP server failed: {}", e)))
    })
}

/// Loads a JSON seed file through the validated batch path.
///
/// The batch is all-or-nothing, so a seed with one bad record leaves
/// the catalog empty and boot fails.
fn load_seed(service: &CatalogService, path: &Path) -> CliResult<usize> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::seed(format!("failed to read seed file: {}", e)))?;

    let records: Vec<VehicleJson> = serde_json::from_str(&content)
        .map_err(|e| CliError::seed(format!("invalid seed JSON: {}", e)))?;

    let records: Vec<VehicleRecord> = records.into_iter().map(VehicleRecord::from).collect();
    let count = records.len();

    service
        .add_batch(records)
        .map_err(|e| CliError::seed(format!("seed rejected: {}", e)))?;

    Ok(count)
}
