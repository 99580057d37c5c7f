//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::catalog::Catalog;
use crate::http_server::HttpServer;
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::config::ServerConfig;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let mut config = match config {
                Some(path) => ServerConfig::load(&path)?,
                None => ServerConfig::default(),
            };
            if let Some(host) = host {
                config.http.host = host;
            }
            if let Some(port) = port {
                config.http.port = port;
            }
            config.validate()?;
            serve(config)
        }
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Build the catalog a config describes, seed included
pub fn build_catalog(config: &ServerConfig) -> CliResult<Catalog> {
    let catalog = Catalog::new(config.catalog.clone());
    let entries = config.load_seed()?;
    if !entries.is_empty() {
        catalog
            .seed(entries)
            .map_err(|e| CliError::seed_error(e.to_string()))?;
    }
    Ok(catalog)
}

/// Start the HTTP server and block until it stops
pub fn serve(config: ServerConfig) -> CliResult<()> {
    Logger::set_min_severity(config.log_severity()?);

    let catalog = Arc::new(build_catalog(&config)?);
    let server = HttpServer::with_catalog(config.http.clone(), catalog);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            Logger::error("SERVER_FAILED", &[("reason", e.to_string().as_str())]);
            CliError::boot_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Validate a config file and its seed, print a summary
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load(config_path)?;
    let catalog = build_catalog(&config)?;

    let summary = json!({
        "valid": true,
        "addr": config.http.socket_addr(),
        "log_level": config.log_level,
        "seeded_cars": catalog.count(),
    });
    println!("{}", summary);
    Ok(())
}
