//! CLI module for carlot
//!
//! - serve: load config and seed, run the HTTP server
//! - check-config: validate config and seed without serving

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_catalog, check_config, run, run_command, serve};
pub use config::ServerConfig;
pub use errors::{CliError, CliResult};
