//! CLI argument definitions using clap
//!
//! Commands:
//! - carlot serve [--config <path>] [--host <host>] [--port <port>]
//! - carlot check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// carlot - an in-memory car catalog served over HTTP
#[derive(Parser, Debug)]
#[command(name = "carlot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate a configuration file and its seed data, then exit
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./carlot.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
