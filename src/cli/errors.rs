//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, malformed or invalid
    #[error("CARLOT_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Seed file missing, malformed or rejected by the catalog
    #[error("CARLOT_CLI_SEED_ERROR: {0}")]
    Seed(String),

    /// Runtime or listener could not start
    #[error("CARLOT_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    pub fn seed_error(msg: impl Into<String>) -> Self {
        CliError::Seed(msg.into())
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::BootFailed(msg.into())
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            CliError::Config(_) => "CARLOT_CLI_CONFIG_ERROR",
            CliError::Seed(_) => "CARLOT_CLI_SEED_ERROR",
            CliError::BootFailed(_) => "CARLOT_CLI_BOOT_FAILED",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
