//! Server configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "http": { "host": "0.0.0.0", "port": 8000, "cors_origins": [] },
//!   "catalog": { "default_list_limit": 10, "validate_year_on_update": false },
//!   "log_level": "info",
//!   "seed_file": "cars.json"
//! }
//! ```
//!
//! A relative `seed_file` is resolved against the config file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogConfig, SeedEntry};
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Minimum log severity: trace, info, warn or error (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Records loaded at startup (default: none)
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            catalog: CatalogConfig::default(),
            log_level: default_log_level(),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let mut config: ServerConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        if let Some(seed) = &config.seed_file {
            if seed.is_relative() {
                if let Some(dir) = path.parent() {
                    config.seed_file = Some(dir.join(seed));
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CliResult<()> {
        self.http.validate().map_err(CliError::config_error)?;
        self.catalog.validate().map_err(CliError::config_error)?;
        self.log_severity()?;
        Ok(())
    }

    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::config_error)
    }

    /// Read the seed file, if one is configured
    pub fn load_seed(&self) -> CliResult<Vec<SeedEntry>> {
        let Some(path) = &self.seed_file else {
            return Ok(Vec::new());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            CliError::seed_error(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::seed_error(format!("Invalid seed JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_resolves_seed_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carlot.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"seed_file": "cars.json", "http": {{"port": 9100}}}}"#).unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.http.port, 9100);
        assert_eq!(config.seed_file, Some(dir.path().join("cars.json")));
    }

    #[test]
    fn test_invalid_log_level() {
        let config = ServerConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.code_str(), "CARLOT_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_load_seed() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("cars.json");
        fs::write(
            &seed,
            r#"[{"id": 2, "car": {"make": "Ford", "year": 1995}}, {"id": 0, "car": {"year": 2020, "engine": "V6"}}]"#,
        )
        .unwrap();

        let config = ServerConfig {
            seed_file: Some(seed),
            ..Default::default()
        };
        let entries = config.load_seed().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id.value(), 2);
        assert_eq!(entries[0].car.engine.as_deref(), Some("V4"));
        assert_eq!(entries[1].car.engine.as_deref(), Some("V6"));
    }

    #[test]
    fn test_no_seed_is_empty() {
        assert!(ServerConfig::default().load_seed().unwrap().is_empty());
    }
}
