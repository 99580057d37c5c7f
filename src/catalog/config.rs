//! Catalog configuration

use serde::{Deserialize, Serialize};

/// Largest `number` a list request may carry (three digits)
pub const MAX_LIST_LIMIT: usize = 999;

/// Exclusive upper bound on ids accepted by path lookups and updates
pub const MAX_PATH_ID: u32 = 1000;

/// Catalog behavior knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Entries returned by a list request with no `number` (default: 10)
    #[serde(default = "default_list_limit")]
    pub default_list_limit: usize,

    /// Re-check the year range when a patch sets `year` (default: false)
    #[serde(default)]
    pub validate_year_on_update: bool,
}

fn default_list_limit() -> usize {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_list_limit: default_list_limit(),
            validate_year_on_update: false,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_list_limit > MAX_LIST_LIMIT {
            return Err(format!(
                "default_list_limit must be <= {}, got {}",
                MAX_LIST_LIMIT, self.default_list_limit
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.default_list_limit, 10);
        assert!(!config.validate_year_on_update);
    }

    #[test]
    fn test_validate_limit() {
        let config = CatalogConfig {
            default_list_limit: 1000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(CatalogConfig::default().validate().is_ok());
    }
}
