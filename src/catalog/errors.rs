//! Catalog error types
//!
//! Every failure a catalog operation can report is either a validation
//! failure or a missing record. Nothing is retried.

use thiserror::Error;

use super::store::CarId;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Input failed field-level validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No live record at the given id
    #[error("No car with id {0}")]
    NotFound(CarId),
}

impl CatalogError {
    /// Build a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        CatalogError::Validation(msg.into())
    }

    /// Whether this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => "CARLOT_VALIDATION_ERROR",
            CatalogError::NotFound(_) => "CARLOT_NOT_FOUND",
        }
    }
}
