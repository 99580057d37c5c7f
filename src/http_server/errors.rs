//! # HTTP error mapping
//!
//! Catalog errors become JSON bodies: validation → 422, not found → 404.
//! Extractor rejections (bad content type, undecodable form or query,
//! bad path) are validation errors too.

use axum::extract::rejection::{FormRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::catalog::CatalogError;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl CatalogError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<CatalogError> for ErrorResponse {
    fn from(err: CatalogError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            kind: err.code(),
            error: err.to_string(),
        }
    }
}

impl From<FormRejection> for CatalogError {
    fn from(rejection: FormRejection) -> Self {
        CatalogError::validation(format!("invalid form: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::validation(format!("invalid query: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for CatalogError {
    fn from(rejection: PathRejection) -> Self {
        CatalogError::validation(format!("invalid path: {}", rejection.body_text()))
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
