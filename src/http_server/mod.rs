//! # HTTP Server Module
//!
//! Axum server exposing the car catalog.
//!
//! # Endpoints
//!
//! - `/`, `/cars`, `/cars/:id`, `/create_car`, `/search`, `/edit`, `/delete`
//! - `/health` - Health check
//! - `/observability/*` - Health and counters

pub mod car_routes;
pub mod config;
pub mod errors;
pub mod form;
pub mod observability_routes;
pub mod server;

pub use car_routes::{car_routes, CarEntry, CarListResponse, DeletedResponse};
pub use config::HttpServerConfig;
pub use errors::ErrorResponse;
pub use server::HttpServer;
