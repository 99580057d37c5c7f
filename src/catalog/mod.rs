//! # Car catalog
//!
//! The in-memory catalog behind the HTTP routes:
//!
//! - [`record`]: record shapes and field validation
//! - [`store`]: insertion-ordered id → record map
//! - [`allocator`]: next free id policy
//! - [`service`]: the locked [`Catalog`] every handler goes through

pub mod allocator;
pub mod config;
pub mod errors;
pub mod record;
pub mod service;
pub mod store;

pub use config::{CatalogConfig, MAX_LIST_LIMIT, MAX_PATH_ID};
pub use errors::{CatalogError, CatalogResult};
pub use record::{Car, CarDraft, CarPatch, DEFAULT_ENGINE, MAX_YEAR_EXCLUSIVE, MIN_YEAR};
pub use service::{Catalog, SeedEntry};
pub use store::{CarId, CarStore};
