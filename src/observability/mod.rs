//! Observability for the catalog server
//!
//! - Structured JSON logging ([`Logger`])
//! - Atomic operation counters ([`CatalogMetrics`])
//!
//! Observability never changes what an operation does.

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{CatalogMetrics, MetricsSnapshot};
