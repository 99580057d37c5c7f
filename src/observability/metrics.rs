//! Catalog counters
//!
//! Monotonic counters plus one gauge for the live record count.
//! Relaxed atomics; values are exact once requests have settled.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct CatalogMetrics {
    lists: AtomicU64,
    lookups: AtomicU64,
    creates: AtomicU64,
    updates: AtomicU64,
    deletes: AtomicU64,
    validation_failures: AtomicU64,
    not_found: AtomicU64,
    cars: AtomicU64,
}

impl CatalogMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_lists(&self) {
        self.lists.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_creates(&self) {
        self.creates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updates(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deletes(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_validation_failures(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Set the live record gauge
    pub fn set_cars(&self, count: u64) {
        self.cars.store(count, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lists: self.lists.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            creates: self.creates.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            cars: self.cars.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub lists: u64,
    pub lookups: u64,
    pub creates: u64,
    pub updates: u64,
    pub deletes: u64,
    pub validation_failures: u64,
    pub not_found: u64,
    pub cars: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let snapshot = CatalogMetrics::new().snapshot();
        assert_eq!(snapshot.creates, 0);
        assert_eq!(snapshot.cars, 0);
        assert_eq!(snapshot.not_found, 0);
    }

    #[test]
    fn test_counters_and_gauge() {
        let metrics = CatalogMetrics::new();
        metrics.increment_creates();
        metrics.increment_creates();
        metrics.increment_deletes();
        metrics.increment_validation_failures();
        metrics.set_cars(1);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.creates, 2);
        assert_eq!(snapshot.deletes, 1);
        assert_eq!(snapshot.validation_failures, 1);
        assert_eq!(snapshot.cars, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = CatalogMetrics::new();
        metrics.increment_lookups();
        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["lookups"], 1);
        assert_eq!(json["updates"], 0);
    }
}
