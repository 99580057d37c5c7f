//! Catalog service
//!
//! Owns the store behind one mutex. Create (allocate then put), update
//! (read, merge, write) and delete each run inside a single critical
//! section, so concurrent requests never hand out the same id twice.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::observability::{CatalogMetrics, Logger};

use super::allocator::next_free_id;
use super::config::CatalogConfig;
use super::errors::{CatalogError, CatalogResult};
use super::record::{validate_year, Car, CarDraft, CarPatch};
use super::store::{CarId, CarStore};

/// One pre-loaded record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub id: CarId,
    pub car: Car,
}

/// The shared car catalog
#[derive(Debug)]
pub struct Catalog {
    store: Mutex<CarStore>,
    config: CatalogConfig,
    metrics: Arc<CatalogMetrics>,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_metrics(config, Arc::new(CatalogMetrics::new()))
    }

    pub fn with_metrics(config: CatalogConfig, metrics: Arc<CatalogMetrics>) -> Self {
        Self {
            store: Mutex::new(CarStore::new()),
            config,
            metrics,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<CatalogMetrics> {
        &self.metrics
    }

    // Store operations never panic half-way, so a poisoned lock still
    // guards a consistent map.
    fn store(&self) -> MutexGuard<'_, CarStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load seed records in order
    ///
    /// Every record must pass create validation and ids must be unique,
    /// otherwise nothing is loaded.
    pub fn seed(&self, entries: Vec<SeedEntry>) -> CatalogResult<usize> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.car.validate()?;
            if !seen.insert(entry.id) {
                return Err(CatalogError::validation(format!(
                    "duplicate seed id {}",
                    entry.id
                )));
            }
        }

        let mut store = self.store();
        for entry in &entries {
            if store.contains(entry.id) {
                return Err(CatalogError::validation(format!(
                    "seed id {} already in use",
                    entry.id
                )));
            }
        }

        let loaded = entries.len();
        for entry in entries {
            store.put(entry.id, entry.car);
        }
        self.metrics.set_cars(store.count() as u64);
        drop(store);

        Logger::info("SEED_LOADED", &[("cars", loaded.to_string().as_str())]);
        Ok(loaded)
    }

    /// First `limit` records in store order
    pub fn list(&self, limit: usize) -> Vec<(CarId, Car)> {
        self.metrics.increment_lists();
        let cars = self.store().list(limit);
        Logger::trace("CARS_LISTED", &[("returned", cars.len().to_string().as_str())]);
        cars
    }

    /// Look up one record
    pub fn get(&self, id: CarId) -> CatalogResult<Car> {
        self.metrics.increment_lookups();
        let found = self.store().get(id).cloned();
        found.ok_or_else(|| self.not_found("get", id))
    }

    /// Validate a draft and store it under a freshly allocated id
    pub fn create(&self, draft: CarDraft, offset: u32) -> CatalogResult<CarId> {
        let car = draft.into_car().map_err(|e| self.rejected("create", e))?;

        let mut store = self.store();
        let id = next_free_id(&store, offset).ok_or_else(|| {
            self.rejected(
                "create",
                CatalogError::validation(format!("no free id at or above offset {}", offset)),
            )
        })?;
        store.put(id, car);
        self.metrics.set_cars(store.count() as u64);
        drop(store);

        self.metrics.increment_creates();
        Logger::info("CAR_CREATED", &[("id", id.to_string().as_str())]);
        Ok(id)
    }

    /// Merge a patch into the record at `id`
    ///
    /// A missing record is reported before any field check.
    pub fn update(&self, id: CarId, patch: CarPatch) -> CatalogResult<Car> {
        let mut store = self.store();
        let Some(merged) = store.get(id).map(|stored| stored.merged(&patch)) else {
            drop(store);
            return Err(self.not_found("update", id));
        };

        if self.config.validate_year_on_update {
            if let Some(year) = patch.year {
                validate_year(year).map_err(|e| self.rejected("update", e))?;
            }
        }

        store.put(id, merged.clone());
        drop(store);

        self.metrics.increment_updates();
        Logger::info(
            "CAR_UPDATED",
            &[
                ("id", id.to_string().as_str()),
                ("fields", patch.fields_set().join(",").as_str()),
            ],
        );
        Ok(merged)
    }

    /// Remove the record at `id`, returning what it held
    pub fn delete(&self, id: CarId) -> CatalogResult<Car> {
        let mut store = self.store();
        let deleted = store.delete(id);
        let count = store.count();
        drop(store);

        match deleted {
            Ok(car) => {
                self.metrics.set_cars(count as u64);
                self.metrics.increment_deletes();
                Logger::info("CAR_DELETED", &[("id", id.to_string().as_str())]);
                Ok(car)
            }
            Err(_) => Err(self.not_found("delete", id)),
        }
    }

    /// Number of live records
    pub fn count(&self) -> usize {
        self.store().count()
    }

    fn not_found(&self, op: &str, id: CarId) -> CatalogError {
        self.metrics.increment_not_found();
        Logger::warn("CAR_NOT_FOUND", &[("id", id.to_string().as_str()), ("op", op)]);
        CatalogError::NotFound(id)
    }

    fn rejected(&self, op: &str, err: CatalogError) -> CatalogError {
        self.metrics.increment_validation_failures();
        Logger::warn("VALIDATION_REJECTED", &[("op", op), ("reason", err.to_string().as_str())]);
        err
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}
