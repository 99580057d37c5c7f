//! In-memory record store
//!
//! Maps ids to cars and remembers insertion order. Overwriting an existing
//! id keeps its position; deleting and re-inserting moves it to the end.
//! The store itself is not synchronized, the [`Catalog`](super::Catalog)
//! wraps it in a single lock.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{CatalogError, CatalogResult};
use super::record::Car;

/// Identifier of a stored car
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(u32);

impl CarId {
    pub const fn new(value: u32) -> Self {
        CarId(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse a non-negative integer id from user input
    pub fn parse(raw: &str) -> CatalogResult<Self> {
        raw.trim()
            .parse::<u32>()
            .map(CarId)
            .map_err(|_| CatalogError::validation(format!("id must be a non-negative integer, got '{}'", raw)))
    }

    /// Parse an id and require it to be below `upper`
    pub fn parse_bounded(raw: &str, upper: u32) -> CatalogResult<Self> {
        let id = Self::parse(raw)?;
        if id.0 >= upper {
            return Err(CatalogError::validation(format!(
                "id must be >= 0 and < {}, got {}",
                upper, id.0
            )));
        }
        Ok(id)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    seq: u64,
    car: Car,
}

/// Insertion-ordered id → car mapping
#[derive(Debug, Default)]
pub struct CarStore {
    slots: HashMap<CarId, Slot>,
    order: BTreeMap<u64, CarId>,
    next_seq: u64,
}

impl CarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a car by id
    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.slots.get(&id).map(|slot| &slot.car)
    }

    pub fn contains(&self, id: CarId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Up to `limit` entries in insertion order
    pub fn list(&self, limit: usize) -> Vec<(CarId, Car)> {
        self.order
            .values()
            .take(limit)
            .filter_map(|id| self.slots.get(id).map(|slot| (*id, slot.car.clone())))
            .collect()
    }

    /// Insert or overwrite
    pub fn put(&mut self, id: CarId, car: Car) {
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.car = car;
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, id);
        self.slots.insert(id, Slot { seq, car });
    }

    /// Remove an entry, returning its last value
    pub fn delete(&mut self, id: CarId) -> CatalogResult<Car> {
        let slot = self.slots.remove(&id).ok_or(CatalogError::NotFound(id))?;
        self.order.remove(&slot.seq);
        Ok(slot.car)
    }

    /// Number of live records
    pub fn count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::CarDraft;

    fn car(year: i32) -> Car {
        CarDraft::with_year(year).into_car().unwrap()
    }

    #[test]
    fn test_put_get() {
        let mut store = CarStore::new();
        assert!(store.get(CarId::new(0)).is_none());

        store.put(CarId::new(0), car(2000));
        assert_eq!(store.get(CarId::new(0)).map(|c| c.year), Some(2000));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_list_is_insertion_ordered_and_clamped() {
        let mut store = CarStore::new();
        store.put(CarId::new(5), car(2001));
        store.put(CarId::new(1), car(2002));
        store.put(CarId::new(3), car(2003));

        let ids: Vec<u32> = store.list(10).iter().map(|(id, _)| id.value()).collect();
        assert_eq!(ids, vec![5, 1, 3]);

        assert_eq!(store.list(2).len(), 2);
        assert!(store.list(0).is_empty());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut store = CarStore::new();
        store.put(CarId::new(0), car(2000));
        store.put(CarId::new(1), car(2001));
        store.put(CarId::new(0), car(1999));

        let listed = store.list(10);
        assert_eq!(listed[0].0, CarId::new(0));
        assert_eq!(listed[0].1.year, 1999);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_reinsert_after_delete_moves_to_end() {
        let mut store = CarStore::new();
        store.put(CarId::new(0), car(2000));
        store.put(CarId::new(1), car(2001));
        store.delete(CarId::new(0)).unwrap();
        store.put(CarId::new(0), car(2002));

        let ids: Vec<u32> = store.list(10).iter().map(|(id, _)| id.value()).collect();
        assert_eq!(ids, vec![1, 0]);
    }

    #[test]
    fn test_delete_missing() {
        let mut store = CarStore::new();
        assert_eq!(
            store.delete(CarId::new(9)),
            Err(CatalogError::NotFound(CarId::new(9)))
        );
    }

    #[test]
    fn test_id_parsing() {
        assert_eq!(CarId::parse(" 42 ").unwrap(), CarId::new(42));
        assert!(CarId::parse("-1").is_err());
        assert!(CarId::parse("abc").is_err());
        assert!(CarId::parse_bounded("999", 1000).is_ok());
        assert!(CarId::parse_bounded("1000", 1000).is_err());
    }
}
