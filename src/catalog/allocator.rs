//! Id allocation
//!
//! The first candidate is `count() + offset`; occupied candidates are
//! skipped one at a time. The result is the smallest free id at or above
//! the starting candidate, so ids freed by deletes get recycled.
//!
//! The probe is linear in the number of occupied ids above the start.

use super::store::{CarId, CarStore};

/// Next free id at or above `store.count() + offset`
///
/// Returns `None` when the probe runs past the end of the id space.
pub fn next_free_id(store: &CarStore, offset: u32) -> Option<CarId> {
    let count = u32::try_from(store.count()).ok()?;
    let mut candidate = count.checked_add(offset)?;

    while store.contains(CarId::new(candidate)) {
        candidate = candidate.checked_add(1)?;
    }

    Some(CarId::new(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::CarDraft;

    fn fill(store: &mut CarStore, ids: &[u32]) {
        for id in ids {
            store.put(CarId::new(*id), CarDraft::with_year(2000).into_car().unwrap());
        }
    }

    #[test]
    fn test_empty_store_starts_at_zero() {
        let store = CarStore::new();
        assert_eq!(next_free_id(&store, 0), Some(CarId::new(0)));
    }

    #[test]
    fn test_offset_biases_start() {
        let store = CarStore::new();
        assert_eq!(next_free_id(&store, 10), Some(CarId::new(10)));
    }

    #[test]
    fn test_reuses_freed_slot() {
        let mut store = CarStore::new();
        fill(&mut store, &[0, 2]);
        // count is 2, but 2 is taken
        assert_eq!(next_free_id(&store, 0), Some(CarId::new(3)));

        let mut store = CarStore::new();
        fill(&mut store, &[0, 2]);
        store.delete(CarId::new(0)).unwrap();
        // count is 1, slot 1 is free
        assert_eq!(next_free_id(&store, 0), Some(CarId::new(1)));
    }

    #[test]
    fn test_probes_past_dense_run() {
        let mut store = CarStore::new();
        fill(&mut store, &[3, 4, 5, 6]);
        assert_eq!(next_free_id(&store, 0), Some(CarId::new(7)));
    }

    #[test]
    fn test_overflow_is_none() {
        let mut store = CarStore::new();
        fill(&mut store, &[0]);
        assert_eq!(next_free_id(&store, u32::MAX), None);
    }
}
