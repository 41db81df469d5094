//! In-memory driver store.
//!
//! # Responsibilities
//! - Own the driver collection exclusively
//! - Assign ids through the injected generator
//! - Keep the collection ranked by points (descending, stable on ties)
//! - Lookup by id and by 1-based standings position
//!
//! # Design Decisions
//! - Re-ranking happens once per insertion, over the whole collection
//! - Updates do not re-rank unless `rerank_on_update` is set
//! - Callers validate positions first; the store still bounds-checks them

use std::sync::Arc;

use crate::standings::driver::{Driver, DriverId, DriverPatch, NewDriver};
use crate::standings::error::{Lookup, StandingsError, StandingsResult};
use crate::standings::ids::IdGenerator;

/// Attempts before giving up on a colliding id generator.
const MAX_ID_ATTEMPTS: u32 = 8;

/// The authoritative driver collection.
pub struct DriverStore {
    drivers: Vec<Driver>,
    ids: Arc<dyn IdGenerator>,
    rerank_on_update: bool,
}

impl DriverStore {
    /// Create an empty store.
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            drivers: Vec::new(),
            ids,
            rerank_on_update: false,
        }
    }

    /// Re-rank after updates that change points.
    pub fn with_rerank_on_update(mut self, enabled: bool) -> Self {
        self.rerank_on_update = enabled;
        self
    }

    /// Drivers in current standings order.
    pub fn list(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Driver at a 1-based standings position.
    pub fn get_by_position(&self, position: usize) -> StandingsResult<&Driver> {
        position
            .checked_sub(1)
            .and_then(|index| self.drivers.get(index))
            .ok_or(StandingsError::DriverNotFound(Lookup::Position(position)))
    }

    pub fn get_by_id(&self, id: &DriverId) -> StandingsResult<&Driver> {
        self.index_of(id)
            .map(|index| &self.drivers[index])
            .ok_or_else(|| StandingsError::DriverNotFound(Lookup::Id(id.clone())))
    }

    /// Add a driver under a fresh id and re-rank.
    pub fn create(&mut self, new_driver: NewDriver) -> StandingsResult<Driver> {
        let id = self.fresh_id()?;
        self.insert(id, new_driver)
    }

    /// Add a driver under a caller-chosen id and re-rank.
    ///
    /// Used for seeding fixed datasets.
    pub fn insert(&mut self, id: DriverId, new_driver: NewDriver) -> StandingsResult<Driver> {
        if self.index_of(&id).is_some() {
            return Err(StandingsError::DuplicateId(id));
        }
        let driver = new_driver.into_driver(id);
        self.drivers.push(driver.clone());
        self.rank();

        tracing::debug!(
            id = %driver.id,
            points = driver.points,
            total = self.drivers.len(),
            "Driver inserted"
        );
        Ok(driver)
    }

    /// Merge a patch into an existing driver.
    pub fn update(&mut self, id: &DriverId, patch: &DriverPatch) -> StandingsResult<Driver> {
        let index = self
            .index_of(id)
            .ok_or_else(|| StandingsError::DriverNotFound(Lookup::Id(id.clone())))?;

        let points_changed = patch.apply_to(&mut self.drivers[index]);
        let updated = self.drivers[index].clone();

        if points_changed && self.rerank_on_update {
            self.rank();
        }

        tracing::debug!(id = %id, points = updated.points, points_changed, "Driver updated");
        Ok(updated)
    }

    /// Remove a driver, returning the removed record.
    pub fn delete(&mut self, id: &DriverId) -> StandingsResult<Driver> {
        let index = self
            .index_of(id)
            .ok_or_else(|| StandingsError::DriverNotFound(Lookup::Id(id.clone())))?;
        let removed = self.drivers.remove(index);

        tracing::debug!(id = %id, total = self.drivers.len(), "Driver removed");
        Ok(removed)
    }

    fn index_of(&self, id: &DriverId) -> Option<usize> {
        self.drivers.iter().position(|d| &d.id == id)
    }

    fn fresh_id(&self) -> StandingsResult<DriverId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.index_of(&id).is_none() {
                return Ok(id);
            }
            tracing::warn!(id = %id, "Generated driver id already taken, retrying");
        }
        Err(StandingsError::IdExhausted(MAX_ID_ATTEMPTS))
    }

    /// Stable sort, highest points first.
    fn rank(&mut self) {
        self.drivers.sort_by(|a, b| b.points.cmp(&a.points));
    }
}

impl std::fmt::Debug for DriverStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverStore")
            .field("drivers", &self.drivers)
            .field("rerank_on_update", &self.rerank_on_update)
            .finish()
    }
}
