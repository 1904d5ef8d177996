//! In-memory map-backed vehicle store

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::vehicle::{VehicleError, VehicleId, VehicleRecord, VehicleResult};

use super::{Snapshot, VehicleStore};

/// The production [`VehicleStore`]: a `HashMap` keyed by vehicle id
/// behind an `RwLock`.
///
/// Uniqueness is enforced by an O(n) scan over existing records, which
/// is acceptable at catalog scale. The scan and the mutation it guards
/// share one write guard.
#[derive(Debug, Default)]
pub struct MemoryVehicleStore {
    records: RwLock<HashMap<VehicleId, VehicleRecord>>,
}

impl MemoryVehicleStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    ///
    /// The caller vouches for the uniqueness of the supplied map;
    /// boot-time seeding goes through the validated batch path instead.
    pub fn with_records(records: HashMap<VehicleId, VehicleRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Mutations never leave the map in a partial state, so a guard
    // recovered from a poisoned lock still sees consistent data.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<VehicleId, VehicleRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<VehicleId, VehicleRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Checks a candidate against every record yielded by `existing`.
    /// Id conflicts win over registration conflicts.
    fn check_conflicts<'a, I>(candidate: &VehicleRecord, existing: I) -> VehicleResult<()>
    where
        I: IntoIterator<Item = &'a VehicleRecord>,
    {
        for record in existing {
            if record.id == candidate.id {
                return Err(VehicleError::IdAlreadyExists);
            }
            if record.registration == candidate.registration {
                return Err(VehicleError::RegistrationAlreadyExists);
            }
        }
        Ok(())
    }
}

impl VehicleStore for MemoryVehicleStore {
    fn find_all(&self) -> Snapshot {
        self.read().clone()
    }

    fn insert(&self, record: VehicleRecord) -> VehicleResult<()> {
        let mut records = self.write();
        Self::check_conflicts(&record, records.values())?;
        records.insert(record.id, record);
        Ok(())
    }

    fn insert_batch(&self, batch: Vec<VehicleRecord>) -> VehicleResult<()> {
        let mut records = self.write();

        // Phase one: every record is checked against the store and
        // against the records ahead of it in the batch, so the batch
        // cannot smuggle in an internal duplicate.
        for (i, candidate) in batch.iter().enumerate() {
            Self::check_conflicts(candidate, records.values().chain(batch[..i].iter()))?;
        }

        // Phase two: commit. Nothing below can fail.
        for record in batch {
            records.insert(record.id, record);
        }

        Ok(())
    }

    fn update_max_speed(&self, id: VehicleId, speed: f64) -> VehicleResult<()> {
        let mut records = self.write();
        match records.get_mut(&id) {
            Some(record) => {
                record.max_speed = speed;
                Ok(())
            }
            None => Err(VehicleError::NotFound),
        }
    }

    fn delete_by_id(&self, id: VehicleId) -> VehicleResult<()> {
        let mut records = self.write();
        match records.remove(&id) {
            Some(_) => Ok(()),
            None => Err(VehicleError::NotFound),
        }
    }
}
