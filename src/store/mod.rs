//! Vehicle store subsystem for fleetdb
//!
//! The store holds the canonical in-memory state of the catalog, keyed
//! by vehicle id. There is no persistence layer; the whole catalog
//! lives and dies with the process.
//!
//! # Design Principles
//!
//! - Copy-on-read: every scan hands out a snapshot, so mutations during
//!   iteration never affect an in-flight read
//! - Uniqueness checks and the mutation they guard run under one write
//!   guard, so the invariants hold under concurrent inserts
//! - Batch insert is two-phase: validate every record, then commit all
//!   or none
//!
//! # Invariants Enforced
//!
//! - No two records share an id
//! - No two records share a registration

mod memory;

use std::collections::HashMap;

use crate::vehicle::{VehicleId, VehicleRecord, VehicleResult};

pub use memory::MemoryVehicleStore;

/// Point-in-time copy of the store's contents, isolated from
/// concurrent mutation
pub type Snapshot = HashMap<VehicleId, VehicleRecord>;

/// Capability interface over the catalog's backing storage.
///
/// Exactly one production implementation exists ([`MemoryVehicleStore`]);
/// tests substitute their own at construction time.
pub trait VehicleStore: Send + Sync {
    /// Returns a snapshot copy of every record
    fn find_all(&self) -> Snapshot;

    /// Inserts a record if neither its id nor its registration is taken.
    ///
    /// The id is checked first, then the registration, against every
    /// existing record.
    fn insert(&self, record: VehicleRecord) -> VehicleResult<()>;

    /// Inserts a batch with all-or-nothing semantics.
    ///
    /// The first conflict is returned and the store is left unchanged.
    fn insert_batch(&self, records: Vec<VehicleRecord>) -> VehicleResult<()>;

    /// Overwrites the max speed of the record with the given id
    fn update_max_speed(&self, id: VehicleId, speed: f64) -> VehicleResult<()>;

    /// Removes the record with the given id
    fn delete_by_id(&self, id: VehicleId) -> VehicleResult<()>;
}
