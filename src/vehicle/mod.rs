//! Vehicle record model for fleetdb
//!
//! The record shape shared by every subsystem: a vehicle's stored
//! attributes plus its caller-assigned identifier, and the closed
//! enumeration of error kinds carried alongside every fallible result.
//!
//! # Invariants
//!
//! - Identifiers are caller-assigned and immutable after creation
//! - No two records share an id; no two share a registration
//! - Records enter the catalog only through validated inserts

mod errors;
mod record;

pub use errors::{VehicleError, VehicleResult};
pub use record::{Dimensions, VehicleId, VehicleRecord};
