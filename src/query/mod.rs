//! Query engine for fleetdb
//!
//! Pure predicate filters and aggregate computations over a snapshot
//! copy of the catalog.
//!
//! # Execution model
//!
//! 1. The caller takes a snapshot from the store
//! 2. Filters narrow the snapshot to a subset keyed by id
//! 3. Aggregates reduce a subset to a single value
//!
//! Filters are total: any well-formed snapshot in, a (possibly empty)
//! subset out. Converting emptiness into a "not found" outcome is the
//! service layer's job, as is enforcing min <= max on bound pairs.

pub mod aggregates;
pub mod filters;
