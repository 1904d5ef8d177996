//! Catalog service for fleetdb
//!
//! The service facade composes the validator, the store, and the query
//! engine. It is the only layer the HTTP adapter talks to:
//!
//! 1. Mutations run validation before touching the store
//! 2. Store-level conflicts are wrapped for caller-facing reporting
//! 3. Reads filter a snapshot and turn emptiness into `NotFound`
//! 4. Bound pairs are checked for min <= max before filtering

mod service;

pub use service::CatalogService;
