//! fleetdb - An in-memory, self-hostable vehicle catalog service
//!
//! Layers, leaves first: `vehicle` (record shape and error taxonomy),
//! `store` (in-memory map behind a capability trait), `validation` and
//! `query` (pure functions over records), `catalog` (the service
//! facade), and the `http_server`/`cli`/`observability` ambient stack.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod store;
pub mod validation;
pub mod vehicle;
