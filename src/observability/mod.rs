//! Observability for fleetdb
//!
//! Structured JSON logging only; the catalog carries no metrics layer.

mod logger;

pub use logger::{Logger, Severity};
