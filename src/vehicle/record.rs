//! Vehicle record types

use serde::{Deserialize, Serialize};

/// Caller-assigned vehicle identifier (no auto-increment)
pub type VehicleId = u32;

/// Exterior dimensions in meters, each independently bounded
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// One vehicle's stored attributes plus identifier.
///
/// The id is immutable after creation and the registration is unique
/// across the whole catalog. The only field ever mutated in place is
/// `max_speed`, through the dedicated update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    /// Passenger capacity
    pub capacity: u32,
    /// Maximum speed in km/h
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    /// Weight in kg
    pub weight: f64,
    pub dimensions: Dimensions,
}
