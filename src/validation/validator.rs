//! Field validation for candidate vehicle records

use chrono::{Datelike, Utc};

use crate::vehicle::{VehicleError, VehicleRecord, VehicleResult};

/// Lower bound on fabrication year
const MIN_FABRICATION_YEAR: i32 = 1900;
/// Passenger capacity bounds
const CAPACITY_RANGE: (u32, u32) = (1, 6);
/// Max speed bounds in km/h, shared with the speed-update operation
pub(crate) const MAX_SPEED_RANGE: (f64, f64) = (0.0, 300.0);
/// Weight bounds in kg
const WEIGHT_RANGE: (f64, f64) = (0.0, 500.0);
/// Bounds applied to each dimension
const DIMENSION_RANGE: (f64, f64) = (0.0, 500.0);

/// Validates candidate records before they reach the store.
///
/// Validation is deterministic and does not mutate the record. The
/// current calendar year is captured at construction so tests can pin
/// it.
#[derive(Debug, Clone)]
pub struct VehicleValidator {
    current_year: i32,
}

impl VehicleValidator {
    /// Creates a validator bound to the current calendar year
    pub fn new() -> Self {
        Self::with_current_year(Utc::now().year())
    }

    /// Creates a validator with a pinned upper year bound
    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Validates a candidate record.
    ///
    /// # Errors
    ///
    /// Returns `FieldRequired` for the first field holding its zero
    /// sentinel, otherwise `InvalidFieldValue` for the first field
    /// violating its bound.
    pub fn validate(&self, record: &VehicleRecord) -> VehicleResult<()> {
        self.check_required(record)?;
        self.check_ranges(record)
    }

    fn check_required(&self, record: &VehicleRecord) -> VehicleResult<()> {
        let text_fields = [
            ("brand", &record.brand),
            ("model", &record.model),
            ("registration", &record.registration),
            ("color", &record.color),
        ];
        for (field, value) in text_fields {
            if value.is_empty() {
                return Err(VehicleError::FieldRequired { field });
            }
        }

        if record.fabrication_year == 0 {
            return Err(VehicleError::FieldRequired { field: "year" });
        }
        if record.capacity == 0 {
            return Err(VehicleError::FieldRequired { field: "passengers" });
        }
        if record.max_speed == 0.0 {
            return Err(VehicleError::FieldRequired { field: "max_speed" });
        }
        if record.fuel_type.is_empty() {
            return Err(VehicleError::FieldRequired { field: "fuel_type" });
        }
        if record.transmission.is_empty() {
            return Err(VehicleError::FieldRequired { field: "transmission" });
        }
        if record.weight == 0.0 {
            return Err(VehicleError::FieldRequired { field: "weight" });
        }
        if record.dimensions.height == 0.0 {
            return Err(VehicleError::FieldRequired { field: "height" });
        }
        if record.dimensions.length == 0.0 {
            return Err(VehicleError::FieldRequired { field: "length" });
        }
        if record.dimensions.width == 0.0 {
            return Err(VehicleError::FieldRequired { field: "width" });
        }

        Ok(())
    }

    fn check_ranges(&self, record: &VehicleRecord) -> VehicleResult<()> {
        if record.fabrication_year < MIN_FABRICATION_YEAR
            || record.fabrication_year > self.current_year
        {
            return Err(VehicleError::InvalidFieldValue { field: "year" });
        }
        if record.capacity < CAPACITY_RANGE.0 || record.capacity > CAPACITY_RANGE.1 {
            return Err(VehicleError::InvalidFieldValue { field: "passengers" });
        }
        if !in_range(record.max_speed, MAX_SPEED_RANGE) {
            return Err(VehicleError::InvalidFieldValue { field: "max_speed" });
        }
        if !in_range(record.weight, WEIGHT_RANGE) {
            return Err(VehicleError::InvalidFieldValue { field: "weight" });
        }
        if !in_range(record.dimensions.height, DIMENSION_RANGE) {
            return Err(VehicleError::InvalidFieldValue { field: "height" });
        }
        if !in_range(record.dimensions.length, DIMENSION_RANGE) {
            return Err(VehicleError::InvalidFieldValue { field: "length" });
        }
        if !in_range(record.dimensions.width, DIMENSION_RANGE) {
            return Err(VehicleError::InvalidFieldValue { field: "width" });
        }

        Ok(())
    }
}

impl Default for VehicleValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn in_range(value: f64, (min, max): (f64, f64)) -> bool {
    value >= min && value <= max
}
