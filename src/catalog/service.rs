//! Catalog operations over a substitutable store

use std::sync::Arc;

use crate::query::{aggregates, filters};
use crate::store::{Snapshot, VehicleStore};
use crate::validation::{VehicleValidator, MAX_SPEED_RANGE};
use crate::vehicle::{VehicleError, VehicleId, VehicleRecord, VehicleResult};

/// Service facade over the vehicle catalog.
///
/// The backing store is chosen at construction time; production wires
/// in [`crate::store::MemoryVehicleStore`], tests substitute their own.
pub struct CatalogService {
    store: Arc<dyn VehicleStore>,
    validator: VehicleValidator,
}

impl CatalogService {
    /// Creates a service bound to the current calendar year
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self::with_validator(store, VehicleValidator::new())
    }

    /// Creates a service with an explicit validator (tests pin the year)
    pub fn with_validator(store: Arc<dyn VehicleStore>, validator: VehicleValidator) -> Self {
        Self { store, validator }
    }

    /// Snapshot of the whole catalog; an empty catalog is a normal result
    pub fn find_all(&self) -> Snapshot {
        self.store.find_all()
    }

    /// Validates and inserts a single record.
    ///
    /// # Errors
    ///
    /// `FieldRequired` / `InvalidFieldValue` from validation, or
    /// `AlreadyExists` when the id or registration is taken.
    pub fn add(&self, record: VehicleRecord) -> VehicleResult<()> {
        self.validator.validate(&record)?;
        self.store.insert(record).map_err(VehicleError::into_conflict)
    }

    /// Validates every record, then commits the batch atomically.
    ///
    /// The first invalid record rejects the whole batch before the
    /// store is consulted; a conflict inside the store rejects it with
    /// nothing committed.
    pub fn add_batch(&self, records: Vec<VehicleRecord>) -> VehicleResult<()> {
        for record in &records {
            self.validator.validate(record)?;
        }
        self.store
            .insert_batch(records)
            .map_err(VehicleError::into_conflict)
    }

    /// Records matching both color and fabrication year
    pub fn get_by_color_and_year(&self, color: &str, year: i32) -> VehicleResult<Snapshot> {
        non_empty(filters::by_color_and_year(self.store.find_all(), color, year))
    }

    /// Records of a brand fabricated within the inclusive year range.
    ///
    /// An inverted range is simply empty and reports `NotFound`.
    pub fn get_by_brand_and_years(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> VehicleResult<Snapshot> {
        non_empty(filters::by_brand_and_year_range(
            self.store.find_all(),
            brand,
            start_year,
            end_year,
        ))
    }

    /// Records with the given fuel type
    pub fn get_by_fuel_type(&self, fuel_type: &str) -> VehicleResult<Snapshot> {
        non_empty(filters::by_fuel_type(self.store.find_all(), fuel_type))
    }

    /// Records whose length and width fall inside the given windows.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when a bound pair arrives with min > max; this is
    /// a distinct outcome from `NotFound`.
    pub fn get_by_dimensions(
        &self,
        min_length: f64,
        max_length: f64,
        min_width: f64,
        max_width: f64,
    ) -> VehicleResult<Snapshot> {
        check_bound_order("length", min_length, max_length)?;
        check_bound_order("width", min_width, max_width)?;
        non_empty(filters::by_dimension_range(
            self.store.find_all(),
            min_length,
            max_length,
            min_width,
            max_width,
        ))
    }

    /// Records whose weight falls inside the given window
    pub fn get_by_weight(&self, min_weight: f64, max_weight: f64) -> VehicleResult<Snapshot> {
        check_bound_order("weight", min_weight, max_weight)?;
        non_empty(filters::by_weight_range(
            self.store.find_all(),
            min_weight,
            max_weight,
        ))
    }

    /// Mean max speed over a brand's records
    pub fn get_average_speed_by_brand(&self, brand: &str) -> VehicleResult<f64> {
        let matched = filters::by_brand(self.store.find_all(), brand);
        aggregates::average_speed(&matched).ok_or(VehicleError::NotFound)
    }

    /// Mean passenger capacity over a brand's records
    pub fn get_average_capacity_by_brand(&self, brand: &str) -> VehicleResult<f64> {
        let matched = filters::by_brand(self.store.find_all(), brand);
        aggregates::average_capacity(&matched).ok_or(VehicleError::NotFound)
    }

    /// Overwrites one record's max speed.
    ///
    /// Only the speed bound is re-checked; full validation does not
    /// run again.
    pub fn update_max_speed(&self, id: VehicleId, speed: f64) -> VehicleResult<()> {
        if speed < MAX_SPEED_RANGE.0 || speed > MAX_SPEED_RANGE.1 {
            return Err(VehicleError::InvalidFieldValue { field: "max_speed" });
        }
        self.store.update_max_speed(id, speed)
    }

    /// Removes one record by id
    pub fn delete(&self, id: VehicleId) -> VehicleResult<()> {
        self.store.delete_by_id(id)
    }
}

/// An empty subset reports `NotFound`; callers cannot distinguish "no
/// match" from "empty catalog", and are not meant to.
fn non_empty(matched: Snapshot) -> VehicleResult<Snapshot> {
    if matched.is_empty() {
        return Err(VehicleError::NotFound);
    }
    Ok(matched)
}

fn check_bound_order(field: &'static str, min: f64, max: f64) -> VehicleResult<()> {
    if min > max {
        return Err(VehicleError::InvalidRange { field });
    }
    Ok(())
}
