//! Aggregate computations over filtered subsets
//!
//! Emptiness is checked before dividing; an empty subset yields `None`,
//! never a NaN.

use crate::store::Snapshot;

/// Arithmetic mean of max speed over the subset
pub fn average_speed(records: &Snapshot) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: f64 = records.values().map(|v| v.max_speed).sum();
    Some(total / records.len() as f64)
}

/// Arithmetic mean of passenger capacity over the subset
pub fn average_capacity(records: &Snapshot) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: f64 = records.values().map(|v| f64::from(v.capacity)).sum();
    Some(total / records.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{Dimensions, VehicleRecord};

    fn record(id: u32, max_speed: f64, capacity: u32) -> VehicleRecord {
        VehicleRecord {
            id,
            brand: "Ford".into(),
            model: "Model".into(),
            registration: format!("REG{id}"),
            color: "red".into(),
            fabrication_year: 2020,
            capacity,
            max_speed,
            fuel_type: "gasoline".into(),
            transmission: "manual".into(),
            weight: 450.0,
            dimensions: Dimensions {
                height: 1.5,
                length: 4.0,
                width: 1.8,
            },
        }
    }

    fn snapshot(records: Vec<VehicleRecord>) -> Snapshot {
        records.into_iter().map(|r| (r.id, r)).collect()
    }

    #[test]
    fn test_average_speed() {
        let snap = snapshot(vec![record(1, 180.0, 4), record(2, 200.0, 2)]);
        assert_eq!(average_speed(&snap), Some(190.0));
    }

    #[test]
    fn test_average_capacity() {
        let snap = snapshot(vec![record(1, 180.0, 4), record(2, 200.0, 2)]);
        assert_eq!(average_capacity(&snap), Some(3.0));
    }

    #[test]
    fn test_single_record_average_is_its_value() {
        let snap = snapshot(vec![record(1, 120.0, 5)]);
        assert_eq!(average_speed(&snap), Some(120.0));
        assert_eq!(average_capacity(&snap), Some(5.0));
    }

    #[test]
    fn test_empty_subset_yields_none() {
        let snap = Snapshot::new();
        assert_eq!(average_speed(&snap), None);
        assert_eq!(average_capacity(&snap), None);
    }
}
