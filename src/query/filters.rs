//! Predicate filters over catalog snapshots
//!
//! String predicates are case-sensitive exact matches; range
//! predicates are inclusive on both ends. An inverted range (start
//! greater than end) simply matches nothing.

use crate::store::Snapshot;

/// Records matching both the color and the fabrication year exactly
pub fn by_color_and_year(mut snapshot: Snapshot, color: &str, year: i32) -> Snapshot {
    snapshot.retain(|_, v| v.color == color && v.fabrication_year == year);
    snapshot
}

/// Records of a brand fabricated within `[start_year, end_year]`
pub fn by_brand_and_year_range(
    mut snapshot: Snapshot,
    brand: &str,
    start_year: i32,
    end_year: i32,
) -> Snapshot {
    snapshot.retain(|_, v| {
        v.brand == brand && v.fabrication_year >= start_year && v.fabrication_year <= end_year
    });
    snapshot
}

/// Records of a brand; feeds the aggregate computations
pub fn by_brand(mut snapshot: Snapshot, brand: &str) -> Snapshot {
    snapshot.retain(|_, v| v.brand == brand);
    snapshot
}

/// Records with the given fuel type
pub fn by_fuel_type(mut snapshot: Snapshot, fuel_type: &str) -> Snapshot {
    snapshot.retain(|_, v| v.fuel_type == fuel_type);
    snapshot
}

/// Records whose length and width both fall inside their bound pairs
pub fn by_dimension_range(
    mut snapshot: Snapshot,
    min_length: f64,
    max_length: f64,
    min_width: f64,
    max_width: f64,
) -> Snapshot {
    snapshot.retain(|_, v| {
        v.dimensions.length >= min_length
            && v.dimensions.length <= max_length
            && v.dimensions.width >= min_width
            && v.dimensions.width <= max_width
    });
    snapshot
}

/// Records whose weight falls inside `[min_weight, max_weight]`
pub fn by_weight_range(mut snapshot: Snapshot, min_weight: f64, max_weight: f64) -> Snapshot {
    snapshot.retain(|_, v| v.weight >= min_weight && v.weight <= max_weight);
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{Dimensions, VehicleRecord};

    fn record(id: u32, brand: &str, color: &str, year: i32) -> VehicleRecord {
        VehicleRecord {
            id,
            brand: brand.into(),
            model: "Model".into(),
            registration: format!("REG{id}"),
            color: color.into(),
            fabrication_year: year,
            capacity: 4,
            max_speed: 180.0,
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
    fn test_by_color_and_year_needs_both() {
        let snap = snapshot(vec![
            record(1, "Ford", "red", 2020),
            record(2, "Ford", "red", 2021),
            record(3, "Ford", "blue", 2020),
        ]);

        let matched = by_color_and_year(snap, "red", 2020);
        assert_eq!(matched.len(), 1);
        assert!(matched.contains_key(&1));
    }

    #[test]
    fn test_color_match_is_case_sensitive() {
        let snap = snapshot(vec![record(1, "Ford", "Red", 2020)]);
        assert!(by_color_and_year(snap, "red", 2020).is_empty());
    }

    #[test]
    fn test_by_brand_and_year_range_is_inclusive() {
        let snap = snapshot(vec![
            record(1, "Ford", "red", 2019),
            record(2, "Ford", "red", 2020),
            record(3, "Ford", "red", 2022),
            record(4, "Toyota", "red", 2020),
        ]);

        let matched = by_brand_and_year_range(snap, "Ford", 2019, 2020);
        assert_eq!(matched.len(), 2);
        assert!(matched.contains_key(&1));
        assert!(matched.contains_key(&2));
    }

    #[test]
    fn test_inverted_year_range_matches_nothing() {
        let snap = snapshot(vec![record(1, "Toyota", "red", 2015)]);
        assert!(by_brand_and_year_range(snap, "Toyota", 2020, 2010).is_empty());
    }

    #[test]
    fn test_by_brand() {
        let snap = snapshot(vec![
            record(1, "Ford", "red", 2020),
            record(2, "Toyota", "red", 2020),
        ]);

        let matched = by_brand(snap, "Ford");
        assert_eq!(matched.len(), 1);
        assert!(matched.contains_key(&1));
    }

    #[test]
    fn test_by_fuel_type() {
        let mut diesel = record(2, "Ford", "red", 2020);
        diesel.fuel_type = "diesel".into();
        let snap = snapshot(vec![record(1, "Ford", "red", 2020), diesel]);

        let matched = by_fuel_type(snap, "diesel");
        assert_eq!(matched.len(), 1);
        assert!(matched.contains_key(&2));
    }

    #[test]
    fn test_by_dimension_range_needs_both_axes() {
        let mut wide = record(2, "Ford", "red", 2020);
        wide.dimensions.width = 2.5;
        let snap = snapshot(vec![record(1, "Ford", "red", 2020), wide]);

        // Both records fit the length window, only id 1 fits the width.
        let matched = by_dimension_range(snap, 3.0, 5.0, 1.0, 2.0);
        assert_eq!(matched.len(), 1);
        assert!(matched.contains_key(&1));
    }

    #[test]
    fn test_dimension_bounds_are_inclusive() {
        let snap = snapshot(vec![record(1, "Ford", "red", 2020)]);
        let matched = by_dimension_range(snap, 4.0, 4.0, 1.8, 1.8);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_by_weight_range() {
        let mut light = record(2, "Ford", "red", 2020);
        light.weight = 100.0;
        let snap = snapshot(vec![record(1, "Ford", "red", 2020), light]);

        let matched = by_weight_range(snap, 50.0, 200.0);
        assert_eq!(matched.len(), 1);
        assert!(matched.contains_key(&2));
    }

    #[test]
    fn test_filters_on_empty_snapshot() {
        assert!(by_brand(Snapshot::new(), "Ford").is_empty());
        assert!(by_color_and_year(Snapshot::new(), "red", 2020).is_empty());
    }
}
