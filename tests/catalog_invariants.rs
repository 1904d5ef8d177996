//! Catalog invariant tests
//!
//! End-to-end checks over the public service surface: uniqueness
//! invariants, all-or-nothing batches, snapshot isolation, and the
//! filtered-read/aggregate outcomes.

use std::sync::Arc;

use fleetdb::catalog::CatalogService;
use fleetdb::store::MemoryVehicleStore;
use fleetdb::validation::VehicleValidator;
use fleetdb::vehicle::{Dimensions, VehicleError, VehicleRecord};

fn service() -> CatalogService {
    CatalogService::with_validator(
        Arc::new(MemoryVehicleStore::new()),
        VehicleValidator::with_current_year(2026),
    )
}

fn vehicle(id: u32, registration: &str, brand: &str, year: i32, speed: f64) -> VehicleRecord {
    VehicleRecord {
        id,
        brand: brand.into(),
        model: "Fiesta".into(),
        registration: registration.into(),
        color: "red".into(),
        fabrication_year: year,
        capacity: 4,
        max_speed: speed,
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

#[test]
fn id_and_registration_stay_unique_across_operations() {
    let sv = service();
    sv.add(vehicle(1, "AAA111", "Ford", 2020, 180.0)).unwrap();

    // Conflicting inserts fail without mutating the store.
    assert!(sv.add(vehicle(1, "XXX000", "Ford", 2020, 180.0)).is_err());
    assert!(sv.add(vehicle(2, "AAA111", "Ford", 2020, 180.0)).is_err());
    assert_eq!(sv.find_all().len(), 1);

    // After a delete the id and registration are free again.
    sv.delete(1).unwrap();
    sv.add(vehicle(1, "AAA111", "Ford", 2020, 180.0)).unwrap();
}

#[test]
fn batch_with_one_invalid_record_leaves_store_unchanged() {
    let sv = service();
    sv.add(vehicle(10, "KEEP10", "Kept", 2015, 100.0)).unwrap();

    let mut bad = vehicle(3, "CCC333", "Ford", 2020, 180.0);
    bad.max_speed = 999.0;

    let err = sv
        .add_batch(vec![
            vehicle(1, "AAA111", "Ford", 2020, 180.0),
            vehicle(2, "BBB222", "Ford", 2021, 200.0),
            bad,
        ])
        .unwrap_err();
    assert_eq!(err, VehicleError::InvalidFieldValue { field: "max_speed" });

    let all = sv.find_all();
    assert_eq!(all.len(), 1);
    assert!(all.contains_key(&10));
}

#[test]
fn batch_conflicting_with_store_commits_nothing() {
    let sv = service();
    sv.add(vehicle(2, "BBB222", "Ford", 2021, 200.0)).unwrap();

    let err = sv
        .add_batch(vec![
            vehicle(1, "AAA111", "Ford", 2020, 180.0),
            vehicle(2, "DDD444", "Ford", 2022, 150.0),
        ])
        .unwrap_err();
    assert_eq!(err, VehicleError::AlreadyExists { reason: "id" });
    assert_eq!(sv.find_all().len(), 1);
}

#[test]
fn update_touches_exactly_one_record() {
    let sv = service();
    sv.add_batch(vec![
        vehicle(1, "AAA111", "Ford", 2020, 180.0),
        vehicle(2, "BBB222", "Ford", 2021, 200.0),
    ])
    .unwrap();

    sv.update_max_speed(1, 111.0).unwrap();

    let all = sv.find_all();
    assert_eq!(all[&1].max_speed, 111.0);
    assert_eq!(all[&2].max_speed, 200.0);

    assert_eq!(sv.update_max_speed(99, 100.0), Err(VehicleError::NotFound));
    assert_eq!(sv.find_all().len(), 2);
}

#[test]
fn delete_is_exact_and_not_repeatable() {
    let sv = service();
    sv.add_batch(vec![
        vehicle(1, "AAA111", "Ford", 2020, 180.0),
        vehicle(2, "BBB222", "Ford", 2021, 200.0),
    ])
    .unwrap();

    sv.delete(1).unwrap();
    assert_eq!(sv.find_all().len(), 1);
    assert_eq!(sv.delete(1), Err(VehicleError::NotFound));
    assert_eq!(sv.find_all().len(), 1);
}

#[test]
fn snapshot_reads_are_isolated_from_later_mutations() {
    let sv = service();
    sv.add(vehicle(1, "AAA111", "Ford", 2020, 180.0)).unwrap();

    let snapshot = sv.find_all();
    sv.update_max_speed(1, 50.0).unwrap();
    sv.delete(1).unwrap();

    assert_eq!(snapshot[&1].max_speed, 180.0);
    assert!(sv.find_all().is_empty());
}

#[test]
fn ford_scenario_average_speed_and_year_window() {
    let sv = service();
    sv.add_batch(vec![
        vehicle(1, "AAA111", "Ford", 2020, 180.0),
        vehicle(2, "BBB222", "Ford", 2021, 200.0),
    ])
    .unwrap();

    assert_eq!(sv.get_average_speed_by_brand("Ford").unwrap(), 190.0);

    let matched = sv.get_by_brand_and_years("Ford", 2020, 2020).unwrap();
    assert_eq!(matched.len(), 1);
    assert!(matched.contains_key(&1));
}

#[test]
fn inverted_year_range_reports_not_found() {
    let sv = service();
    sv.add(vehicle(1, "AAA111", "Toyota", 2015, 180.0)).unwrap();

    assert_eq!(
        sv.get_by_brand_and_years("Toyota", 2020, 2010),
        Err(VehicleError::NotFound)
    );
}

#[test]
fn unknown_brand_aggregate_is_not_found_not_a_number() {
    let sv = service();
    sv.add(vehicle(1, "AAA111", "Ford", 2020, 180.0)).unwrap();

    assert_eq!(
        sv.get_average_speed_by_brand("Ghost"),
        Err(VehicleError::NotFound)
    );
    assert_eq!(
        sv.get_average_capacity_by_brand("Ghost"),
        Err(VehicleError::NotFound)
    );
}

#[test]
fn bound_pair_order_is_a_distinct_error_from_not_found() {
    let sv = service();
    sv.add(vehicle(1, "AAA111", "Ford", 2020, 180.0)).unwrap();

    assert_eq!(
        sv.get_by_dimensions(5.0, 1.0, 1.0, 2.0),
        Err(VehicleError::InvalidRange { field: "length" })
    );
    assert_eq!(
        sv.get_by_weight(500.0, 100.0),
        Err(VehicleError::InvalidRange { field: "weight" })
    );
    assert_eq!(
        sv.get_by_dimensions(100.0, 200.0, 100.0, 200.0),
        Err(VehicleError::NotFound)
    );
}

#[test]
fn validation_short_circuits_on_first_missing_field() {
    let sv = service();
    let mut bad = vehicle(1, "AAA111", "Ford", 2020, 180.0);
    bad.model.clear();
    bad.fuel_type.clear();

    assert_eq!(
        sv.add(bad),
        Err(VehicleError::FieldRequired { field: "model" })
    );
}
