//! Response types for the HTTP API
//!
//! Map-shaped payloads use a `BTreeMap` so response bodies are
//! deterministic regardless of store iteration order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::vehicle::VehicleId;

/// Records keyed by id, plus a count
#[derive(Debug, Clone, Serialize)]
pub struct MapResponse<T: Serialize> {
    pub data: BTreeMap<VehicleId, T>,
    pub count: usize,
}

impl<T: Serialize> MapResponse<T> {
    pub fn new(data: BTreeMap<VehicleId, T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Batch insert acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct BatchCreatedResponse {
    pub created: usize,
}

/// Average max speed over a brand
#[derive(Debug, Clone, Serialize)]
pub struct AverageSpeedResponse {
    pub average_speed: f64,
}

/// Average passenger capacity over a brand
#[derive(Debug, Clone, Serialize)]
pub struct AverageCapacityResponse {
    pub average_capacity: f64,
}

/// Speed update acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct SpeedUpdateResponse {
    pub id: VehicleId,
    pub max_speed: f64,
}

/// Liveness probe body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_response_counts_entries() {
        let mut data = BTreeMap::new();
        data.insert(1, json!({"id": 1}));
        data.insert(2, json!({"id": 2}));

        let response = MapResponse::new(data);
        assert_eq!(response.count, 2);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["data"]["1"]["id"], 1);
    }

    #[test]
    fn test_single_response_serialization() {
        let response = SingleResponse::new(json!({"id": 7}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"]["id"], 7);
    }

    #[test]
    fn test_health_response() {
        let value = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(value["status"], "ok");
    }
}
