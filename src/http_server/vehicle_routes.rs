//! Vehicle HTTP routes
//!
//! Endpoints for catalog CRUD, filtered reads, and brand aggregates.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogService;
use crate::observability::Logger;
use crate::store::Snapshot;
use crate::vehicle::{Dimensions, VehicleId, VehicleRecord};

use super::errors::{ApiError, ApiResult};
use super::response::{
    AverageCapacityResponse, AverageSpeedResponse, BatchCreatedResponse, MapResponse,
    SingleResponse, SpeedUpdateResponse,
};

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub service: CatalogService,
}

impl CatalogState {
    pub fn new(service: CatalogService) -> Self {
        Self { service }
    }
}

// ==================
// Wire Types
// ==================

/// A vehicle record in JSON wire format.
///
/// Field names follow the public API (`year`, `passengers`) and the
/// dimensions triple is flattened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleJson {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    #[serde(rename = "year")]
    pub fabrication_year: i32,
    #[serde(rename = "passengers")]
    pub capacity: u32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl From<VehicleJson> for VehicleRecord {
    fn from(json: VehicleJson) -> Self {
        VehicleRecord {
            id: json.id,
            brand: json.brand,
            model: json.model,
            registration: json.registration,
            color: json.color,
            fabrication_year: json.fabrication_year,
            capacity: json.capacity,
            max_speed: json.max_speed,
            fuel_type: json.fuel_type,
            transmission: json.transmission,
            weight: json.weight,
            dimensions: Dimensions {
                height: json.height,
                length: json.length,
                width: json.width,
            },
        }
    }
}

impl From<VehicleRecord> for VehicleJson {
    fn from(record: VehicleRecord) -> Self {
        VehicleJson {
            id: record.id,
            brand: record.brand,
            model: record.model,
            registration: record.registration,
            color: record.color,
            fabrication_year: record.fabrication_year,
            capacity: record.capacity,
            max_speed: record.max_speed,
            fuel_type: record.fuel_type,
            transmission: record.transmission,
            weight: record.weight,
            height: record.dimensions.height,
            length: record.dimensions.length,
            width: record.dimensions.width,
        }
    }
}

/// Body of the speed update request
#[derive(Debug, Clone, Deserialize)]
pub struct SpeedUpdateRequest {
    pub max_speed: f64,
}

#[derive(Debug, Deserialize)]
struct DimensionParams {
    /// Length window formatted as "min-max"
    length: String,
    /// Width window formatted as "min-max"
    width: String,
}

#[derive(Debug, Deserialize)]
struct WeightParams {
    /// Weight window formatted as "min-max"
    weight: String,
}

// ==================
// Routes
// ==================

/// Create the vehicle catalog routes
pub fn vehicle_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route(
            "/vehicles",
            get(list_vehicles_handler).post(create_vehicle_handler),
        )
        .route("/vehicles/batch", post(create_batch_handler))
        .route(
            "/vehicles/color/{color}/year/{year}",
            get(by_color_and_year_handler),
        )
        .route(
            "/vehicles/brand/{brand}/between/{start_year}/{end_year}",
            get(by_brand_and_years_handler),
        )
        .route(
            "/vehicles/average_speed/brand/{brand}",
            get(average_speed_handler),
        )
        .route(
            "/vehicles/average_capacity/brand/{brand}",
            get(average_capacity_handler),
        )
        .route("/vehicles/fuel_type/{fuel_type}", get(by_fuel_type_handler))
        .route("/vehicles/dimensions", get(by_dimensions_handler))
        .route("/vehicles/weight", get(by_weight_handler))
        .route("/vehicles/{id}/update_speed", put(update_speed_handler))
        .route("/vehicles/{id}", delete(delete_vehicle_handler))
        .with_state(state)
}

// ==================
// Helpers
// ==================

fn to_map_response(snapshot: Snapshot) -> MapResponse<VehicleJson> {
    let data: BTreeMap<VehicleId, VehicleJson> = snapshot
        .into_iter()
        .map(|(id, record)| (id, VehicleJson::from(record)))
        .collect();
    MapResponse::new(data)
}

/// Parses a "min-max" query value into a bound pair.
///
/// Ordering of the pair is not checked here; that precondition belongs
/// to the catalog service.
fn parse_bound_pair(name: &str, raw: &str) -> Result<(f64, f64), ApiError> {
    let (min, max) = raw.split_once('-').ok_or_else(|| {
        ApiError::InvalidQueryParam(format!("{name} must be formatted as 'min-max'"))
    })?;
    let min: f64 = min
        .parse()
        .map_err(|_| ApiError::InvalidQueryParam(format!("invalid min_{name}")))?;
    let max: f64 = max
        .parse()
        .map_err(|_| ApiError::InvalidQueryParam(format!("invalid max_{name}")))?;
    Ok((min, max))
}

// ==================
// Handlers
// ==================

async fn list_vehicles_handler(
    State(state): State<Arc<CatalogState>>,
) -> Json<MapResponse<VehicleJson>> {
    // An empty catalog is a normal 200 with an empty map.
    Json(to_map_response(state.service.find_all()))
}

async fn create_vehicle_handler(
    State(state): State<Arc<CatalogState>>,
    Json(body): Json<VehicleJson>,
) -> ApiResult<(StatusCode, Json<SingleResponse<VehicleJson>>)> {
    let record = VehicleRecord::from(body);
    let echo = record.clone();
    state.service.add(record)?;

    Logger::info("VEHICLE_CREATED", &[("id", &echo.id.to_string())]);
    Ok((
        StatusCode::CREATED,
        Json(SingleResponse::new(VehicleJson::from(echo))),
    ))
}

async fn create_batch_handler(
    State(state): State<Arc<CatalogState>>,
    Json(body): Json<Vec<VehicleJson>>,
) -> ApiResult<(StatusCode, Json<BatchCreatedResponse>)> {
    let records: Vec<VehicleRecord> = body.into_iter().map(VehicleRecord::from).collect();
    let created = records.len();
    state.service.add_batch(records)?;

    Logger::info("VEHICLE_BATCH_CREATED", &[("count", &created.to_string())]);
    Ok((
        StatusCode::CREATED,
        Json(BatchCreatedResponse { created }),
    ))
}

async fn by_color_and_year_handler(
    State(state): State<Arc<CatalogState>>,
    Path((color, year)): Path<(String, i32)>,
) -> ApiResult<Json<MapResponse<VehicleJson>>> {
    let matched = state.service.get_by_color_and_year(&color, year)?;
    Ok(Json(to_map_response(matched)))
}

async fn by_brand_and_years_handler(
    State(state): State<Arc<CatalogState>>,
    Path((brand, start_year, end_year)): Path<(String, i32, i32)>,
) -> ApiResult<Json<MapResponse<VehicleJson>>> {
    let matched = state
        .service
        .get_by_brand_and_years(&brand, start_year, end_year)?;
    Ok(Json(to_map_response(matched)))
}

async fn average_speed_handler(
    State(state): State<Arc<CatalogState>>,
    Path(brand): Path<String>,
) -> ApiResult<Json<AverageSpeedResponse>> {
    let average_speed = state.service.get_average_speed_by_brand(&brand)?;
    Ok(Json(AverageSpeedResponse { average_speed }))
}

async fn average_capacity_handler(
    State(state): State<Arc<CatalogState>>,
    Path(brand): Path<String>,
) -> ApiResult<Json<AverageCapacityResponse>> {
    let average_capacity = state.service.get_average_capacity_by_brand(&brand)?;
    Ok(Json(AverageCapacityResponse { average_capacity }))
}

async fn by_fuel_type_handler(
    State(state): State<Arc<CatalogState>>,
    Path(fuel_type): Path<String>,
) -> ApiResult<Json<MapResponse<VehicleJson>>> {
    let matched = state.service.get_by_fuel_type(&fuel_type)?;
    Ok(Json(to_map_response(matched)))
}

async fn by_dimensions_handler(
    State(state): State<Arc<CatalogState>>,
    Query(params): Query<DimensionParams>,
) -> ApiResult<Json<MapResponse<VehicleJson>>> {
    let (min_length, max_length) = parse_bound_pair("length", &params.length)?;
    let (min_width, max_width) = parse_bound_pair("width", &params.width)?;

    let matched = state
        .service
        .get_by_dimensions(min_length, max_length, min_width, max_width)?;
    Ok(Json(to_map_response(matched)))
}

async fn by_weight_handler(
    State(state): State<Arc<CatalogState>>,
    Query(params): Query<WeightParams>,
) -> ApiResult<Json<MapResponse<VehicleJson>>> {
    let (min_weight, max_weight) = parse_bound_pair("weight", &params.weight)?;

    let matched = state.service.get_by_weight(min_weight, max_weight)?;
    Ok(Json(to_map_response(matched)))
}

async fn update_speed_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<VehicleId>,
    Json(body): Json<SpeedUpdateRequest>,
) -> ApiResult<Json<SpeedUpdateResponse>> {
    state.service.update_max_speed(id, body.max_speed)?;

    Logger::info("VEHICLE_SPEED_UPDATED", &[("id", &id.to_string())]);
    Ok(Json(SpeedUpdateResponse {
        id,
        max_speed: body.max_speed,
    }))
}

async fn delete_vehicle_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<VehicleId>,
) -> ApiResult<StatusCode> {
    state.service.delete(id)?;

    Logger::info("VEHICLE_DELETED", &[("id", &id.to_string())]);
    Ok(StatusCode::NO_CONTENT)
}
