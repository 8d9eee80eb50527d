//! Vehicle HTTP Routes
//!
//! Filter, aggregate and create endpoints under `/vehicles`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::journal::CreationJournal;
use crate::repository::{Average, RepositoryError, RepositoryResult, VehicleSet};
use crate::service::VehicleService;
use crate::vehicle::{Vehicle, VehicleDoc, VehicleId, REQUIRED_FIELDS};

use super::errors::{ApiError, ApiResult};
use super::params::{parse_number, parse_range, query_number};
use super::response::{to_docs, Envelope, VehicleDocs};

// ==================
// Shared State
// ==================

/// Vehicle state shared across handlers
pub struct VehicleState {
    service: Arc<dyn VehicleService>,
    journal: Arc<dyn CreationJournal>,
    next_id: AtomicI64,
}

impl VehicleState {
    /// Build the state, continuing ids after the highest one already stored
    pub fn new(
        service: Arc<dyn VehicleService>,
        journal: Arc<dyn CreationJournal>,
    ) -> RepositoryResult<Self> {
        let highest = service.find_all()?.keys().next_back().copied().unwrap_or(0);
        let next_id = highest
            .max(0)
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;
        Ok(Self {
            service,
            journal,
            next_id: AtomicI64::new(next_id),
        })
    }

    /// Hand out the next id; never wraps past `VehicleId::MAX`
    fn allocate_id(&self) -> RepositoryResult<VehicleId> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| RepositoryError::IdsExhausted)
    }
}

type SharedState = Arc<VehicleState>;

type ListResult = ApiResult<Json<Envelope<VehicleDocs>>>;

// ==================
// Vehicle Routes
// ==================

/// Create vehicle routes
pub fn vehicle_routes(state: Arc<VehicleState>) -> Router {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/color/:color/year/:year", get(get_by_color_year))
        .route(
            "/brand/:brand/between/:start_year/:end_year",
            get(get_by_brand_year_range),
        )
        .route("/average_speed/brand/:brand", get(get_by_brand_average_speed))
        .route("/fuel_type/:type", get(get_by_fuel_type))
        .route("/transmission/:type", get(get_by_transmission_type))
        .route(
            "/average_capacity/brand/:brand",
            get(get_by_brand_average_capacity),
        )
        .route("/weight", get(get_by_weight_range))
        .route("/dimensions", get(get_by_dimension_range))
        .with_state(state)
}

/// Wrap a filter result, turning an empty set into a 404
fn non_empty(vehicles: VehicleSet, not_found: &str) -> ListResult {
    if vehicles.is_empty() {
        return Err(ApiError::not_found(not_found));
    }
    Ok(Json(Envelope::success(to_docs(&vehicles))))
}

fn average(avg: Average) -> ApiResult<Json<Envelope<f64>>> {
    if avg.is_empty() {
        return Err(ApiError::not_found("no vehicles found for that brand"));
    }
    Ok(Json(Envelope::success(avg.value)))
}

// ==================
// Handlers
// ==================

async fn get_all(State(state): State<SharedState>) -> ListResult {
    let vehicles = state.service.find_all()?;
    Ok(Json(Envelope::success(to_docs(&vehicles))))
}

async fn get_by_color_year(
    State(state): State<SharedState>,
    Path((color, year)): Path<(String, String)>,
) -> ListResult {
    let year: i32 = parse_number(&year, "invalid year")?;

    let vehicles = state.service.find_by_color_year(&color, year)?;
    non_empty(vehicles, "no vehicles found with that color and year")
}

async fn get_by_brand_year_range(
    State(state): State<SharedState>,
    Path((brand, start_year, end_year)): Path<(String, String, String)>,
) -> ListResult {
    let start_year: i32 = parse_number(&start_year, "invalid start year")?;
    let end_year: i32 = parse_number(&end_year, "invalid end year")?;

    let vehicles = state
        .service
        .find_by_brand_year_range(&brand, start_year, end_year)?;
    non_empty(vehicles, "no vehicles found for that brand and year range")
}

async fn get_by_brand_average_speed(
    State(state): State<SharedState>,
    Path(brand): Path<String>,
) -> ApiResult<Json<Envelope<f64>>> {
    average(state.service.find_by_brand_average_speed(&brand)?)
}

async fn get_by_fuel_type(
    State(state): State<SharedState>,
    Path(fuel_type): Path<String>,
) -> ListResult {
    let vehicles = state.service.find_by_fuel_type(&fuel_type)?;
    non_empty(vehicles, "no vehicles found with that fuel type")
}

async fn get_by_transmission_type(
    State(state): State<SharedState>,
    Path(transmission): Path<String>,
) -> ListResult {
    let vehicles = state.service.find_by_transmission_type(&transmission)?;
    non_empty(vehicles, "no vehicles found with that transmission type")
}

async fn get_by_brand_average_capacity(
    State(state): State<SharedState>,
    Path(brand): Path<String>,
) -> ApiResult<Json<Envelope<f64>>> {
    average(state.service.find_by_brand_average_capacity(&brand)?)
}

async fn get_by_weight_range(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> ListResult {
    let min: f64 = query_number(&query, "min", "invalid min weight")?;
    let max: f64 = query_number(&query, "max", "invalid max weight")?;

    let vehicles = state.service.find_by_weight_range(min, max)?;
    non_empty(vehicles, "no vehicles found in that weight range")
}

async fn get_by_dimension_range(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> ListResult {
    let height = query.get("height").map(String::as_str).unwrap_or("");
    let (min_height, max_height) = parse_range(height, "invalid height")?;
    let width = query.get("width").map(String::as_str).unwrap_or("");
    let (min_width, max_width) = parse_range(width, "invalid width")?;

    let vehicles =
        state
            .service
            .find_by_dimension_range(min_height, min_width, max_height, max_width)?;
    non_empty(vehicles, "no vehicles found with those dimensions")
}

/// Validate a creation payload and decode it
fn decode_payload(body: &[u8]) -> ApiResult<VehicleDoc> {
    let mut value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("invalid request body: {}", e)))?;

    let fields = value
        .as_object_mut()
        .ok_or_else(|| ApiError::bad_request("request body must be a JSON object"))?;
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(ApiError::bad_request(format!("field {} is required", missing)));
    }
    // Ids are assigned by the server.
    fields.remove("id");

    serde_json::from_value(value)
        .map_err(|e| ApiError::bad_request(format!("invalid request body: {}", e)))
}

async fn create(
    State(state): State<SharedState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Envelope<VehicleDoc>>)> {
    let mut doc = decode_payload(&body)?;
    doc.id = state.allocate_id()?;

    state.journal.append(&doc)?;

    let vehicle = Vehicle::from(doc.clone());
    state.service.save(vehicle)?;
    tracing::info!(id = doc.id, brand = %doc.brand, "vehicle created");

    Ok((StatusCode::CREATED, Json(Envelope::success(doc))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::journal::MemoryJournal;
    use crate::repository::{VehicleMap, VehicleRepository};
    use crate::service::VehicleDefault;
    use crate::vehicle::VehicleAttributes;

    fn state_with_highest(id: VehicleId) -> RepositoryResult<VehicleState> {
        let repo = VehicleMap::default();
        repo.save(Vehicle::new(id, VehicleAttributes::default()))?;
        VehicleState::new(
            Arc::new(VehicleDefault::new(repo)),
            Arc::new(MemoryJournal::new()),
        )
    }

    fn payload() -> Value {
        json!({
            "brand": "Fiat", "model": "500", "registration": "FI-500",
            "color": "yellow", "year": 2012, "passengers": 4, "max_speed": 160.0,
            "fuel_type": "gasoline", "transmission": "manual", "weight": 900.0,
            "height": 1.49, "length": 3.55, "width": 1.63
        })
    }

    #[test]
    fn test_decode_valid_payload() {
        let doc = decode_payload(payload().to_string().as_bytes()).unwrap();
        assert_eq!(doc.brand, "Fiat");
        assert_eq!(doc.passengers, 4);
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let mut body = payload();
        body.as_object_mut().unwrap().remove("weight");
        body.as_object_mut().unwrap().remove("width");

        let err = decode_payload(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "field weight is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_wrong_types_are_bad_requests() {
        let mut body = payload();
        body["year"] = json!("two thousand");

        let err = decode_payload(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_non_object_body() {
        let err = decode_payload(b"[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "request body must be a JSON object");

        let err = decode_payload(b"not json").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_client_id_is_dropped_before_decoding() {
        let mut body = payload();
        body["id"] = json!("abc");

        let doc = decode_payload(body.to_string().as_bytes()).unwrap();
        assert_eq!(doc.id, 0);
    }

    #[test]
    fn test_ids_continue_after_highest() {
        let state = state_with_highest(41).unwrap();
        assert_eq!(state.allocate_id().unwrap(), 42);
        assert_eq!(state.allocate_id().unwrap(), 43);
    }

    #[test]
    fn test_max_seed_id_is_rejected() {
        let result = state_with_highest(VehicleId::MAX);
        assert!(matches!(result, Err(RepositoryError::IdsExhausted)));
    }

    #[test]
    fn test_allocation_stops_at_max() {
        let state = state_with_highest(VehicleId::MAX - 1).unwrap();

        let err = state.allocate_id().unwrap_err();
        assert!(matches!(err, RepositoryError::IdsExhausted));
        // The counter does not wrap into negative ids.
        assert!(state.allocate_id().is_err());
    }
}
