use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use tracing::info;

use super::AppState;
use crate::{
    error::{Result, TourError},
    schemas::decode_payload,
    types::{
        AssignmentPlan, AssignmentRequest, CurrentConditions, ItineraryRecord,
        OptimizationRequest, RouteOptimization, TourAnalytics, TourConfiguration, TourSummary,
        TourUpdate, TravelPreferences, WeatherImpact,
    },
};

/// Decode a JSON body, reporting the failing path. An empty body reads as `{}`.
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    let value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(body)
            .map_err(|err| TourError::Validation(format!("Request body is not JSON: {err}")))?
    };
    decode_payload(value)
}

pub(super) async fn create_tour(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ItineraryRecord>)> {
    let config: TourConfiguration = decode_body(&body)?;
    info!(
        target: "tour_agent::http",
        region = config.primary_region.label(),
        days = config.duration,
        "create tour"
    );
    let record = state.planner.create_itinerary(config).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub(super) async fn list_tours(State(state): State<AppState>) -> Result<Json<Vec<ItineraryRecord>>> {
    Ok(Json(state.planner.list_itineraries().await?))
}

pub(super) async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItineraryRecord>> {
    Ok(Json(state.planner.get_itinerary(&id).await?))
}

pub(super) async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ItineraryRecord>> {
    let update: TourUpdate = decode_body(&body)?;
    Ok(Json(state.planner.update_itinerary(&id, update).await?))
}

pub(super) async fn delete_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.planner.delete_itinerary(&id).await?;
    Ok(Json(json!({ "message": "Tour deleted successfully" })))
}

pub(super) async fn location_info(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<Value>> {
    let info = state.planner.location_info(&location).await?;
    Ok(Json(json!({ "info": info })))
}

pub(super) async fn optimize_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteOptimization>> {
    let request: OptimizationRequest = decode_body(&body)?;
    Ok(Json(state.planner.optimize_route(request).await?))
}

pub(super) async fn vehicle_assignments(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AssignmentPlan>> {
    let request: AssignmentRequest = decode_body(&body)?;
    Ok(Json(state.planner.vehicle_assignments(request).await?))
}

pub(super) async fn analytics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TourAnalytics>> {
    Ok(Json(state.planner.analytics(&id).await?))
}

pub(super) async fn recommendations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>> {
    let preferences: TravelPreferences = decode_body(&body)?;
    let recommendations = state.planner.recommendations(preferences).await?;
    Ok(Json(json!({ "recommendations": recommendations })))
}

pub(super) async fn summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TourSummary>> {
    Ok(Json(state.planner.summary(&id).await?))
}

#[derive(Debug, Deserialize)]
pub(super) struct AlternativesQuery {
    location: Option<String>,
}

pub(super) async fn alternatives(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AlternativesQuery>,
) -> Result<Json<Value>> {
    let location = query
        .location
        .filter(|location| !location.trim().is_empty())
        .ok_or_else(|| TourError::configuration("location", "query parameter is required"))?;
    let alternatives = state.planner.alternative_locations(&id, &location).await?;
    Ok(Json(json!({ "alternatives": alternatives })))
}

pub(super) async fn weather_impact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<WeatherImpact>> {
    let conditions: CurrentConditions = decode_body(&body)?;
    Ok(Json(state.planner.weather_impact(&id, &conditions).await?))
}
