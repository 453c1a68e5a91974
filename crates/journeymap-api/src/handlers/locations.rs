use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use geojson::FeatureCollection;
use journeymap_core::models::MapLocation;
use journeymap_geo::export::locations_to_geojson;
use journeymap_map::{filtered_locations, location_by_id};
use serde_json::Value as JsonValue;

use super::to_json;
use crate::dto::{FilterQuery, LocationsResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_locations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<JsonValue>, ApiError> {
    let filter = query.filter_or(state.default_filter)?;
    let locations = filtered_locations(&state.data, filter);

    tracing::debug!(%filter, count = locations.len(), "Listing locations");

    to_json(&LocationsResponse { filter, count: locations.len(), locations })
}

pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(location_id): Path<String>,
) -> Result<Json<MapLocation>, ApiError> {
    location_by_id(&state.data, &location_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Location not found: {}", location_id)))
}

pub async fn locations_geojson(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let filter = query.filter_or(state.default_filter)?;
    let locations: Vec<MapLocation> =
        filtered_locations(&state.data, filter).into_iter().cloned().collect();

    Ok(Json(locations_to_geojson(&locations)))
}
