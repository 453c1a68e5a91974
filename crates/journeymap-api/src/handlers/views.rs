use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use journeymap_map::surfaces::{self, FilterButton, MarkerView};
use serde_json::Value as JsonValue;

use super::to_json;
use crate::dto::ViewQuery;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn markers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<Vec<MarkerView>>, ApiError> {
    let map_state = query.to_state(state.default_filter)?;
    Ok(Json(surfaces::marker_views(&state.data, &map_state)))
}

pub async fn timeline(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<JsonValue>, ApiError> {
    let map_state = query.to_state(state.default_filter)?;
    let view = surfaces::timeline_for(&state.data, &map_state);

    tracing::debug!(filter = %map_state.filter, rows = view.experiences, "Building timeline");

    to_json(&view)
}

/// Detail modal for `?selected=`; 404 while nothing resolvable is selected
pub async fn modal(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<JsonValue>, ApiError> {
    let map_state = query.to_state(state.default_filter)?;

    match surfaces::modal_view(&state.data, &map_state) {
        Some(view) => to_json(&view),
        None => Err(ApiError::not_found("No location selected").with_details(format!(
            "selected={}",
            query.selected.as_deref().unwrap_or("")
        ))),
    }
}

pub async fn filter_bar(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<Vec<FilterButton>>, ApiError> {
    let map_state = query.to_state(state.default_filter)?;
    Ok(Json(surfaces::filter_bar(&state.stats, &map_state)))
}
