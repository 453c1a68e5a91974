use std::sync::Arc;

use axum::{extract::State, Json};
use journeymap_core::config::{INITIAL_CENTER, MAX_BOUNDS, MAX_ZOOM, MIN_ZOOM};
use journeymap_map::GlobalStats;

use crate::dto::ViewportResponse;
use crate::state::AppState;

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<GlobalStats> {
    Json(state.stats.clone())
}

pub async fn get_viewport(State(state): State<Arc<AppState>>) -> Json<ViewportResponse> {
    Json(ViewportResponse {
        center: INITIAL_CENTER,
        zoom: state.initial_zoom,
        min_zoom: MIN_ZOOM,
        max_zoom: MAX_ZOOM,
        max_bounds: MAX_BOUNDS,
        default_filter: state.default_filter,
    })
}
