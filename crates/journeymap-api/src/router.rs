use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Dataset
        .route("/api/v1/locations", get(handlers::list_locations))
        .route("/api/v1/locations/{location_id}", get(handlers::get_location))
        .route("/api/v1/stats", get(handlers::get_stats))
        .route("/api/v1/viewport", get(handlers::get_viewport))

        // Surface views
        .route("/api/v1/markers", get(handlers::markers))
        .route("/api/v1/timeline", get(handlers::timeline))
        .route("/api/v1/modal", get(handlers::modal))
        .route("/api/v1/filters", get(handlers::filter_bar))
        .route("/api/v1/clusters", get(handlers::list_clusters))

        // GeoJSON
        .route("/api/v1/geojson/locations", get(handlers::locations_geojson))
        .route("/api/v1/geojson/clusters", get(handlers::clusters_geojson))

        .with_state(state)
}
