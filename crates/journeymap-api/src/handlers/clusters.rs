use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use geojson::FeatureCollection;
use journeymap_geo::export::clusters_to_geojson;
use journeymap_geo::{clustering_threshold, clusters_for_zoom, should_cluster};
use journeymap_map::filtered_locations;
use serde_json::Value as JsonValue;

use super::to_json;
use crate::dto::{ClustersQuery, ClustersResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_clusters(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClustersQuery>,
) -> Result<Json<JsonValue>, ApiError> {
    let filter = query.filter_or(state.default_filter)?;
    let zoom = query.zoom_or(state.initial_zoom);

    let clusters = clusters_for_zoom(filtered_locations(&state.data, filter), zoom);

    tracing::debug!(%filter, zoom, clusters = clusters.len(), "Clustering locations");

    to_json(&ClustersResponse {
        filter,
        zoom,
        threshold: should_cluster(zoom).then(|| clustering_threshold(zoom)),
        clusters,
    })
}

pub async fn clusters_geojson(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClustersQuery>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let filter = query.filter_or(state.default_filter)?;
    let zoom = query.zoom_or(state.initial_zoom);

    let clusters = clusters_for_zoom(filtered_locations(&state.data, filter), zoom);

    Ok(Json(clusters_to_geojson(&clusters)))
}
