use journeymap_core::models::{FilterType, MapLocation};
use journeymap_geo::Cluster;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub locations: usize,
}

impl HealthResponse {
    pub fn ok(locations: usize) -> Self {
        Self { status: "ok", service: "journeymap-api", locations }
    }
}

/// Initial camera and limits for a map renderer
#[derive(Debug, Serialize)]
pub struct ViewportResponse {
    pub center: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_bounds: [[f64; 2]; 2],
    pub default_filter: FilterType,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse<'a> {
    pub filter: FilterType,
    pub count: usize,
    pub locations: Vec<&'a MapLocation>,
}

#[derive(Debug, Serialize)]
pub struct ClustersResponse<'a> {
    pub filter: FilterType,
    pub zoom: f64,
    /// `None` once zoomed in far enough to show every location
    pub threshold: Option<f64>,
    pub clusters: Vec<Cluster<'a>>,
}
