use journeymap_core::config::{clamp_zoom, LayeredConfig, DEFAULT_ZOOM};
use journeymap_core::models::{FilterType, MapData};
use journeymap_map::{global_stats, GlobalStats};

/// Shared, read-only server state.
///
/// The dataset never changes after startup, so the statistics are
/// computed once here instead of per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub data: MapData,
    pub stats: GlobalStats,
    pub default_filter: FilterType,
    pub initial_zoom: f64,
}

impl AppState {
    pub fn new(data: MapData) -> Self {
        let stats = global_stats(&data);
        Self { data, stats, default_filter: FilterType::All, initial_zoom: DEFAULT_ZOOM }
    }

    pub fn from_config(data: MapData, config: &LayeredConfig) -> Self {
        Self {
            default_filter: config.default_filter.value,
            initial_zoom: clamp_zoom(config.initial_zoom.value),
            ..Self::new(data)
        }
    }
}
