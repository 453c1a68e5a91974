use journeymap_core::config::clamp_zoom;
use journeymap_core::models::{FilterType, LocationId};
use journeymap_map::{MapState, MapStore};
use serde::Deserialize;

use crate::error::ApiError;

fn parse_filter(filter: Option<&str>, default: FilterType) -> Result<FilterType, ApiError> {
    match filter {
        Some(s) => Ok(s.parse()?),
        None => Ok(default),
    }
}

/// `?filter=` only
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub filter: Option<String>,
}

impl FilterQuery {
    pub fn filter_or(&self, default: FilterType) -> Result<FilterType, ApiError> {
        parse_filter(self.filter.as_deref(), default)
    }
}

/// Filter plus the client's selection and hover
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub filter: Option<String>,
    /// Selected location key
    pub selected: Option<String>,
    /// Selected entry id within `selected`
    pub entry: Option<String>,
    /// Hovered location key
    pub hovered: Option<String>,
}

impl ViewQuery {
    /// Replay the query through a store so the state obeys the same
    /// transitions as an interactive session.
    pub fn to_state(&self, default_filter: FilterType) -> Result<MapState, ApiError> {
        let filter = parse_filter(self.filter.as_deref(), default_filter)?;

        let mut store = MapStore::with_filter(filter);
        store.set_selected_location(
            self.selected.as_deref().map(LocationId::from),
            self.entry.clone(),
        );
        store.set_hovered_location(self.hovered.as_deref().map(LocationId::from));

        Ok(store.state().clone())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ClustersQuery {
    pub filter: Option<String>,
    pub zoom: Option<f64>,
}

impl ClustersQuery {
    pub fn filter_or(&self, default: FilterType) -> Result<FilterType, ApiError> {
        parse_filter(self.filter.as_deref(), default)
    }

    /// Requested zoom, clamped into the supported range
    pub fn zoom_or(&self, default: f64) -> f64 {
        clamp_zoom(self.zoom.unwrap_or(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_query_builds_state() {
        let query = ViewQuery {
            filter: Some("work".to_string()),
            selected: Some("Toronto-Canada".to_string()),
            entry: Some("acme".to_string()),
            hovered: Some("Tokyo-Japan".to_string()),
        };
        let state = query.to_state(FilterType::All).unwrap();

        assert_eq!(state.filter, FilterType::Work);
        assert_eq!(state.selected_location_id, Some(LocationId::from("Toronto-Canada")));
        assert_eq!(state.selected_entry_id.as_deref(), Some("acme"));
        assert_eq!(state.hovered_location_id, Some(LocationId::from("Tokyo-Japan")));
    }

    #[test]
    fn test_entry_without_location_is_dropped() {
        let query = ViewQuery { entry: Some("acme".to_string()), ..ViewQuery::default() };
        let state = query.to_state(FilterType::Travel).unwrap();

        assert_eq!(state.filter, FilterType::Travel);
        assert!(state.selected_entry_id.is_none());
    }

    #[test]
    fn test_cluster_zoom_is_clamped() {
        let query = ClustersQuery { zoom: Some(42.0), ..ClustersQuery::default() };
        assert_eq!(query.zoom_or(1.8), 10.0);
        assert_eq!(ClustersQuery::default().zoom_or(1.8), 1.8);
    }

    #[test]
    fn test_invalid_filter_is_bad_request() {
        let query = FilterQuery { filter: Some("hobbies".to_string()) };
        let err = query.filter_or(FilterType::All).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }
}
