//! Contracts of the presentation surfaces: what each one reads and which
//! intents it emits. Rendering itself lives outside this crate.

use journeymap_core::models::{EntryType, FilterType, LocationId, MapEntry, MapLocation};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::stats::GlobalStats;
use crate::store::MapState;
use crate::views::{chronological_entries, filtered_locations, location_by_id, ChronologicalEntry};

/// User interactions reported by the surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    MarkerClicked(LocationId),
    /// `None` when the pointer leaves the marker
    MarkerHovered(Option<LocationId>),
    TimelineEntryClicked { location_id: LocationId, entry_id: String },
    TimelineEntryHovered(Option<LocationId>),
    FilterSelected(FilterType),
    /// Switch the open modal to another entry of the selected location
    ModalEntrySelected(String),
    ModalClosed,
}

/// How a marker is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "type")]
pub enum MarkerStyle {
    Single(EntryType),
    /// More than one category at this location
    Mixed,
    /// Location has no entries
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub id: LocationId,
    pub coordinates: [f64; 2],
    pub entry_types: Vec<EntryType>,
    pub style: MarkerStyle,
    /// Icon category, by priority education > work > conference > travel
    pub primary_type: Option<EntryType>,
    pub is_selected: bool,
    pub is_hovered: bool,
}

impl MarkerView {
    pub fn new(location: &MapLocation, state: &MapState) -> Self {
        let id = location.id();
        let entry_types = location.entry_types();
        let style = match entry_types.as_slice() {
            [] => MarkerStyle::Plain,
            [single] => MarkerStyle::Single(*single),
            _ => MarkerStyle::Mixed,
        };
        let primary_type = EntryType::ALL.into_iter().find(|t| entry_types.contains(t));

        Self {
            is_selected: state.is_selected_location(&id),
            is_hovered: state.is_hovered_location(&id),
            id,
            coordinates: location.coordinates,
            entry_types,
            style,
            primary_type,
        }
    }
}

/// Markers for the locations visible under the current filter
pub fn marker_views(locations: &[MapLocation], state: &MapState) -> Vec<MarkerView> {
    filtered_locations(locations, state.filter)
        .into_iter()
        .map(|location| MarkerView::new(location, state))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow<'a> {
    #[serde(flatten)]
    pub entry: ChronologicalEntry<'a>,
    pub is_selected: bool,
    pub is_hovered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView<'a> {
    pub filter: FilterType,
    pub rows: Vec<TimelineRow<'a>>,
    /// Number of rows
    pub experiences: usize,
    /// Distinct countries among the rows
    pub countries: usize,
}

impl TimelineView<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Chronological rows for the current filter.
///
/// Takes the already chronological entry list so callers can reuse a
/// memoized one; rows of other categories are dropped.
pub fn timeline_view<'a>(
    chronological: Vec<ChronologicalEntry<'a>>,
    state: &MapState,
) -> TimelineView<'a> {
    let rows: Vec<TimelineRow<'a>> = chronological
        .into_iter()
        .filter(|e| state.filter.accepts(e.entry.entry_type))
        .map(|entry| {
            let is_selected = state.is_selected_location(&entry.location_id)
                && state.selected_entry_id.as_deref() == Some(entry.entry.id.as_str());
            let is_hovered = state.is_hovered_location(&entry.location_id);
            TimelineRow { entry, is_selected, is_hovered }
        })
        .collect();

    let countries = rows.iter().map(|r| r.entry.country).collect::<BTreeSet<_>>().len();

    TimelineView { filter: state.filter, experiences: rows.len(), countries, rows }
}

/// Timeline computed straight from the dataset
pub fn timeline_for<'a>(locations: &'a [MapLocation], state: &MapState) -> TimelineView<'a> {
    timeline_view(chronological_entries(locations), state)
}

/// Content of the detail modal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalView<'a> {
    pub location_id: LocationId,
    pub location: &'a MapLocation,
    /// Explicitly selected entry, else the location's first entry.
    /// `None` if the explicit id matches nothing or the location has no entries.
    pub active_entry: Option<&'a MapEntry>,
}

/// Open modal for the current selection, if the selection resolves
pub fn modal_view<'a>(locations: &'a [MapLocation], state: &MapState) -> Option<ModalView<'a>> {
    let location_id = state.selected_location_id.as_ref()?;
    let location = location_by_id(locations, location_id.as_str())?;

    let active_entry = match state.selected_entry_id.as_deref() {
        Some(entry_id) => location.entry(entry_id),
        None => location.first_entry(),
    };

    Some(ModalView { location_id: location_id.clone(), location, active_entry })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub filter: FilterType,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

/// One button per filter with its entry count
pub fn filter_bar(stats: &GlobalStats, state: &MapState) -> Vec<FilterButton> {
    FilterType::ALL
        .into_iter()
        .map(|filter| FilterButton {
            filter,
            label: filter.label(),
            count: stats.entry_types.get(filter),
            active: filter == state.filter,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::global_stats;

    fn entry(id: &str, entry_type: EntryType, duration: &str) -> MapEntry {
        MapEntry::new(id, entry_type, "Inst", "Role", duration)
    }

    fn dataset() -> Vec<MapLocation> {
        vec![
            MapLocation::new("Toronto", "Canada", -79.38, 43.65)
                .with_entry(entry("uoft", EntryType::Education, "Sep 2018 - Jun 2023"))
                .with_entry(entry("job", EntryType::Work, "Jun 2021 - Present")),
            MapLocation::new("Tokyo", "Japan", 139.69, 35.68)
                .with_entry(entry("trip", EntryType::Travel, "Apr 2019")),
            MapLocation::new("Montreal", "Canada", -73.57, 45.50)
                .with_entry(entry("conf", EntryType::Conference, "Jul 2022"))
                .with_entry(entry("talk", EntryType::Education, "Aug 2022")),
        ]
    }

    fn state_with(filter: FilterType) -> MapState {
        MapState::with_filter(filter)
    }

    #[test]
    fn test_marker_styles() {
        let data = dataset();
        let markers = marker_views(&data, &MapState::default());

        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].style, MarkerStyle::Mixed);
        assert_eq!(markers[0].primary_type, Some(EntryType::Education));
        assert_eq!(markers[1].style, MarkerStyle::Single(EntryType::Travel));
        // Conference appears first, but education wins the icon
        assert_eq!(markers[2].entry_types, vec![EntryType::Conference, EntryType::Education]);
        assert_eq!(markers[2].primary_type, Some(EntryType::Education));

        let empty = MarkerView::new(&MapLocation::new("X", "Y", 0.0, 0.0), &MapState::default());
        assert_eq!(empty.style, MarkerStyle::Plain);
        assert_eq!(empty.primary_type, None);
    }

    #[test]
    fn test_marker_flags_follow_state() {
        let data = dataset();
        let state = MapState {
            selected_location_id: Some("Tokyo-Japan".into()),
            hovered_location_id: Some("Toronto-Canada".into()),
            ..MapState::default()
        };
        let markers = marker_views(&data, &state);

        assert!(markers[0].is_hovered && !markers[0].is_selected);
        assert!(markers[1].is_selected && !markers[1].is_hovered);
        assert!(!markers[2].is_selected && !markers[2].is_hovered);
    }

    #[test]
    fn test_markers_respect_filter() {
        let data = dataset();
        let markers = marker_views(&data, &state_with(FilterType::Education));
        let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["Toronto-Canada", "Montreal-Canada"]);
    }

    #[test]
    fn test_timeline_filters_entries_not_just_locations() {
        let data = dataset();
        let view = timeline_for(&data, &state_with(FilterType::Education));

        let ids: Vec<&str> = view.rows.iter().map(|r| r.entry.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["uoft", "talk"]);
        assert_eq!(view.experiences, 2);
        assert_eq!(view.countries, 1);
    }

    #[test]
    fn test_timeline_all() {
        let data = dataset();
        let view = timeline_for(&data, &MapState::default());
        let ids: Vec<&str> = view.rows.iter().map(|r| r.entry.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["uoft", "trip", "job", "conf", "talk"]);
        assert_eq!(view.countries, 2);
    }

    #[test]
    fn test_timeline_selection_needs_location_and_entry() {
        let data = dataset();
        let state = MapState {
            selected_location_id: Some("Toronto-Canada".into()),
            selected_entry_id: Some("job".into()),
            hovered_location_id: Some("Montreal-Canada".into()),
            ..MapState::default()
        };
        let view = timeline_for(&data, &state);

        let selected: Vec<&str> =
            view.rows.iter().filter(|r| r.is_selected).map(|r| r.entry.entry.id.as_str()).collect();
        assert_eq!(selected, vec!["job"]);

        let hovered: Vec<&str> =
            view.rows.iter().filter(|r| r.is_hovered).map(|r| r.entry.entry.id.as_str()).collect();
        assert_eq!(hovered, vec!["conf", "talk"]);
    }

    #[test]
    fn test_empty_timeline() {
        let view = timeline_for(&[], &MapState::default());
        assert!(view.is_empty());
        assert_eq!(view.countries, 0);
    }

    #[test]
    fn test_modal_defaults_to_first_entry() {
        let data = dataset();
        let state = MapState {
            selected_location_id: Some("Montreal-Canada".into()),
            ..MapState::default()
        };
        let modal = modal_view(&data, &state).unwrap();
        assert_eq!(modal.location.city, "Montreal");
        assert_eq!(modal.active_entry.map(|e| e.id.as_str()), Some("conf"));
    }

    #[test]
    fn test_modal_explicit_entry() {
        let data = dataset();
        let mut state = MapState {
            selected_location_id: Some("Montreal-Canada".into()),
            selected_entry_id: Some("talk".into()),
            ..MapState::default()
        };
        let modal = modal_view(&data, &state).unwrap();
        assert_eq!(modal.active_entry.map(|e| e.id.as_str()), Some("talk"));

        state.selected_entry_id = Some("missing".into());
        let modal = modal_view(&data, &state).unwrap();
        assert!(modal.active_entry.is_none());
    }

    #[test]
    fn test_modal_closed_or_unknown_location() {
        let data = dataset();
        assert!(modal_view(&data, &MapState::default()).is_none());

        let state = MapState {
            selected_location_id: Some("Atlantis-Sea".into()),
            ..MapState::default()
        };
        assert!(modal_view(&data, &state).is_none());
    }

    #[test]
    fn test_filter_bar() {
        let data = dataset();
        let stats = global_stats(&data);
        let buttons = filter_bar(&stats, &state_with(FilterType::Work));

        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].label, "All");
        assert_eq!(buttons[0].count, 5);
        assert_eq!(buttons[1].count, 2);
        assert!(buttons[2].active);
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
    }
}
