//! Selection/filter state store.
//!
//! All transitions are synchronous and infallible. Commands are applied in
//! the order they are issued; readers always observe the latest state.

use journeymap_core::models::{FilterType, LocationId};
use serde::Serialize;

use crate::surfaces::Intent;

/// Current filter, selection, and hover
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapState {
    pub filter: FilterType,
    pub selected_location_id: Option<LocationId>,
    /// Only set while `selected_location_id` is set. `None` means
    /// "no explicit entry"; surfaces fall back to the location's first entry.
    pub selected_entry_id: Option<String>,
    pub hovered_location_id: Option<LocationId>,
}

impl MapState {
    pub fn with_filter(filter: FilterType) -> Self {
        Self { filter, ..Self::default() }
    }

    pub fn has_selection(&self) -> bool {
        self.selected_location_id.is_some()
    }

    pub fn is_selected_location(&self, id: &LocationId) -> bool {
        self.selected_location_id.as_ref() == Some(id)
    }

    pub fn is_hovered_location(&self, id: &LocationId) -> bool {
        self.hovered_location_id.as_ref() == Some(id)
    }

    /// Apply one action, producing the next state
    pub fn reduce(self, action: MapAction) -> Self {
        match action {
            MapAction::SetSelectedLocation { location_id, entry_id } => {
                // An entry without a location would point at nothing
                let entry_id = match location_id {
                    Some(_) => entry_id.filter(|id| !id.is_empty()),
                    None => None,
                };
                Self { selected_location_id: location_id, selected_entry_id: entry_id, ..self }
            }
            MapAction::SetFilter(filter) => Self {
                filter,
                selected_location_id: None,
                selected_entry_id: None,
                ..self
            },
            MapAction::SetHoveredLocation(location_id) => {
                Self { hovered_location_id: location_id, ..self }
            }
            MapAction::ClearSelection => Self {
                selected_location_id: None,
                selected_entry_id: None,
                hovered_location_id: None,
                ..self
            },
        }
    }
}

/// State transitions understood by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAction {
    SetSelectedLocation { location_id: Option<LocationId>, entry_id: Option<String> },
    SetFilter(FilterType),
    SetHoveredLocation(Option<LocationId>),
    ClearSelection,
}

/// Owner of the single mutable [`MapState`]
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    state: MapState,
    revision: u64,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a non-default filter and nothing selected
    pub fn with_filter(filter: FilterType) -> Self {
        Self { state: MapState::with_filter(filter), revision: 0 }
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    /// Incremented on every applied action, including ones that change nothing
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, action: MapAction) {
        tracing::debug!(?action, revision = self.revision + 1, "Map action");
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(action);
        self.revision += 1;
    }

    /// Change the category filter. Always drops the current selection.
    pub fn set_filter(&mut self, filter: FilterType) {
        self.dispatch(MapAction::SetFilter(filter));
    }

    /// Select a location and optionally one of its entries.
    ///
    /// Omitting `entry_id` resets any previously selected entry.
    pub fn set_selected_location(
        &mut self,
        location_id: Option<LocationId>,
        entry_id: Option<String>,
    ) {
        self.dispatch(MapAction::SetSelectedLocation { location_id, entry_id });
    }

    /// Update hover only; the selection is untouched
    pub fn set_hovered_location(&mut self, location_id: Option<LocationId>) {
        self.dispatch(MapAction::SetHoveredLocation(location_id));
    }

    /// Drop selection and hover, keep the filter
    pub fn clear_selection(&mut self) {
        self.dispatch(MapAction::ClearSelection);
    }

    /// Translate a surface intent into store commands
    pub fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::MarkerClicked(location_id) => self.set_selected_location(Some(location_id), None),
            Intent::MarkerHovered(location_id) | Intent::TimelineEntryHovered(location_id) => {
                self.set_hovered_location(location_id)
            }
            Intent::TimelineEntryClicked { location_id, entry_id } => {
                self.set_selected_location(Some(location_id), Some(entry_id))
            }
            Intent::FilterSelected(filter) => self.set_filter(filter),
            Intent::ModalEntrySelected(entry_id) => {
                let location_id = self.state.selected_location_id.clone();
                self.set_selected_location(location_id, Some(entry_id))
            }
            Intent::ModalClosed => self.clear_selection(),
        }
    }
}
