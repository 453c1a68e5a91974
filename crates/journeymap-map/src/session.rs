//! One handle bundling the dataset, its memoized views, and the store.

use journeymap_core::models::{FilterType, MapData, MapLocation};
use journeymap_geo::{clusters_for_zoom, Cluster};

use crate::stats::GlobalStats;
use crate::store::{MapState, MapStore};
use crate::surfaces::{
    filter_bar, modal_view, timeline_view, FilterButton, Intent, MarkerView, ModalView,
    TimelineView,
};
use crate::views::{ChronologicalEntry, DerivedViews};

/// Interactive map controller.
///
/// Surfaces read through `&self` and report user input via
/// [`MapSession::handle`]; nothing else mutates the state.
#[derive(Debug, Default)]
pub struct MapSession {
    views: DerivedViews,
    store: MapStore,
}

impl MapSession {
    pub fn new(data: MapData) -> Self {
        Self { views: DerivedViews::new(data), store: MapStore::new() }
    }

    pub fn with_filter(data: MapData, filter: FilterType) -> Self {
        Self { views: DerivedViews::new(data), store: MapStore::with_filter(filter) }
    }

    pub fn data(&self) -> &MapData {
        self.views.data()
    }

    /// Replace the dataset, keeping the state
    pub fn set_data(&mut self, data: MapData) {
        self.views.set_data(data);
    }

    pub fn state(&self) -> &MapState {
        self.store.state()
    }

    pub fn store_mut(&mut self) -> &mut MapStore {
        &mut self.store
    }

    pub fn handle(&mut self, intent: Intent) {
        self.store.handle_intent(intent);
    }

    pub fn filtered_locations(&self) -> Vec<&MapLocation> {
        self.views.filtered_locations(self.state().filter)
    }

    pub fn chronological_entries(&self) -> Vec<ChronologicalEntry<'_>> {
        self.views.chronological_entries()
    }

    pub fn global_stats(&self) -> &GlobalStats {
        self.views.global_stats()
    }

    pub fn markers(&self) -> Vec<MarkerView> {
        let state = self.state();
        self.filtered_locations().into_iter().map(|l| MarkerView::new(l, state)).collect()
    }

    pub fn timeline(&self) -> TimelineView<'_> {
        timeline_view(self.views.chronological_entries(), self.state())
    }

    pub fn modal(&self) -> Option<ModalView<'_>> {
        modal_view(self.views.data(), self.state())
    }

    pub fn filter_bar(&self) -> Vec<FilterButton> {
        filter_bar(self.global_stats(), self.state())
    }

    /// Marker groups for the visible locations at `zoom`
    pub fn clusters(&self, zoom: f64) -> Vec<Cluster<'_>> {
        clusters_for_zoom(self.filtered_locations(), zoom)
    }
}
