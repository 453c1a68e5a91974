//! Journeymap Map - Selection state, derived views, and surface contracts
//!
//! [`MapStore`] is the single owner of the mutable selection/filter state.
//! Everything else in this crate is a pure derivation over a
//! [`MapData`](journeymap_core::models::MapData) and the current
//! [`MapState`]. [`MapSession`] bundles the two for callers that want one
//! handle to pass around.

pub mod session;
pub mod stats;
pub mod store;
pub mod surfaces;
pub mod views;

pub use session::MapSession;
pub use stats::{global_stats, EntryTypeCounts, GlobalStats, YearRange};
pub use store::{MapAction, MapState, MapStore};
pub use surfaces::Intent;
pub use views::{chronological_entries, filtered_locations, location_by_id, ChronologicalEntry, DerivedViews};
