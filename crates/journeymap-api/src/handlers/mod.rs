mod clusters;
mod health;
mod locations;
mod stats;
mod views;

pub use clusters::{clusters_geojson, list_clusters};
pub use health::health_check;
pub use locations::{get_location, list_locations, locations_geojson};
pub use stats::{get_stats, get_viewport};
pub use views::{filter_bar, markers, modal, timeline};

use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::ApiError;

/// Views that borrow from the dataset are serialized before the state
/// handle is released.
fn to_json<T: Serialize>(value: &T) -> Result<Json<JsonValue>, ApiError> {
    Ok(Json(serde_json::to_value(value)?))
}
