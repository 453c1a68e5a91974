//! Locations command implementation

use crate::context::open_session;
use crate::output::OutputWriter;
use crate::output_types::{coordinates_label, marker_label, LocationRow, LocationsOutput};
use anyhow::Result;
use journeymap_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let session = open_session(config)?;
    let filter = session.state().filter;
    let markers = session.markers();

    if output.is_json() {
        return output.result(LocationsOutput { filter, count: markers.len(), locations: markers });
    }

    output.section(format!("Locations: {} ({})", filter.label(), markers.len()));

    let rows: Vec<LocationRow> = session
        .filtered_locations()
        .into_iter()
        .zip(markers)
        .map(|(location, marker)| LocationRow {
            key: marker.id.to_string(),
            city: location.city.clone(),
            country: location.country.clone(),
            coordinates: coordinates_label(location.coordinates),
            entries: location.entries.len(),
            types: marker.entry_types.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", "),
            marker: marker_label(marker.style),
        })
        .collect();
    output.table(rows)
}
