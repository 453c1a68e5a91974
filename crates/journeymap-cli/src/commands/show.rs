//! Show command implementation

use crate::cli::ShowArgs;
use crate::context::open_session;
use crate::output::OutputWriter;
use crate::output_types::coordinates_label;
use anyhow::{bail, Result};
use journeymap_core::config::LayeredConfig;
use journeymap_core::models::LocationId;
use journeymap_map::Intent;

pub fn execute(args: ShowArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut session = open_session(config)?;

    session.handle(Intent::MarkerClicked(LocationId::from(args.location.as_str())));
    if let Some(entry_id) = args.entry.clone() {
        session.handle(Intent::ModalEntrySelected(entry_id));
    }

    let Some(modal) = session.modal() else {
        bail!("Location not found: {}", args.location);
    };

    if output.is_json() {
        return output.result(&modal);
    }

    let location = modal.location;
    output.section(format!("{}, {}", location.city, location.country));
    output.kv("Key", &modal.location_id);
    output.kv("Coordinates", coordinates_label(location.coordinates));
    output.kv("Entries", location.entries.len());

    let Some(entry) = modal.active_entry else {
        match args.entry {
            Some(entry_id) => output.warning(format!("No entry '{}' at {}", entry_id, modal.location_id)),
            None => output.info("No entries recorded for this location"),
        }
        return Ok(());
    };

    output.section(format!("{} - {}", entry.institution, entry.role));
    output.kv("Id", &entry.id);
    output.kv("Type", entry.entry_type);
    output.kv("Duration", &entry.duration);
    if !entry.photos.is_empty() {
        output.kv("Photos", entry.photos.len());
    }
    for achievement in &entry.achievements {
        println!("  • {}", achievement);
    }
    for link in &entry.links {
        output.kv(&link.label, &link.url);
    }

    let others: Vec<&str> = location
        .entries
        .iter()
        .filter(|e| e.id != entry.id)
        .map(|e| e.id.as_str())
        .collect();
    if !others.is_empty() {
        output.info(format!("Other entries: {}", others.join(", ")));
    }

    Ok(())
}
