//! Timeline command implementation

use crate::cli::TimelineArgs;
use crate::context::open_session;
use crate::output::OutputWriter;
use crate::output_types::TimelineRowOutput;
use anyhow::Result;
use journeymap_core::config::LayeredConfig;
use journeymap_core::models::LocationId;
use journeymap_map::Intent;

pub fn execute(args: TimelineArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut session = open_session(config)?;

    if let Some(location) = args.select {
        let location_id = LocationId::from(location);
        match args.entry {
            Some(entry_id) => session.handle(Intent::TimelineEntryClicked { location_id, entry_id }),
            None => session.handle(Intent::MarkerClicked(location_id)),
        }
    }

    let view = session.timeline();

    if output.is_json() {
        return output.result(&view);
    }

    if view.is_empty() {
        output.info(format!("No {} entries", view.filter.label().to_lowercase()));
        return Ok(());
    }

    output.section(format!(
        "Timeline: {} experience(s) across {} countr{}",
        view.experiences,
        view.countries,
        if view.countries == 1 { "y" } else { "ies" }
    ));

    let state = session.state();
    let rows: Vec<TimelineRowOutput> = view
        .rows
        .iter()
        .map(|row| {
            let entry = row.entry.entry;
            let mark = if row.is_selected {
                "●"
            } else if state.is_selected_location(&row.entry.location_id) {
                "○"
            } else {
                ""
            };
            TimelineRowOutput {
                mark,
                start: row
                    .entry
                    .start
                    .map(|d| d.format("%b %Y").to_string())
                    .unwrap_or_else(|| "?".to_string()),
                entry_type: entry.entry_type.to_string(),
                institution: entry.institution.clone(),
                role: entry.role.clone(),
                location: format!("{}, {}", row.entry.city, row.entry.country),
                duration: entry.duration.clone(),
            }
        })
        .collect();
    output.table(rows)
}
