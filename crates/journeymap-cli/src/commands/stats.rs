//! Stats command implementation

use crate::context::open_session;
use crate::output::OutputWriter;
use crate::output_types::CategoryRow;
use anyhow::Result;
use journeymap_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let session = open_session(config)?;
    let stats = session.global_stats();

    if output.is_json() {
        return output.result(stats);
    }

    output.section("Dataset");
    output.kv("Locations", stats.total_locations);
    output.kv("Entries", stats.total_entries);
    output.kv("Countries", format!("{} ({})", stats.countries, stats.countries_list.join(", ")));

    let continents: Vec<&str> = stats.continents_list.iter().map(|c| c.as_str()).collect();
    output.kv("Continents", format!("{} ({})", stats.continents, continents.join(", ")));

    match stats.year_range {
        Some(range) => output.kv(
            "Years",
            format!("{} - {} ({} active)", range.start, range.end, stats.years_active),
        ),
        None => output.kv("Years", "none recorded"),
    }

    output.section("Categories");
    let rows: Vec<CategoryRow> = session
        .filter_bar()
        .into_iter()
        .map(|button| {
            let share = button
                .filter
                .entry_type()
                .and_then(|t| stats.entry_type_percentages.get(&t))
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| "-".to_string());
            CategoryRow { category: button.label, count: button.count, share }
        })
        .collect();
    output.table(rows)
}
