//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::ConfigRow;
use anyhow::Result;
use journeymap_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut rows: Vec<ConfigRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow { key, value, source: format!("{:?}", source) })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    output.section("Configuration");
    output.table(rows)
}
