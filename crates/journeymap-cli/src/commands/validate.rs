//! Validate command implementation

use crate::cli::ValidateArgs;
use crate::output::OutputWriter;
use crate::output_types::ValidateOutput;
use anyhow::{bail, Context, Result};
use journeymap_core::config::LayeredConfig;
use journeymap_core::loader::validate;
use journeymap_core::models::MapLocation;
use std::fs;

pub fn execute(args: ValidateArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let path = args.path.unwrap_or_else(|| config.data_path.value.clone());

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let locations: Vec<MapLocation> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let report = validate(&locations);
    let entries: usize = locations.iter().map(|l| l.entries.len()).sum();

    if output.is_json() {
        output.result(ValidateOutput {
            path: path.display().to_string(),
            valid: report.is_valid(),
            locations: locations.len(),
            entries,
            errors: report.errors.clone(),
            warnings: report.warnings.clone(),
        })?;
    } else {
        for warning in &report.warnings {
            output.warning(warning);
        }
        for error in &report.errors {
            output.error(error);
        }
        if report.is_valid() {
            output.success(format!(
                "{} is valid: {} location(s), {} entr{}",
                path.display(),
                locations.len(),
                entries,
                if entries == 1 { "y" } else { "ies" }
            ));
        }
    }

    if !report.is_valid() {
        bail!("{} validation error(s) in {}", report.errors.len(), path.display());
    }

    Ok(())
}
