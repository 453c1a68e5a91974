//! Configuration and dataset loading shared by the commands

use anyhow::{Context, Result};
use journeymap_core::config::{CliConfigOverrides, LayeredConfig};
use journeymap_core::loader::load_map_data;
use journeymap_core::models::MapData;
use journeymap_map::MapSession;

use crate::cli::Cli;

/// Defaults, then the config file, then the environment, then flags
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        data_path: cli.data.clone(),
        validity: cli.validity,
        default_filter: cli.filter,
        initial_zoom: None,
    });

    tracing::debug!(
        data_path = %config.data_path.value.display(),
        data_source = ?config.data_path.source,
        validity = ?config.validity.value,
        filter = %config.default_filter.value,
        "Resolved configuration"
    );

    Ok(config)
}

pub fn load_dataset(config: &LayeredConfig) -> Result<MapData> {
    let path = &config.data_path.value;
    load_map_data(path, config.validity.value)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))
}

/// Interactive session over the configured dataset, starting on the configured filter
pub fn open_session(config: &LayeredConfig) -> Result<MapSession> {
    Ok(MapSession::with_filter(load_dataset(config)?, config.default_filter.value))
}
