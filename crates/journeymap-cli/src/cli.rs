use clap::{Parser, Subcommand};
use journeymap_core::config::parse_validity_mode;
use journeymap_core::models::{FilterType, ValidityMode};
use std::path::PathBuf;

/// Journeymap - Career and travel map inspector
#[derive(Parser, Debug)]
#[command(name = "journeymap")]
#[command(about = "Inspect a career/travel map dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Dataset file (overrides JOURNEYMAP_DATA and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Validation mode for the dataset (strict or lenient)
    #[arg(long, global = true, value_parser = parse_validity_mode)]
    pub validity: Option<ValidityMode>,

    /// Category filter (all, education, work, conference, travel)
    #[arg(long, short = 'f', global = true)]
    pub filter: Option<FilterType>,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show dataset-wide statistics
    Stats,

    /// List locations matching the filter
    Locations,

    /// Show entries in chronological order
    Timeline(TimelineArgs),

    /// Group nearby locations for a zoom level
    Clusters(ClustersArgs),

    /// Show one location and its active entry
    Show(ShowArgs),

    /// Validate a dataset file without loading it
    Validate(ValidateArgs),

    /// Show effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
pub struct TimelineArgs {
    /// Highlight entries of this location key (e.g. "Toronto-Canada")
    #[arg(long, value_name = "LOCATION")]
    pub select: Option<String>,

    /// Highlight a single entry of the selected location
    #[arg(long, requires = "select")]
    pub entry: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ClustersArgs {
    /// Map zoom level (defaults to the configured initial zoom)
    #[arg(long, short = 'z')]
    pub zoom: Option<f64>,

    /// Print a GeoJSON FeatureCollection instead of a table
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Location key, "City-Country"
    pub location: String,

    /// Entry id to show instead of the first entry
    #[arg(long)]
    pub entry: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Dataset file (defaults to the configured data path)
    pub path: Option<PathBuf>,
}
