//! Command implementations

mod clusters;
mod config;
mod locations;
mod show;
mod stats;
mod timeline;
mod validate;

use crate::cli::{Cli, Commands};
use crate::context::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Stats => stats::execute(&config, &output),
        Commands::Locations => locations::execute(&config, &output),
        Commands::Timeline(args) => timeline::execute(args, &config, &output),
        Commands::Clusters(args) => clusters::execute(args, config, &output),
        Commands::Show(args) => show::execute(args, &config, &output),
        Commands::Validate(args) => validate::execute(args, &config, &output),
        Commands::Config => config::execute(&config, &output),
    }
}
