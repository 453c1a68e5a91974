//! Journeymap CLI - Command-line interface
//!
//! Inspect a map dataset from the terminal: statistics, filtered
//! locations, the chronological timeline, and marker clusters.

mod cli;
mod commands;
mod context;
mod output;
mod output_types;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    commands::execute(cli)
}
