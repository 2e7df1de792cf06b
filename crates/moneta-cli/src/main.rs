//! Moneta CLI - Ledger insight summaries
//!
//! Usage:
//!   moneta insights --file ledger.csv              Summary for the current month
//!   moneta insights --file ledger.csv --month 2024-02
//!   moneta insights --file ledger.json --taxonomy budget.toml
//!   moneta check --file ledger.csv                 Validate without analyzing

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Insights {
            file,
            month,
            taxonomy,
        } => commands::cmd_insights(&file, month.as_deref(), taxonomy.as_deref()),
        Commands::Check { file } => commands::cmd_check(&file),
    }
}
