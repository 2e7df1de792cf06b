//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Moneta - analytics summaries for transaction ledgers
#[derive(Parser)]
#[command(name = "moneta")]
#[command(about = "Derive spending insights from a transaction ledger", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an insight summary from a ledger file and print it as JSON
    Insights {
        /// Ledger file, CSV (`date,amount,type,category,note` header) or JSON
        #[arg(short, long)]
        file: PathBuf,

        /// Reference month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Budget taxonomy TOML file (defaults to the built-in category sets)
        #[arg(short, long)]
        taxonomy: Option<PathBuf>,
    },

    /// Validate a ledger file without computing insights
    Check {
        /// Ledger file, CSV or JSON
        #[arg(short, long)]
        file: PathBuf,
    },
}
