//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `check` - Ledger file validation
//! - `insights` - Insight summary generation

pub mod check;
pub mod insights;

// Re-export command functions for main.rs
pub use check::*;
pub use insights::*;

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use moneta_core::Transaction;

/// Load and validate a ledger file, picking the parser by extension
///
/// `.json` files are parsed as a JSON array of records; anything else is
/// treated as CSV.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let transactions = if is_json {
        moneta_core::parse_json(file)
    } else {
        moneta_core::parse_csv(file)
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(transactions)
}
