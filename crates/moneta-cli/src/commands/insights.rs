//! Insight summary command

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use moneta_core::{BudgetTaxonomy, InsightEngine, InsightSummary, MonthKey};
use tracing::info;

use super::load_transactions;

/// Compute the insight summary for a ledger file
///
/// `month` overrides the reference month (`YYYY-MM`); without it the current
/// wall-clock month is used. `taxonomy` points at an optional TOML file
/// replacing the built-in needs/wants/savings sets.
pub fn build_summary(
    file: &Path,
    month: Option<&str>,
    taxonomy: Option<&Path>,
) -> Result<InsightSummary> {
    let transactions = load_transactions(file)?;
    info!(count = transactions.len(), "Loaded ledger");

    let engine = match taxonomy {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read taxonomy {}", path.display()))?;
            let taxonomy = BudgetTaxonomy::from_toml_str(&content)
                .with_context(|| format!("Invalid taxonomy {}", path.display()))?;
            InsightEngine::with_taxonomy(taxonomy)
        }
        None => InsightEngine::new(),
    };

    match month {
        Some(m) => {
            let month: MonthKey = m.parse().map_err(|e: String| anyhow!(e))?;
            Ok(engine.summarize(&transactions, month))
        }
        None => Ok(engine.summarize_now(&transactions)),
    }
}

/// `moneta insights` - print the summary as pretty JSON
pub fn cmd_insights(file: &Path, month: Option<&str>, taxonomy: Option<&Path>) -> Result<()> {
    let summary = build_summary(file, month, taxonomy)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
