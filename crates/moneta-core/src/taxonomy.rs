//! Budget taxonomy: which categories count as needs, wants, or savings
//!
//! The 50/30/20 classifier treats the taxonomy as configuration, not code.
//! `BudgetTaxonomy::default()` carries the built-in category sets, and a
//! custom mapping can be loaded from TOML:
//!
//! ```toml
//! needs = ["Rent", "Groceries"]
//! wants = ["Dining"]
//! savings = ["Investments"]
//! ```

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The three guideline buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBucket {
    Needs,
    Wants,
    Savings,
}

impl BudgetBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Wants => "wants",
            Self::Savings => "savings",
        }
    }
}

impl std::fmt::Display for BudgetBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category sets driving the needs/wants/savings classification
///
/// Categories appearing in none of the sets are left unclassified; the
/// classifier silently excludes them from every bucket total. Income never
/// consults the taxonomy - it always counts as savings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetTaxonomy {
    pub needs: HashSet<String>,
    pub wants: HashSet<String>,
    pub savings: HashSet<String>,
}

impl Default for BudgetTaxonomy {
    fn default() -> Self {
        let set = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            needs: set(&[
                "Rent",
                "Groceries",
                "Utilities",
                "Transport",
                "Healthcare",
                "Insurance",
                "Education",
            ]),
            wants: set(&["Dining", "Entertainment", "Shopping", "Travel", "Subscriptions"]),
            savings: set(&["Investments", "Savings"]),
        }
    }
}

impl BudgetTaxonomy {
    /// Load a taxonomy from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a taxonomy from a TOML reader
    pub fn from_toml<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_toml_str(&content)
    }

    /// Classify a spending category
    ///
    /// When a category appears in more than one set, needs wins over wants,
    /// and wants over savings.
    pub fn classify(&self, category: &str) -> Option<BudgetBucket> {
        if self.needs.contains(category) {
            Some(BudgetBucket::Needs)
        } else if self.wants.contains(category) {
            Some(BudgetBucket::Wants)
        } else if self.savings.contains(category) {
            Some(BudgetBucket::Savings)
        } else {
            None
        }
    }
}
