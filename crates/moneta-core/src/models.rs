//! Domain models for Moneta

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Direction of a ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money leaving the ledger (positive contribution to net outflow)
    Expense,
    /// Money entering the ledger (offsets expenses)
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated ledger transaction
///
/// Instances are well-formed by construction: `amount` is a positive finite
/// magnitude and the direction lives in `kind`. Records that fail those
/// checks are rejected during ingestion and never reach the analytics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Positive magnitude of the movement; sign comes from `kind`
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Free-text grouping key, may be empty; not validated against any taxonomy
    pub category: String,
    /// Free text, ignored by analytics
    pub note: String,
}

impl Transaction {
    /// Contribution to net flow: expenses count positive, income negative
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Expense => self.amount,
            TransactionKind::Income => -self.amount,
        }
    }

    /// The month bucket this transaction falls into
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Year-month identity used for grouping and chronological ordering
///
/// Ordering is derived from the (year, month) pair, and the `YYYY-MM` display
/// form is zero-padded so its lexicographic order agrees with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::str::FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month key: {}", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in month key: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month in month key: {}", s))?;
        if !(1..=12).contains(&month) {
            return Err(format!("Month out of range in month key: {}", s));
        }
        Ok(Self { year, month })
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
