//! Ledger file ingestion and record validation
//!
//! The analytics engine assumes every `Transaction` it receives is
//! well-formed, so all format checks happen here: dates must be `YYYY-MM-DD`,
//! amounts must be positive finite numbers, and the kind tag must be exactly
//! `expense` or `income`. Two file shapes are supported: CSV with a
//! `date,amount,type,category,note` header, and a JSON array of records.

use std::io::Read;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionKind};

/// Maximum stored length of a category label
const MAX_CATEGORY_LEN: usize = 50;
/// Maximum stored length of a note
const MAX_NOTE_LEN: usize = 200;

/// An unvalidated ledger record, as read from a file
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    pub date: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl RawTransaction {
    /// Validate the record into a well-formed `Transaction`
    pub fn validate(&self) -> Result<Transaction> {
        let date = parse_date(&self.date)?;

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Amount must be a positive number, got {}",
                self.amount
            )));
        }

        let kind = TransactionKind::from_str(self.kind.trim()).map_err(Error::InvalidData)?;

        Ok(Transaction {
            date,
            amount: self.amount,
            kind,
            category: clip(self.category.as_deref().unwrap_or(""), MAX_CATEGORY_LEN),
            note: clip(self.note.as_deref().unwrap_or(""), MAX_NOTE_LEN),
        })
    }
}

/// Trim surrounding whitespace and cap the stored length
fn clip(s: &str, max_len: usize) -> String {
    s.trim().chars().take(max_len).collect()
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidData(format!("Invalid date '{}': {}", s, e)))
}

/// Read raw records from CSV with a `date,amount,type,category,note` header
///
/// Column order is irrelevant; `category` and `note` columns are optional.
pub fn raw_from_csv<R: Read>(reader: R) -> Result<Vec<RawTransaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let date_col = col("date")
        .ok_or_else(|| Error::InvalidData("Missing 'date' column".into()))?;
    let amount_col = col("amount")
        .ok_or_else(|| Error::InvalidData("Missing 'amount' column".into()))?;
    let kind_col = col("type")
        .ok_or_else(|| Error::InvalidData("Missing 'type' column".into()))?;
    let category_col = col("category");
    let note_col = col("note");

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;

        let amount_str = record
            .get(amount_col)
            .ok_or_else(|| Error::InvalidData(format!("Record {}: missing amount", i + 1)))?;
        let amount: f64 = amount_str.parse().map_err(|_| {
            Error::InvalidData(format!("Record {}: amount '{}' is not a number", i + 1, amount_str))
        })?;

        records.push(RawTransaction {
            date: record.get(date_col).unwrap_or("").to_string(),
            amount,
            kind: record.get(kind_col).unwrap_or("").to_string(),
            category: category_col.and_then(|c| record.get(c)).map(str::to_string),
            note: note_col.and_then(|c| record.get(c)).map(str::to_string),
        });
    }

    Ok(records)
}

/// Read raw records from a JSON array
pub fn raw_from_json<R: Read>(reader: R) -> Result<Vec<RawTransaction>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Validate a batch of raw records, tagging failures with the record number
fn validate_all(records: Vec<RawTransaction>) -> Result<Vec<Transaction>> {
    let transactions = records
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            raw.validate()
                .map_err(|e| Error::InvalidData(format!("Record {}: {}", i + 1, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = transactions.len(), "Validated ledger records");
    Ok(transactions)
}

/// Parse and validate a CSV ledger file
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    validate_all(raw_from_csv(reader)?)
}

/// Parse and validate a JSON ledger file
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    validate_all(raw_from_json(reader)?)
}
