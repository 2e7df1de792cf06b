//! Per-category spending outlier detection
//!
//! An expense is an outlier when its amount strictly exceeds
//! mean + 2 std of its category's expense history, with the standard
//! deviation taken from the population variance (divisor N). Categories with
//! fewer than three observations are skipped outright: two data points say
//! nothing about spread, so they never flag and never error.
//!
//! Results come out in discovery order - categories in first-appearance
//! order, transactions in input order within a category - rather than sorted
//! by severity. Truncation to the reporting cap happens in the caller.

use std::collections::HashMap;

use crate::models::{Transaction, TransactionKind};

use super::types::OutlierNote;

/// Minimum expense observations before a category is assessed
const MIN_SAMPLES: usize = 3;
/// Number of standard deviations above the mean that marks an outlier
const STD_MULTIPLIER: f64 = 2.0;

/// Flag unusually large expenses per category
pub fn detect_outliers(transactions: &[Transaction]) -> Vec<OutlierNote> {
    // Group expenses by category, preserving first-appearance order
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Transaction>> = HashMap::new();
    for tx in transactions {
        if tx.kind != TransactionKind::Expense {
            continue;
        }
        groups
            .entry(tx.category.as_str())
            .or_insert_with(|| {
                order.push(tx.category.as_str());
                Vec::new()
            })
            .push(tx);
    }

    let mut notes = Vec::new();
    for category in order {
        let txs = &groups[category];
        if txs.len() < MIN_SAMPLES {
            continue;
        }

        let amounts: Vec<f64> = txs.iter().map(|t| t.amount).collect();
        let mean = amounts.iter().sum::<f64>() / amounts.len() as f64;
        let variance =
            amounts.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / amounts.len() as f64;
        let threshold = mean + STD_MULTIPLIER * variance.sqrt();

        for tx in txs {
            if tx.amount > threshold {
                notes.push(OutlierNote {
                    category: category.to_string(),
                    amount: tx.amount,
                    date: tx.date.format("%Y-%m-%d").to_string(),
                    threshold: super::round2(threshold),
                });
            }
        }
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(date: &str, amount: f64, category: &str) -> Transaction {
        Transaction {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            kind: TransactionKind::Expense,
            category: category.to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_two_observations_never_flag() {
        // Huge spread, but below the sample floor
        let txs = vec![
            expense("2024-01-01", 1.0, "Dining"),
            expense("2024-01-02", 10_000.0, "Dining"),
        ];
        assert!(detect_outliers(&txs).is_empty());
    }

    #[test]
    fn test_threshold_just_above_largest_value() {
        // mean = 40, population variance = 1800, std ~= 42.43,
        // threshold ~= 124.85: 100 stays inside
        let txs = vec![
            expense("2024-01-01", 10.0, "Shopping"),
            expense("2024-01-02", 10.0, "Shopping"),
            expense("2024-01-03", 100.0, "Shopping"),
        ];
        assert!(detect_outliers(&txs).is_empty());
    }

    #[test]
    fn test_extreme_value_is_flagged() {
        let txs = vec![
            expense("2024-01-01", 10.0, "Shopping"),
            expense("2024-01-02", 10.0, "Shopping"),
            expense("2024-01-03", 10.0, "Shopping"),
            expense("2024-01-04", 1000.0, "Shopping"),
        ];
        let notes = detect_outliers(&txs);

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].category, "Shopping");
        assert_eq!(notes[0].amount, 1000.0);
        assert_eq!(notes[0].date, "2024-01-04");
        // mean = 257.5, population std = sqrt(183768.75) ~= 428.68
        assert!((notes[0].threshold - 1114.87).abs() < 0.01);
        assert!(notes[0].amount > notes[0].threshold);
    }

    #[test]
    fn test_income_is_ignored() {
        let mut txs = vec![
            expense("2024-01-01", 10.0, "Dining"),
            expense("2024-01-02", 10.0, "Dining"),
            expense("2024-01-03", 10.0, "Dining"),
        ];
        txs.push(Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            amount: 1_000_000.0,
            kind: TransactionKind::Income,
            category: "Dining".to_string(),
            note: String::new(),
        });
        assert!(detect_outliers(&txs).is_empty());
    }

    #[test]
    fn test_discovery_order_is_preserved() {
        let mut txs = Vec::new();
        // "Zebra" appears first in the input, "Alpha" second; both get one
        // obvious outlier
        for day in 1..=3 {
            txs.push(expense(&format!("2024-01-0{}", day), 10.0, "Zebra"));
        }
        for day in 4..=6 {
            txs.push(expense(&format!("2024-01-0{}", day), 10.0, "Alpha"));
        }
        txs.push(expense("2024-01-07", 500.0, "Zebra"));
        txs.push(expense("2024-01-08", 500.0, "Alpha"));

        let notes = detect_outliers(&txs);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].category, "Zebra");
        assert_eq!(notes[1].category, "Alpha");
    }

    #[test]
    fn test_categories_are_independent() {
        // Three cheap Dining entries plus one spike; a lone Travel expense of
        // the same size is untouched by Dining's statistics
        let txs = vec![
            expense("2024-01-01", 10.0, "Dining"),
            expense("2024-01-02", 12.0, "Dining"),
            expense("2024-01-03", 11.0, "Dining"),
            expense("2024-01-04", 400.0, "Dining"),
            expense("2024-01-05", 400.0, "Travel"),
        ];
        let notes = detect_outliers(&txs);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].category, "Dining");
    }
}
