//! Monthly net-flow aggregation and reference-month category totals

use std::collections::{BTreeMap, HashMap};

use crate::models::{MonthKey, Transaction, TransactionKind};

use super::types::CategoryTotal;

/// Group transactions into signed per-month net flow
///
/// Each transaction contributes `amount` (expense) or `-amount` (income) to
/// its month bucket. The result only contains months actually present in the
/// data; `BTreeMap` keeps them in chronological order.
pub fn monthly_net(transactions: &[Transaction]) -> BTreeMap<MonthKey, f64> {
    let mut monthly = BTreeMap::new();
    for tx in transactions {
        *monthly.entry(tx.month_key()).or_insert(0.0) += tx.signed_amount();
    }
    monthly
}

/// Per-category expense totals for one month, descending by total
///
/// Income is excluded. Ties are broken by category name so the ordering is
/// deterministic regardless of input order.
pub fn category_totals_for_month(transactions: &[Transaction], month: MonthKey) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for tx in transactions {
        if tx.kind == TransactionKind::Expense && tx.month_key() == month {
            *totals.entry(tx.category.as_str()).or_insert(0.0) += tx.amount;
        }
    }

    let mut ranked: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total: super::round2(total),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(date: &str, amount: f64, kind: TransactionKind, category: &str) -> Transaction {
        Transaction {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            kind,
            category: category.to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_monthly_net_signs() {
        let txs = vec![
            tx("2024-01-15", 100.0, TransactionKind::Expense, "Rent"),
            tx("2024-01-20", 50.0, TransactionKind::Expense, "Dining"),
            tx("2024-02-10", 110.0, TransactionKind::Expense, "Rent"),
            tx("2024-02-12", 3000.0, TransactionKind::Income, "Salary"),
        ];
        let monthly = monthly_net(&txs);

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[&MonthKey::new(2024, 1)], 150.0);
        assert_eq!(monthly[&MonthKey::new(2024, 2)], -2890.0);
    }

    #[test]
    fn test_monthly_net_total_matches_whole_set() {
        let txs = vec![
            tx("2023-11-01", 20.0, TransactionKind::Expense, "Dining"),
            tx("2023-12-05", 80.0, TransactionKind::Expense, "Rent"),
            tx("2024-01-09", 500.0, TransactionKind::Income, "Salary"),
            tx("2024-01-22", 35.5, TransactionKind::Expense, "Groceries"),
        ];
        let monthly = monthly_net(&txs);

        let series_total: f64 = monthly.values().sum();
        let expenses: f64 = txs
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();
        let income: f64 = txs
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();

        assert!((series_total - (expenses - income)).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_net_is_order_independent() {
        let mut txs = vec![
            tx("2024-01-15", 100.0, TransactionKind::Expense, "Rent"),
            tx("2024-01-20", 50.0, TransactionKind::Expense, "Dining"),
            tx("2024-01-25", 70.0, TransactionKind::Income, "Refund"),
        ];
        let forward = monthly_net(&txs);
        txs.reverse();
        let backward = monthly_net(&txs);

        assert_eq!(forward.len(), backward.len());
        for (key, net) in &forward {
            assert!((net - backward[key]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_monthly_keys_are_chronological() {
        let txs = vec![
            tx("2024-03-01", 1.0, TransactionKind::Expense, "A"),
            tx("2023-12-01", 1.0, TransactionKind::Expense, "A"),
            tx("2024-01-01", 1.0, TransactionKind::Expense, "A"),
        ];
        let months: Vec<String> = monthly_net(&txs).keys().map(|k| k.to_string()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);
    }

    #[test]
    fn test_category_totals_expense_only_and_ranked() {
        let month = MonthKey::new(2024, 2);
        let txs = vec![
            tx("2024-02-10", 110.0, TransactionKind::Expense, "Rent"),
            tx("2024-02-11", 40.0, TransactionKind::Expense, "Dining"),
            tx("2024-02-14", 25.0, TransactionKind::Expense, "Dining"),
            tx("2024-02-12", 3000.0, TransactionKind::Income, "Salary"),
            tx("2024-01-15", 999.0, TransactionKind::Expense, "Rent"),
        ];
        let totals = category_totals_for_month(&txs, month);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0], CategoryTotal { category: "Rent".to_string(), total: 110.0 });
        assert_eq!(totals[1], CategoryTotal { category: "Dining".to_string(), total: 65.0 });
    }

    #[test]
    fn test_category_totals_ties_break_by_name() {
        let month = MonthKey::new(2024, 2);
        let txs = vec![
            tx("2024-02-01", 10.0, TransactionKind::Expense, "Zoo"),
            tx("2024-02-02", 10.0, TransactionKind::Expense, "Art"),
        ];
        let totals = category_totals_for_month(&txs, month);
        assert_eq!(totals[0].category, "Art");
        assert_eq!(totals[1].category, "Zoo");
    }

    #[test]
    fn test_empty_category_is_a_valid_key() {
        let month = MonthKey::new(2024, 2);
        let txs = vec![tx("2024-02-01", 12.0, TransactionKind::Expense, "")];
        let totals = category_totals_for_month(&txs, month);
        assert_eq!(totals[0].category, "");
        assert_eq!(totals[0].total, 12.0);
    }
}
