//! Needs/wants/savings classification for the reference month

use crate::models::{MonthKey, Transaction, TransactionKind};
use crate::taxonomy::{BudgetBucket, BudgetTaxonomy};

use super::{round1, round2};

/// Bucket totals and guideline percentages for one month
///
/// `monthly_expense` is needs + wants; savings and income never enter the
/// expense denominator. Percentages are 0.0 (not NaN) when the month has no
/// classified expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAssessment {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
    pub monthly_expense: f64,
    /// Needs share of monthly expense, percent, 1 decimal
    pub needs_pct: f64,
    /// Wants share of monthly expense, percent, 1 decimal
    pub wants_pct: f64,
    /// Savings total, 2 decimals
    pub savings_amount: f64,
}

/// Classify the reference month's transactions against a taxonomy
///
/// Income always lands in savings, whatever its category. Expense categories
/// outside the taxonomy are silently excluded from every bucket, so the
/// totals may undercount miscoded data; that is not an error.
pub fn assess_budget(
    transactions: &[Transaction],
    month: MonthKey,
    taxonomy: &BudgetTaxonomy,
) -> BudgetAssessment {
    let mut needs = 0.0;
    let mut wants = 0.0;
    let mut savings = 0.0;

    for tx in transactions {
        if tx.month_key() != month {
            continue;
        }
        if tx.kind == TransactionKind::Income {
            savings += tx.amount;
            continue;
        }
        match taxonomy.classify(&tx.category) {
            Some(BudgetBucket::Needs) => needs += tx.amount,
            Some(BudgetBucket::Wants) => wants += tx.amount,
            Some(BudgetBucket::Savings) => savings += tx.amount,
            None => {}
        }
    }

    let monthly_expense = needs + wants;
    let pct = |part: f64| {
        if monthly_expense > 0.0 {
            round1(part / monthly_expense * 100.0)
        } else {
            0.0
        }
    };

    BudgetAssessment {
        needs,
        wants,
        savings,
        monthly_expense,
        needs_pct: pct(needs),
        wants_pct: pct(wants),
        savings_amount: round2(savings),
    }
}
