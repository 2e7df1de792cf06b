//! Guideline recommendations from the budget assessment
//!
//! Stateless rules over the 50/30/20 split. Each rule is evaluated
//! independently - they are not mutually exclusive - and the result is capped
//! at [`MAX_RECOMMENDATIONS`] as a postcondition even though only three rules
//! exist today.

use super::budget::BudgetAssessment;

/// Upper bound on emitted advice strings
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Guideline ceiling for the needs share of expenses, percent
const NEEDS_TARGET_PCT: f64 = 50.0;
/// Guideline ceiling for the wants share of expenses, percent
const WANTS_TARGET_PCT: f64 = 30.0;
/// Guideline floor for savings as a fraction of expenses
const SAVINGS_TARGET_RATIO: f64 = 0.20;

/// Evaluate all guideline rules against an assessment
///
/// With a zero monthly expense the savings rule compares against a zero
/// target, and since the savings amount is never negative it cannot fire -
/// the rule is vacuously false rather than special-cased.
pub fn recommend(assessment: &BudgetAssessment) -> Vec<String> {
    let mut recs = Vec::new();

    if assessment.needs_pct > NEEDS_TARGET_PCT {
        recs.push(format!(
            "Your 'Needs' are {}% of expenses (target <= 50%). Consider reducing utilities, groceries, or transport.",
            assessment.needs_pct
        ));
    }

    if assessment.wants_pct > WANTS_TARGET_PCT {
        recs.push(format!(
            "'Wants' are {}% of expenses (target <= 30%). Try a weekly cap on Dining/Shopping.",
            assessment.wants_pct
        ));
    }

    if assessment.savings_amount < SAVINGS_TARGET_RATIO * assessment.monthly_expense {
        recs.push(format!(
            "Set aside at least 20% of expenses for savings/investments. You're currently at ${:.0}.",
            assessment.savings_amount
        ));
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
