//! Insight Engine - orchestrates the analytics pipeline

use chrono::Local;

use crate::models::{MonthKey, Transaction};
use crate::taxonomy::BudgetTaxonomy;

use super::types::{InsightSummary, MonthlyNetPoint};
use super::{aggregate, budget, forecast::Forecaster, outliers, recommend, round2};

/// The main insight engine
///
/// Pure and stateless between calls: every invocation recomputes the summary
/// from the transaction snapshot it is given, so repeated calls over the same
/// snapshot are idempotent. The reference month is an explicit parameter;
/// [`InsightEngine::summarize_now`] supplies the wall-clock month for
/// production use.
pub struct InsightEngine {
    taxonomy: BudgetTaxonomy,
    /// Months of net-flow history fed to the forecaster (default 12)
    history_months: usize,
    /// Reporting caps for the summary lists (default 5)
    max_top_categories: usize,
    max_outliers: usize,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in taxonomy and reporting caps
    pub fn new() -> Self {
        Self::with_taxonomy(BudgetTaxonomy::default())
    }

    /// Create an engine with a custom budget taxonomy
    pub fn with_taxonomy(taxonomy: BudgetTaxonomy) -> Self {
        Self {
            taxonomy,
            history_months: 12,
            max_top_categories: 5,
            max_outliers: 5,
        }
    }

    /// Summarize a transaction snapshot against an injected reference month
    pub fn summarize(&self, transactions: &[Transaction], reference_month: MonthKey) -> InsightSummary {
        let monthly = aggregate::monthly_net(transactions);
        tracing::debug!(
            transactions = transactions.len(),
            months = monthly.len(),
            "Aggregated monthly net flow"
        );

        // Chronological tail of the series; BTreeMap iterates in month order
        let skip = monthly.len().saturating_sub(self.history_months);
        let tail: Vec<(MonthKey, f64)> = monthly.into_iter().skip(skip).collect();
        let series: Vec<f64> = tail.iter().map(|(_, net)| *net).collect();

        let fitted = Forecaster::fit(&series);
        let (forecast_next_month_net, trend_slope) = match &fitted {
            Some(f) => (Some(round2(f.project(series.len()))), f.slope().map(round2)),
            None => (None, None),
        };
        tracing::debug!(
            points = series.len(),
            regression = matches!(fitted, Some(Forecaster::Regression { .. })),
            "Fitted net-flow trend"
        );

        let mut top_categories = aggregate::category_totals_for_month(transactions, reference_month);
        top_categories.truncate(self.max_top_categories);

        let mut outliers = outliers::detect_outliers(transactions);
        tracing::debug!(count = outliers.len(), "Detected spending outliers");
        outliers.truncate(self.max_outliers);

        let assessment = budget::assess_budget(transactions, reference_month, &self.taxonomy);
        let recommendations = recommend::recommend(&assessment);

        tracing::info!(
            month = %reference_month,
            recommendations = recommendations.len(),
            "Insight summary complete"
        );

        InsightSummary {
            monthly_net: tail
                .into_iter()
                .map(|(month, net)| MonthlyNetPoint {
                    month: month.to_string(),
                    net: round2(net),
                })
                .collect(),
            forecast_next_month_net,
            trend_slope,
            top_categories_this_month: top_categories,
            outliers,
            recommendations,
        }
    }

    /// Summarize against the current wall-clock month
    pub fn summarize_now(&self, transactions: &[Transaction]) -> InsightSummary {
        let today = Local::now().date_naive();
        self.summarize(transactions, MonthKey::from_date(today))
    }
}
