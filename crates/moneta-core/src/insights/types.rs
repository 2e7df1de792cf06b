//! Output types for the Insight Engine

use serde::{Deserialize, Serialize};

/// Net flow for a single month; positive means net outflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyNetPoint {
    /// `YYYY-MM` month key
    pub month: String,
    /// Net flow rounded to 2 decimal places
    pub net: f64,
}

/// Expense total for one category in the reference month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// An expense flagged as unusually large for its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierNote {
    pub category: String,
    pub amount: f64,
    /// `YYYY-MM-DD` transaction date
    pub date: String,
    /// mean + 2 std of the category's expense amounts, rounded to 2 decimals
    pub threshold: f64,
}

/// The complete analytics summary
///
/// Always structurally complete: optional fields are absent when the input
/// carries too little history to compute them, list fields are empty rather
/// than missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Oldest-to-newest net flow series, at most 12 entries
    pub monthly_net: Vec<MonthlyNetPoint>,
    /// Projected net flow one month past the series; absent with no history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_next_month_net: Option<f64>,
    /// Fitted trend slope; absent below two data points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_slope: Option<f64>,
    /// Top reference-month expense categories, descending, at most 5
    pub top_categories_this_month: Vec<CategoryTotal>,
    /// At most 5 outlier records, in discovery order
    pub outliers: Vec<OutlierNote>,
    /// At most 5 guideline advice strings
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_forecast_fields_are_skipped() {
        let summary = InsightSummary {
            monthly_net: vec![],
            forecast_next_month_net: None,
            trend_slope: None,
            top_categories_this_month: vec![],
            outliers: vec![],
            recommendations: vec![],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("forecast_next_month_net").is_none());
        assert!(json.get("trend_slope").is_none());
        assert!(json.get("monthly_net").is_some());
    }

    #[test]
    fn test_summary_serialization_shape() {
        let summary = InsightSummary {
            monthly_net: vec![MonthlyNetPoint {
                month: "2024-01".to_string(),
                net: 150.0,
            }],
            forecast_next_month_net: Some(-5930.0),
            trend_slope: Some(-3040.0),
            top_categories_this_month: vec![CategoryTotal {
                category: "Rent".to_string(),
                total: 110.0,
            }],
            outliers: vec![],
            recommendations: vec!["msg".to_string()],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["monthly_net"][0]["month"], "2024-01");
        assert_eq!(json["forecast_next_month_net"], -5930.0);
        assert_eq!(json["top_categories_this_month"][0]["category"], "Rent");
    }
}
