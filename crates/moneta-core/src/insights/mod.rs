//! Insight Engine - Ledger Analytics Summaries
//!
//! Derives a compact analytics summary from a snapshot of dated transactions:
//!
//! - **Aggregator** - monthly net cash-flow history
//! - **Trend Forecaster** - one-month-ahead projection of net flow
//! - **Outlier Detector** - per-category statistical spending outliers
//! - **Budget Classifier** - needs/wants/savings split for the reference month
//! - **Recommendation Engine** - 50/30/20 guideline advice strings
//!
//! The engine is a pure synchronous computation: it holds no state between
//! calls, performs no I/O, and always returns a complete summary. Degenerate
//! inputs (no history, zero expenses, thin category samples) produce defined
//! defaults rather than errors.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moneta_core::insights::InsightEngine;
//! use moneta_core::models::MonthKey;
//!
//! let engine = InsightEngine::new();
//! let summary = engine.summarize(&transactions, MonthKey::new(2024, 2));
//! ```

pub mod aggregate;
pub mod budget;
pub mod engine;
pub mod forecast;
pub mod outliers;
pub mod recommend;
pub mod types;

pub use budget::BudgetAssessment;
pub use engine::InsightEngine;
pub use forecast::Forecaster;
pub use types::{CategoryTotal, InsightSummary, MonthlyNetPoint, OutlierNote};

/// Round to two decimal places (output contract for money values)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place (output contract for percentages)
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
