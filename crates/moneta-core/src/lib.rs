//! Moneta Core Library
//!
//! Analytics over a ledger of dated transactions:
//! - Ledger file ingestion with record validation (CSV and JSON)
//! - Monthly net cash-flow aggregation
//! - Linear trend forecasting with a mean fallback
//! - Per-category statistical outlier detection
//! - Needs/wants/savings budget classification (50/30/20 guideline)
//! - Rule-based textual recommendations
//!
//! The engine is a pure synchronous computation over a transaction snapshot;
//! storage and transport of transactions belong to the caller.

pub mod error;
pub mod ingest;
pub mod insights;
pub mod models;
pub mod taxonomy;

pub use error::{Error, Result};
pub use ingest::{parse_csv, parse_json, RawTransaction};
pub use insights::{
    BudgetAssessment, CategoryTotal, Forecaster, InsightEngine, InsightSummary, MonthlyNetPoint,
    OutlierNote,
};
pub use models::{MonthKey, Transaction, TransactionKind};
pub use taxonomy::{BudgetBucket, BudgetTaxonomy};
