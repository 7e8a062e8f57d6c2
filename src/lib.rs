// src/lib.rs
//! Rule-based credit-rating rationale analysis.
//!
//! [`RationaleAnalyzer`] turns a free-text rationale plus a rating symbol into
//! an [`AnalysisResult`]: strengths/risks, health and position labels, a
//! buy/hold/caution recommendation, confidence, upgrade/downgrade signals,
//! metric flags and a sentiment score. Everything is case-insensitive
//! substring matching over the phrase tables in [`Lexicon`].

pub mod analyze;
pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod metrics;
pub mod rating;
pub mod result;

// ---- Re-exports for stable public API ----
pub use crate::analyze::RationaleAnalyzer;
pub use crate::api::router;
pub use crate::error::AnalysisError;
pub use crate::input::RationaleInput;
pub use crate::lexicon::Lexicon;
pub use crate::result::{
    serialize, Action, AnalysisResult, FinancialHealth, IndustryPosition, MetricValue,
    Recommendation, Signal,
};
