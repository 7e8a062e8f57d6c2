// src/error.rs
use thiserror::Error;

/// Failures the analysis core can report.
///
/// A rationale that matches nothing is not an error; it yields a normal,
/// mostly-empty `AnalysisResult`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Contract violation at the boundary (missing or non-string field).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}
