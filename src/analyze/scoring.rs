// src/analyze/scoring.rs
//! Numeric scores: extraction confidence and lexicon sentiment.
//!
//! Confidence is a step function of rationale length in characters
//! (more text, more evidence behind the extraction). It is not a
//! statistical interval.
//!
//! Sentiment = (pos - neg) / (pos + neg) over distinct lexicon words
//! present, and exactly 0.0 when neither list matches.

use crate::lexicon::{count_present, SentimentLexicon};

/// `(exclusive upper length bound, confidence)` steps; longer text gets [`MAX_CONFIDENCE`].
const CONFIDENCE_STEPS: [(usize, f64); 3] = [(50, 0.60), (200, 0.75), (500, 0.85)];
pub const MAX_CONFIDENCE: f64 = 0.92;

pub fn confidence_for(rationale: &str) -> f64 {
    let len = rationale.chars().count();
    CONFIDENCE_STEPS
        .iter()
        .find(|(bound, _)| len < *bound)
        .map(|(_, c)| *c)
        .unwrap_or(MAX_CONFIDENCE)
}

pub fn sentiment_score(text_lower: &str, lexicon: &SentimentLexicon) -> f64 {
    let pos = count_present(text_lower, &lexicon.positive);
    let neg = count_present(text_lower, &lexicon.negative);

    let total = pos + neg;
    if total == 0 {
        return 0.0;
    }
    (pos as f64 - neg as f64) / total as f64
}
