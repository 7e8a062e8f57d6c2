// src/rating.rs
//! Rating scale: maps credit-rating symbols to a numeric score in [0, 10].
//!
//! The table is ordered from `AAA` down to `D` and scores never increase
//! along that order. Unknown symbols are not stored; `score` falls back to
//! [`DEFAULT_SCORE`] at lookup time.

/// Score used for any symbol missing from [`RATING_SCALE`].
pub const DEFAULT_SCORE: f64 = 5.0;

pub static RATING_SCALE: [(&str, f64); 20] = [
    ("AAA", 10.0),
    ("AA+", 9.7),
    ("AA", 9.5),
    ("AA-", 9.2),
    ("A+", 8.7),
    ("A", 8.5),
    ("A-", 8.2),
    ("BBB+", 7.2),
    ("BBB", 7.0),
    ("BBB-", 6.8),
    ("BB+", 5.7),
    ("BB", 5.5),
    ("BB-", 5.2),
    ("B+", 4.2),
    ("B", 4.0),
    ("B-", 3.7),
    ("CCC", 2.0),
    ("CC", 1.0),
    ("C", 0.5),
    ("D", 0.0),
];

/// Exact (case-sensitive) lookup.
pub fn lookup(symbol: &str) -> Option<f64> {
    RATING_SCALE
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, score)| *score)
}

/// Numeric score for `symbol`, [`DEFAULT_SCORE`] when unknown.
pub fn score(symbol: &str) -> f64 {
    lookup(symbol).unwrap_or(DEFAULT_SCORE)
}

pub fn is_known(symbol: &str) -> bool {
    lookup(symbol).is_some()
}

/// Known symbols in table order (best first).
pub fn symbols() -> impl Iterator<Item = &'static str> {
    RATING_SCALE.iter().map(|(s, _)| *s)
}
