// src/analyze/key_metrics.rs
//! Simple metric flags: how many percentages are quoted, and which
//! ratio-related keywords appear.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::result::MetricValue;

/// Key holding the percentage count (present only when the count is non-zero).
pub const PERCENTAGES_KEY: &str = "mentions_percentages";

pub const RATIO_KEYWORDS: [&str; 7] = [
    "leverage", "roe", "roa", "debt", "equity", "ratio", "multiple",
];

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*%").expect("percentage regex"));

pub fn extract_key_metrics(rationale: &str) -> BTreeMap<String, MetricValue> {
    let mut metrics = BTreeMap::new();

    let percentages = PERCENTAGE.find_iter(rationale).count();
    if percentages > 0 {
        metrics.insert(PERCENTAGES_KEY.to_string(), MetricValue::Count(percentages));
    }

    let text_lower = rationale.to_lowercase();
    for kw in RATIO_KEYWORDS {
        if text_lower.contains(kw) {
            metrics.insert(kw.to_string(), MetricValue::Present(true));
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_percentages() {
        let m = extract_key_metrics("EBITDA margin of 12.5% and growth of 7 % YoY, 3%.");
        assert_eq!(m.get(PERCENTAGES_KEY), Some(&MetricValue::Count(3)));
    }

    #[test]
    fn no_percentages_no_key() {
        let m = extract_key_metrics("no figures here");
        assert!(!m.contains_key(PERCENTAGES_KEY));
        assert!(m.is_empty());
    }

    #[test]
    fn flags_ratio_keywords_case_insensitively() {
        let m = extract_key_metrics("Net Debt to EBITDA; ROE improving");
        assert_eq!(m.get("debt"), Some(&MetricValue::Present(true)));
        assert_eq!(m.get("roe"), Some(&MetricValue::Present(true)));
        assert!(!m.contains_key("leverage"));
    }

    #[test]
    fn keywords_match_as_substrings() {
        // plain containment, so "broad" carries "roa"
        let m = extract_key_metrics("a broad base");
        assert_eq!(m.get("roa"), Some(&MetricValue::Present(true)));
    }
}
