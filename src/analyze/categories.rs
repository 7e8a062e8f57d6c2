// src/analyze/categories.rs
//! Category extraction: strengths, risks, and upgrade/downgrade signal groups.

use crate::lexicon::Category;

/// Hard cap on strengths and risks. Categories found past this, in table
/// order, are dropped.
pub const MAX_CATEGORIES: usize = 6;

/// Labels of the categories whose phrases occur in `text_lower`, in table
/// order, each label once, truncated to [`MAX_CATEGORIES`].
pub fn extract_categories(text_lower: &str, table: &[Category]) -> Vec<String> {
    let mut found = matching_labels(text_lower, table);
    found.truncate(MAX_CATEGORIES);
    found
}

/// Upgrade / downgrade groups: one label per matching group, no extra cap.
pub fn collect_signals(text_lower: &str, groups: &[Category]) -> Vec<String> {
    matching_labels(text_lower, groups)
}

fn matching_labels(text_lower: &str, table: &[Category]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for cat in table {
        // `matches` stops at the first phrase hit
        if cat.matches(text_lower) && !out.iter().any(|l| l == &cat.label) {
            out.push(cat.label.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn cat(label: &str, phrases: &[&str]) -> Category {
        Category {
            label: label.to_string(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn strengths_follow_table_order() {
        let lx = Lexicon::default();
        let text = "healthy margins and a dominant franchise";
        assert_eq!(
            extract_categories(text, &lx.strengths),
            vec!["Market Position", "Financial Strength"]
        );
    }

    #[test]
    fn a_category_is_added_once() {
        let lx = Lexicon::default();
        let text = "market leader, dominant, strong brand, leading position";
        assert_eq!(extract_categories(text, &lx.strengths), vec!["Market Position"]);
    }

    #[test]
    fn duplicate_labels_collapse() {
        let table = vec![cat("Dup", &["a"]), cat("Dup", &["b"]), cat("Other", &["c"])];
        assert_eq!(extract_categories("a b c", &table), vec!["Dup", "Other"]);
    }

    #[test]
    fn truncates_past_six() {
        let table: Vec<Category> = (0..8)
            .map(|i| cat(&format!("C{i}"), &[format!("k{i}").as_str()]))
            .collect();
        let text = "k0 k1 k2 k3 k4 k5 k6 k7";
        let got = extract_categories(text, &table);
        assert_eq!(got, vec!["C0", "C1", "C2", "C3", "C4", "C5"]);
    }

    #[test]
    fn signal_groups_contribute_one_label_each() {
        let lx = Lexicon::default();
        let text = "improving and strengthening, with a recovery; debt reduction under way";
        assert_eq!(
            collect_signals(text, &lx.upgrade_signals),
            vec!["Improving Fundamentals", "Improving Leverage Metrics"]
        );
    }

    #[test]
    fn every_downgrade_group_can_fire() {
        let lx = Lexicon::default();
        let text = "headwinds, rising debt, volume decline, ebitda decline, covenant";
        assert_eq!(collect_signals(text, &lx.downgrade_signals).len(), 5);
    }

    #[test]
    fn empty_text_matches_nothing() {
        let lx = Lexicon::default();
        assert!(extract_categories("", &lx.risks).is_empty());
        assert!(collect_signals("", &lx.upgrade_signals).is_empty());
    }
}
