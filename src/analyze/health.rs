// src/analyze/health.rs
//! Financial-health and industry-position labels.

use crate::lexicon::{any_contains, count_present, HealthWords, PositionPhrases};
use crate::result::{FinancialHealth, IndustryPosition};

/// Distinct strong words needed for `Strong`.
pub const STRONG_THRESHOLD: usize = 3;
/// Distinct weak words needed for `Weak` (checked after `Strong`).
pub const WEAK_THRESHOLD: usize = 2;

pub fn assess_financial_health(text_lower: &str, words: &HealthWords) -> FinancialHealth {
    let strong = count_present(text_lower, &words.strong);
    let weak = count_present(text_lower, &words.weak);

    if strong >= STRONG_THRESHOLD {
        FinancialHealth::Strong
    } else if weak >= WEAK_THRESHOLD {
        FinancialHealth::Weak
    } else {
        FinancialHealth::Moderate
    }
}

/// First matching group wins: leader, competitive, niche, else stable.
pub fn assess_industry_position(text_lower: &str, phrases: &PositionPhrases) -> IndustryPosition {
    if any_contains(text_lower, &phrases.leader) {
        IndustryPosition::MarketLeader
    } else if any_contains(text_lower, &phrases.competitive) {
        IndustryPosition::StrongCompetitivePosition
    } else if any_contains(text_lower, &phrases.niche) {
        IndustryPosition::NicheRegionalPlayer
    } else {
        IndustryPosition::StableMarketPosition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(text: &str) -> FinancialHealth {
        assess_financial_health(text, &HealthWords::default())
    }

    fn position(text: &str) -> IndustryPosition {
        assess_industry_position(text, &PositionPhrases::default())
    }

    #[test]
    fn three_strong_words_make_strong() {
        assert_eq!(health("strong, robust and solid"), FinancialHealth::Strong);
    }

    #[test]
    fn repetition_does_not_count() {
        assert_eq!(health("strong strong strong"), FinancialHealth::Moderate);
    }

    #[test]
    fn leadership_is_not_a_strong_word() {
        assert_eq!(
            health("Strong leadership and a healthy balance sheet"),
            FinancialHealth::Moderate
        );
        assert_eq!(
            health("Market leader with strong financials and healthy margins"),
            FinancialHealth::Strong
        );
    }

    #[test]
    fn strong_check_precedes_weak() {
        let text = "strong, robust, solid yet weak and declining";
        assert_eq!(health(text), FinancialHealth::Strong);
    }

    #[test]
    fn two_weak_words_make_weak() {
        assert_eq!(health("stressed and deteriorating"), FinancialHealth::Weak);
        assert_eq!(health("weak only"), FinancialHealth::Moderate);
    }

    #[test]
    fn empty_text_is_moderate_and_stable() {
        assert_eq!(health(""), FinancialHealth::Moderate);
        assert_eq!(position(""), IndustryPosition::StableMarketPosition);
    }

    #[test]
    fn position_priority() {
        assert_eq!(
            position("a regional, established market leader"),
            IndustryPosition::MarketLeader
        );
        assert_eq!(
            position("a regional but established lender"),
            IndustryPosition::StrongCompetitivePosition
        );
        assert_eq!(
            position("a specialized regional lender"),
            IndustryPosition::NicheRegionalPlayer
        );
        assert_eq!(position("ranked #1 by volume"), IndustryPosition::MarketLeader);
    }
}
