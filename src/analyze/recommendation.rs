// src/analyze/recommendation.rs
//! Rating-tier decision table for the buy/hold/caution recommendation.
//!
//! Tiers on the numeric rating score (top-down):
//! - `>= 8.5`: BUY with any upgrade trigger, else HOLD
//! - `>= 7.5`: HOLD with any downgrade trigger, else BUY
//! - `>= 6.0`: HOLD either way (detail depends on more than one upgrade trigger)
//! - below:    CAUTION
//!
//! The low tier never yields SELL. Its SELL branch compared the downgrade
//! count with itself and so could not fire; that observable behaviour is kept.

use crate::lexicon::{count_present, RecommendationTriggers};
use crate::result::{Action, Recommendation, Signal};

pub const TOP_TIER: f64 = 8.5;
pub const GOOD_TIER: f64 = 7.5;
pub const MODERATE_TIER: f64 = 6.0;

pub const BUY_IMPROVING: Recommendation = Recommendation {
    action: Action::Buy,
    signal: Signal::Positive,
    detail: "strong fundamentals with improvement potential",
};
pub const HOLD_EXCELLENT: Recommendation = Recommendation {
    action: Action::Hold,
    signal: Signal::Positive,
    detail: "maintain, excellent credit quality",
};
pub const HOLD_HEADWINDS: Recommendation = Recommendation {
    action: Action::Hold,
    signal: Signal::Neutral,
    detail: "monitor, good credit but watch headwinds",
};
pub const BUY_GOOD_VALUE: Recommendation = Recommendation {
    action: Action::Buy,
    signal: Signal::Positive,
    detail: "strong credit quality, good value",
};
pub const HOLD_UPGRADE_WATCH: Recommendation = Recommendation {
    action: Action::Hold,
    signal: Signal::Neutral,
    detail: "monitor for upgrade potential",
};
pub const HOLD_MODERATE: Recommendation = Recommendation {
    action: Action::Hold,
    signal: Signal::Neutral,
    detail: "moderate credit quality",
};
pub const CAUTION_HIGH_RISK: Recommendation = Recommendation {
    action: Action::Caution,
    signal: Signal::Neutral,
    detail: "higher risk, close monitoring required",
};

/// Map a rating score plus the rationale's trigger counts to a recommendation.
pub fn recommend(
    rating_score: f64,
    text_lower: &str,
    triggers: &RecommendationTriggers,
) -> Recommendation {
    let upgrades = count_present(text_lower, &triggers.upgrade);
    let downgrades = count_present(text_lower, &triggers.downgrade);

    if rating_score >= TOP_TIER {
        if upgrades > 0 {
            BUY_IMPROVING
        } else {
            HOLD_EXCELLENT
        }
    } else if rating_score >= GOOD_TIER {
        if downgrades > 0 {
            HOLD_HEADWINDS
        } else {
            BUY_GOOD_VALUE
        }
    } else if rating_score >= MODERATE_TIER {
        if upgrades > 1 {
            HOLD_UPGRADE_WATCH
        } else {
            HOLD_MODERATE
        }
    } else {
        CAUTION_HIGH_RISK
    }
}
