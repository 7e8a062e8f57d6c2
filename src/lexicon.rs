// src/lexicon.rs
//! Phrase tables driving every classifier.
//!
//! The compiled-in tables are the defaults. A TOML file can replace any of
//! them; tables missing from the file keep their default. Ordered tables are
//! TOML arrays of `{ label, phrases }` so category order survives loading:
//!
//! ```toml
//! [[strengths]]
//! label = "Market Position"
//! phrases = ["market leader", "dominant"]
//!
//! [sentiment]
//! positive = ["strong", "good"]
//! ```
//!
//! Matching is case-insensitive substring containment against the lowercased
//! rationale, so every phrase is stored lowercase.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::AnalysisError;

type Table = &'static [(&'static str, &'static [&'static str])];

const STRENGTHS: Table = &[
    (
        "Market Position",
        &["market leader", "leading position", "dominant", "strong brand"],
    ),
    (
        "Financial Strength",
        &[
            "strong financials",
            "robust cash flow",
            "healthy margins",
            "strong ebitda",
            "low leverage",
        ],
    ),
    (
        "Growth Trajectory",
        &["growing", "expansion", "scaling", "strong growth", "expanding market"],
    ),
    (
        "Management Quality",
        &["experienced management", "strong management", "proven track record"],
    ),
    (
        "Asset Quality",
        &["quality assets", "strong asset base", "good quality"],
    ),
    (
        "Operational Efficiency",
        &["efficient operations", "high efficiency", "operational excellence"],
    ),
];

const RISKS: Table = &[
    (
        "Market Risk",
        &[
            "market volatility",
            "cyclical",
            "industry downturn",
            "intense competition",
            "market share loss",
        ],
    ),
    (
        "Financial Risk",
        &[
            "weak financials",
            "high leverage",
            "debt burden",
            "liquidity concerns",
            "margin pressure",
        ],
    ),
    (
        "Operational Risk",
        &[
            "operational challenges",
            "execution risk",
            "supply chain",
            "capacity constraints",
        ],
    ),
    (
        "Regulatory Risk",
        &["regulatory changes", "compliance", "regulatory pressure", "policy risk"],
    ),
    (
        "Management Risk",
        &["management changes", "key person dependency", "governance concerns"],
    ),
    (
        "Technology Risk",
        &["technology disruption", "obsolescence", "digital transformation"],
    ),
];

const UPGRADE_SIGNALS: Table = &[
    (
        "Improving Fundamentals",
        &["improving", "strengthening", "recovery"],
    ),
    (
        "Improving Leverage Metrics",
        &["margin expansion", "deleveraging", "debt reduction"],
    ),
    (
        "Revenue/Market Expansion",
        &["market growth", "expansion", "new projects"],
    ),
    (
        "Operational Improvements",
        &["cost reduction", "efficiency", "optimization"],
    ),
    (
        "Strong Cash Generation",
        &["cash generation", "strong fcf", "positive cash flow"],
    ),
];

const DOWNGRADE_SIGNALS: Table = &[
    (
        "Deteriorating Fundamentals",
        &["deteriorating", "challenging", "headwinds"],
    ),
    (
        "Leverage Deterioration",
        &["leverage increase", "debt increase", "rising debt"],
    ),
    (
        "Revenue/Volume Pressure",
        &["market decline", "volume decline", "revenue decline"],
    ),
    ("Margin Compression", &["margin compression", "ebitda decline"]),
    (
        "Liquidity/Refinancing Risk",
        &["liquidity", "refinancing", "covenant"],
    ),
];

const UPGRADE_TRIGGERS: &[&str] = &[
    "improving",
    "strengthening",
    "recovery",
    "growth acceleration",
    "market expansion",
];
const DOWNGRADE_TRIGGERS: &[&str] = &[
    "deteriorating",
    "challenging",
    "weakness",
    "headwinds",
    "margin compression",
];

// "market leader" keeps a market-leader rationale with strong financials
// and healthy margins in the Strong bucket.
const STRONG_WORDS: &[&str] = &[
    "strong",
    "healthy",
    "robust",
    "excellent",
    "solid",
    "market leader",
];
const WEAK_WORDS: &[&str] = &["weak", "stressed", "deteriorating", "challenging", "declining"];

const LEADER_PHRASES: &[&str] = &[
    "market leader",
    "leading player",
    "dominant",
    "#1",
    "number 1",
];
const COMPETITIVE_PHRASES: &[&str] = &["competitive", "strong position", "established"];
const NICHE_PHRASES: &[&str] = &["niche", "specialized", "regional"];

const POSITIVE_WORDS: &[&str] = &[
    "strong", "excellent", "robust", "improving", "growth", "solid", "good",
];
const NEGATIVE_WORDS: &[&str] = &[
    "weak",
    "poor",
    "declining",
    "challenging",
    "risk",
    "pressure",
    "concern",
];

fn table(src: Table) -> Vec<Category> {
    src.iter()
        .map(|(label, phrases)| Category {
            label: (*label).to_string(),
            phrases: words(phrases),
        })
        .collect()
}

fn words(src: &[&str]) -> Vec<String> {
    src.iter().map(|w| (*w).to_string()).collect()
}

/// A labelled group of trigger phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub phrases: Vec<String>,
}

impl Category {
    /// True if any phrase occurs in `text_lower`.
    pub fn matches(&self, text_lower: &str) -> bool {
        any_contains(text_lower, &self.phrases)
    }
}

/// Trigger lists feeding the buy/hold/caution decision table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationTriggers {
    pub upgrade: Vec<String>,
    pub downgrade: Vec<String>,
}

impl Default for RecommendationTriggers {
    fn default() -> Self {
        Self {
            upgrade: words(UPGRADE_TRIGGERS),
            downgrade: words(DOWNGRADE_TRIGGERS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthWords {
    pub strong: Vec<String>,
    pub weak: Vec<String>,
}

impl Default for HealthWords {
    fn default() -> Self {
        Self {
            strong: words(STRONG_WORDS),
            weak: words(WEAK_WORDS),
        }
    }
}

/// Phrase groups for the industry-position ladder, checked in field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionPhrases {
    pub leader: Vec<String>,
    pub competitive: Vec<String>,
    pub niche: Vec<String>,
}

impl Default for PositionPhrases {
    fn default() -> Self {
        Self {
            leader: words(LEADER_PHRASES),
            competitive: words(COMPETITIVE_PHRASES),
            niche: words(NICHE_PHRASES),
        }
    }
}

/// Disjoint positive / negative word lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            positive: words(POSITIVE_WORDS),
            negative: words(NEGATIVE_WORDS),
        }
    }
}

/// Every phrase table the analyzer reads. Immutable once handed to a
/// `RationaleAnalyzer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub strengths: Vec<Category>,
    pub risks: Vec<Category>,
    pub upgrade_signals: Vec<Category>,
    pub downgrade_signals: Vec<Category>,
    pub recommendation: RecommendationTriggers,
    pub financial_health: HealthWords,
    pub industry_position: PositionPhrases,
    pub sentiment: SentimentLexicon,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            strengths: table(STRENGTHS),
            risks: table(RISKS),
            upgrade_signals: table(UPGRADE_SIGNALS),
            downgrade_signals: table(DOWNGRADE_SIGNALS),
            recommendation: RecommendationTriggers::default(),
            financial_health: HealthWords::default(),
            industry_position: PositionPhrases::default(),
            sentiment: SentimentLexicon::default(),
        }
    }
}

impl Lexicon {
    /// Parse a TOML override. Phrases are lowercased and trimmed, empties dropped.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, AnalysisError> {
        let lexicon: Lexicon =
            toml::from_str(toml_str).map_err(|e| AnalysisError::Config(e.to_string()))?;
        let lexicon = lexicon.normalized();
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AnalysisError::Config(format!(
                "Failed to read lexicon at {}: {}",
                path.display(),
                e
            ))
        })?;
        let lexicon = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            phrases = lexicon.phrase_count(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Total number of phrases across all tables.
    pub fn phrase_count(&self) -> usize {
        let cats = |t: &[Category]| t.iter().map(|c| c.phrases.len()).sum::<usize>();
        cats(&self.strengths)
            + cats(&self.risks)
            + cats(&self.upgrade_signals)
            + cats(&self.downgrade_signals)
            + self.recommendation.upgrade.len()
            + self.recommendation.downgrade.len()
            + self.financial_health.strong.len()
            + self.financial_health.weak.len()
            + self.industry_position.leader.len()
            + self.industry_position.competitive.len()
            + self.industry_position.niche.len()
            + self.sentiment.positive.len()
            + self.sentiment.negative.len()
    }

    fn normalized(mut self) -> Self {
        for cat in self
            .strengths
            .iter_mut()
            .chain(self.risks.iter_mut())
            .chain(self.upgrade_signals.iter_mut())
            .chain(self.downgrade_signals.iter_mut())
        {
            normalize_list(&mut cat.phrases);
        }
        for list in [
            &mut self.recommendation.upgrade,
            &mut self.recommendation.downgrade,
            &mut self.financial_health.strong,
            &mut self.financial_health.weak,
            &mut self.industry_position.leader,
            &mut self.industry_position.competitive,
            &mut self.industry_position.niche,
            &mut self.sentiment.positive,
            &mut self.sentiment.negative,
        ] {
            normalize_list(list);
        }
        self
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if let Some(w) = self
            .sentiment
            .positive
            .iter()
            .find(|w| self.sentiment.negative.contains(w))
        {
            return Err(AnalysisError::Config(format!(
                "sentiment word '{w}' is listed as both positive and negative"
            )));
        }
        Ok(())
    }
}

fn normalize_list(list: &mut Vec<String>) {
    for p in list.iter_mut() {
        *p = p.trim().to_lowercase();
    }
    list.retain(|p| !p.is_empty());
}

/// Substring containment of any phrase.
pub(crate) fn any_contains(text_lower: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| text_lower.contains(p.as_str()))
}

/// Number of distinct phrases present (each counted once, however often it repeats).
pub(crate) fn count_present(text_lower: &str, phrases: &[String]) -> usize {
    phrases
        .iter()
        .filter(|p| text_lower.contains(p.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_lowercase() {
        let lx = Lexicon::default();
        assert_eq!(lx.clone().normalized(), lx);
    }

    #[test]
    fn default_sentiment_lists_are_disjoint() {
        assert!(Lexicon::default().validate().is_ok());
    }

    #[test]
    fn default_shapes() {
        let lx = Lexicon::default();
        assert_eq!(lx.strengths.len(), 6);
        assert_eq!(lx.risks.len(), 6);
        assert_eq!(lx.upgrade_signals.len(), 5);
        assert_eq!(lx.downgrade_signals.len(), 5);
        assert_eq!(lx.strengths[0].label, "Market Position");
        assert_eq!(lx.downgrade_signals[4].label, "Liquidity/Refinancing Risk");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let src = r#"
            [[strengths]]
            label = "Brand"
            phrases = ["  Household NAME ", ""]

            [sentiment]
            positive = ["Upbeat"]
        "#;
        let lx = Lexicon::from_toml_str(src).unwrap();
        assert_eq!(lx.strengths.len(), 1);
        assert_eq!(lx.strengths[0].phrases, vec!["household name".to_string()]);
        assert_eq!(lx.sentiment.positive, vec!["upbeat".to_string()]);
        // negative list falls back to its default
        assert_eq!(lx.sentiment.negative, SentimentLexicon::default().negative);
        assert_eq!(lx.risks, Lexicon::default().risks);
    }

    #[test]
    fn overlapping_sentiment_words_are_rejected() {
        let src = r#"
            [sentiment]
            positive = ["stable"]
            negative = ["STABLE"]
        "#;
        let err = Lexicon::from_toml_str(src).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = Lexicon::from_toml_str("strengths = 3").unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn count_present_ignores_repetition() {
        let phrases = words(&["strong", "solid"]);
        assert_eq!(count_present("strong strong strong", &phrases), 1);
        assert_eq!(count_present("solid and strong", &phrases), 2);
    }
}
