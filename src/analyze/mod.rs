// src/analyze/mod.rs
//! Analysis pipeline entry: runs every classifier over one rationale and
//! assembles the immutable `AnalysisResult`.
//!
//! Each classifier is a pure function of the lowercased text and the lexicon
//! (the recommendation also reads the rating score). Nothing is cached and no
//! state survives a call, so one analyzer can be shared freely across threads.

pub mod categories;
pub mod health;
pub mod key_metrics;
pub mod recommendation;
pub mod scoring;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::input::RationaleInput;
use crate::lexicon::Lexicon;
use crate::result::AnalysisResult;

pub use categories::{collect_signals, extract_categories, MAX_CATEGORIES};
pub use health::{assess_financial_health, assess_industry_position};
pub use key_metrics::extract_key_metrics;
pub use recommendation::recommend;
pub use scoring::{confidence_for, sentiment_score};

#[derive(Debug, Clone, Default)]
pub struct RationaleAnalyzer {
    lexicon: Lexicon,
}

impl RationaleAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze one rationale, stamped with the current UTC time.
    ///
    /// `agency` is accepted for the caller's bookkeeping only. Unknown rating
    /// symbols score as 5.0; an empty rationale yields default labels.
    pub fn analyze(
        &self,
        company: &str,
        rationale: &str,
        rating: &str,
        agency: Option<&str>,
    ) -> AnalysisResult {
        self.analyze_at(company, rationale, rating, agency, Utc::now())
    }

    /// Same as [`analyze`](Self::analyze) with an explicit capture time.
    pub fn analyze_at(
        &self,
        company: &str,
        rationale: &str,
        rating: &str,
        agency: Option<&str>,
        timestamp: DateTime<Utc>,
    ) -> AnalysisResult {
        let lx = &self.lexicon;
        let text = rationale.to_lowercase();
        let rating_score = crate::rating::score(rating);

        let result = AnalysisResult {
            company: company.to_string(),
            rating: rating.to_string(),
            strengths: extract_categories(&text, &lx.strengths),
            risks: extract_categories(&text, &lx.risks),
            financial_health: assess_financial_health(&text, &lx.financial_health),
            industry_position: assess_industry_position(&text, &lx.industry_position),
            ai_recommendation: recommend(rating_score, &text, &lx.recommendation),
            confidence_score: confidence_for(rationale),
            upgrade_opportunities: collect_signals(&text, &lx.upgrade_signals),
            downgrade_warnings: collect_signals(&text, &lx.downgrade_signals),
            key_metrics: extract_key_metrics(rationale),
            sentiment_score: sentiment_score(&text, &lx.sentiment),
            timestamp,
        };

        // Never log raw rationale text, only its hashed id.
        debug!(
            target: "analyze",
            id = %anon_hash(rationale),
            company,
            rating,
            known_rating = crate::rating::is_known(rating),
            agency = agency.unwrap_or(""),
            action = %result.ai_recommendation.action,
            health = result.financial_health.as_str(),
            strengths = result.strengths.len(),
            risks = result.risks.len(),
            sentiment = result.sentiment_score,
            "rationale analyzed"
        );

        result
    }

    pub fn analyze_input(&self, input: &RationaleInput) -> AnalysisResult {
        self.analyze(
            &input.company,
            &input.rationale,
            &input.rating,
            input.agency.as_deref(),
        )
    }

    /// One result per input, in input order. Items are independent; a
    /// degenerate item never stops the batch.
    pub fn batch_analyze(&self, items: &[RationaleInput]) -> Vec<AnalysisResult> {
        info!(target: "analyze", items = items.len(), "batch analysis");
        items.iter().map(|it| self.analyze_input(it)).collect()
    }
}

/// Short anonymised id: first 6 bytes of SHA-256, hex encoded.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{FinancialHealth, IndustryPosition};

    #[test]
    fn anon_hash_is_stable_and_short() {
        assert_eq!(anon_hash("abc"), anon_hash("abc"));
        assert_ne!(anon_hash("abc"), anon_hash("abd"));
        assert_eq!(anon_hash("").len(), 12);
    }

    #[test]
    fn empty_rationale_degrades_gracefully() {
        let r = RationaleAnalyzer::default().analyze("Acme", "", "AAA", None);
        assert!(r.strengths.is_empty());
        assert!(r.risks.is_empty());
        assert!(r.upgrade_opportunities.is_empty());
        assert!(r.downgrade_warnings.is_empty());
        assert!(r.key_metrics.is_empty());
        assert_eq!(r.financial_health, FinancialHealth::Moderate);
        assert_eq!(r.industry_position, IndustryPosition::StableMarketPosition);
        assert_eq!(r.confidence_score, 0.60);
        assert_eq!(r.sentiment_score, 0.0);
    }

    #[test]
    fn agency_does_not_change_the_assessment() {
        let a = RationaleAnalyzer::default();
        let ts = Utc::now();
        let text = "Robust cash flow, but supply chain issues.";
        assert_eq!(
            a.analyze_at("Acme", text, "BBB", None, ts),
            a.analyze_at("Acme", text, "BBB", Some("ICRA"), ts)
        );
    }

    #[test]
    fn custom_lexicon_is_used() {
        let lx = Lexicon::from_toml_str(
            r#"
            [[strengths]]
            label = "Sovereign Support"
            phrases = ["government support"]
            "#,
        )
        .unwrap();
        let r = RationaleAnalyzer::new(lx).analyze(
            "Acme",
            "Backed by Government Support.",
            "AA",
            None,
        );
        assert_eq!(r.strengths, vec!["Sovereign Support"]);
    }
}
