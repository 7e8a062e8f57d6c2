// src/result.rs
//! The structured assessment returned for one rationale.
//!
//! `AnalysisResult` is built once per analysis and never mutated afterwards.
//! `to_record` projects it field by field into a plain JSON mapping, the
//! shape downstream storage and display code reads verbatim.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Field names of the serialized record, in record order.
pub const RECORD_FIELDS: [&str; 13] = [
    "company",
    "rating",
    "strengths",
    "risks",
    "financial_health",
    "industry_position",
    "ai_recommendation",
    "confidence_score",
    "upgrade_opportunities",
    "downgrade_warnings",
    "key_metrics",
    "sentiment_score",
    "timestamp",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinancialHealth {
    Strong,
    Moderate,
    Weak,
}

impl FinancialHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialHealth::Strong => "Strong",
            FinancialHealth::Moderate => "Moderate",
            FinancialHealth::Weak => "Weak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustryPosition {
    #[serde(rename = "Market Leader")]
    MarketLeader,
    #[serde(rename = "Strong Competitive Position")]
    StrongCompetitivePosition,
    #[serde(rename = "Niche/Regional Player")]
    NicheRegionalPlayer,
    #[serde(rename = "Stable Market Position")]
    StableMarketPosition,
}

impl IndustryPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryPosition::MarketLeader => "Market Leader",
            IndustryPosition::StrongCompetitivePosition => "Strong Competitive Position",
            IndustryPosition::NicheRegionalPlayer => "Niche/Regional Player",
            IndustryPosition::StableMarketPosition => "Stable Market Position",
        }
    }
}

/// Semantic action tag of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Hold,
    Sell,
    Caution,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Hold => "HOLD",
            Action::Sell => "SELL",
            Action::Caution => "CAUTION",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic-light severity for renderers. Kept out of the recommendation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Positive,
    Neutral,
    /// Reserved for SELL, which the decision table never returns.
    Negative,
}

impl Signal {
    pub fn glyph(&self) -> &'static str {
        match self {
            Signal::Positive => "🟢",
            Signal::Neutral => "🟡",
            Signal::Negative => "🔴",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub action: Action,
    pub signal: Signal,
    pub detail: &'static str,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.action, self.detail)
    }
}

/// A `key_metrics` value: a count or a presence flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Present(bool),
}

impl From<MetricValue> for Value {
    fn from(v: MetricValue) -> Self {
        match v {
            MetricValue::Count(n) => Value::from(n),
            MetricValue::Present(b) => Value::Bool(b),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub company: String,
    pub rating: String,
    /// At most 6 distinct labels, lexicon order.
    pub strengths: Vec<String>,
    /// At most 6 distinct labels, lexicon order.
    pub risks: Vec<String>,
    pub financial_health: FinancialHealth,
    pub industry_position: IndustryPosition,
    pub ai_recommendation: Recommendation,
    /// In [0, 1].
    pub confidence_score: f64,
    pub upgrade_opportunities: Vec<String>,
    pub downgrade_warnings: Vec<String>,
    pub key_metrics: BTreeMap<String, MetricValue>,
    /// In [-1, 1].
    pub sentiment_score: f64,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Plain mapping for storage/transport. No value is transformed beyond
    /// rendering enums and the recommendation as their display strings.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("company".into(), Value::from(self.company.as_str()));
        m.insert("rating".into(), Value::from(self.rating.as_str()));
        m.insert("strengths".into(), Value::from(self.strengths.clone()));
        m.insert("risks".into(), Value::from(self.risks.clone()));
        m.insert(
            "financial_health".into(),
            Value::from(self.financial_health.as_str()),
        );
        m.insert(
            "industry_position".into(),
            Value::from(self.industry_position.as_str()),
        );
        m.insert(
            "ai_recommendation".into(),
            Value::from(self.ai_recommendation.to_string()),
        );
        m.insert("confidence_score".into(), Value::from(self.confidence_score));
        m.insert(
            "upgrade_opportunities".into(),
            Value::from(self.upgrade_opportunities.clone()),
        );
        m.insert(
            "downgrade_warnings".into(),
            Value::from(self.downgrade_warnings.clone()),
        );
        let metrics: Map<String, Value> = self
            .key_metrics
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(*v)))
            .collect();
        m.insert("key_metrics".into(), Value::Object(metrics));
        m.insert("sentiment_score".into(), Value::from(self.sentiment_score));
        m.insert(
            "timestamp".into(),
            Value::from(
                self.timestamp
                    .to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
        );
        m
    }
}

/// Free-function form of [`AnalysisResult::to_record`].
pub fn serialize(result: &AnalysisResult) -> Map<String, Value> {
    result.to_record()
}
