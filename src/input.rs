// src/input.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AnalysisError;

/// One rationale submission as it crosses the boundary.
///
/// Empty strings are valid (they just produce default classifications);
/// a missing or non-string required field is `InvalidInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RationaleInput {
    pub company: String,
    pub rationale: String,
    pub rating: String,
    /// Carried for the caller's bookkeeping; no classifier reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
}

impl RationaleInput {
    pub fn new(
        company: impl Into<String>,
        rationale: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            rationale: rationale.into(),
            rating: rating.into(),
            agency: None,
        }
    }

    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = Some(agency.into());
        self
    }

    /// Validate a loosely-typed JSON object.
    pub fn from_value(value: Value) -> Result<Self, AnalysisError> {
        let Value::Object(obj) = value else {
            return Err(AnalysisError::InvalidInput(
                "expected a JSON object".to_string(),
            ));
        };
        Ok(Self {
            company: required(&obj, "company")?,
            rationale: required(&obj, "rationale")?,
            rating: required(&obj, "rating")?,
            agency: optional(&obj, "agency")?,
        })
    }

    /// Validate every element of a JSON array, failing on the first bad item.
    pub fn batch_from_value(value: Value) -> Result<Vec<Self>, AnalysisError> {
        let Value::Array(items) = value else {
            return Err(AnalysisError::InvalidInput(
                "expected a JSON array".to_string(),
            ));
        };
        items
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                Self::from_value(v).map_err(|e| match e {
                    AnalysisError::InvalidInput(msg) => {
                        AnalysisError::InvalidInput(format!("item {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect()
    }
}

fn required(obj: &Map<String, Value>, key: &str) -> Result<String, AnalysisError> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(AnalysisError::InvalidInput(format!(
            "missing field '{key}'"
        ))),
        Some(_) => Err(AnalysisError::InvalidInput(format!(
            "field '{key}' must be a string"
        ))),
    }
}

fn optional(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, AnalysisError> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(AnalysisError::InvalidInput(format!(
            "field '{key}' must be a string"
        ))),
    }
}
