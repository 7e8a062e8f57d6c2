// src/api.rs
//! Thin JSON surface over the analyzer.
//!
//! - `GET  /health`
//! - `GET  /ratings`  known rating symbols and scores, best first
//! - `POST /analyze`  one rationale → one record
//! - `POST /batch`    array of rationales → array of records, same order
//!
//! Contract violations answer 422 with `{"error": "..."}`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::analyze::RationaleAnalyzer;
use crate::error::AnalysisError;
use crate::input::RationaleInput;
use crate::metrics::{ANALYSES_TOTAL, INVALID_INPUT_TOTAL};
use crate::rating::RATING_SCALE;

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<RationaleAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: RationaleAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RationaleAnalyzer::default())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/ratings", get(ratings))
        .route("/analyze", post(analyze))
        .route("/batch", post(analyze_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match self {
            AnalysisError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn rejected(e: AnalysisError) -> AnalysisError {
    warn!(error = %e, "input rejected");
    counter!(INVALID_INPUT_TOTAL).increment(1);
    e
}

async fn ratings() -> Json<Value> {
    let rows = RATING_SCALE
        .iter()
        .map(|(symbol, score)| json!({ "symbol": symbol, "score": score }))
        .collect::<Vec<_>>();
    Json(Value::Array(rows))
}

// Body is taken as raw JSON so shape errors surface as our own InvalidInput.
// A rejected body (bad syntax, missing content type) is InvalidInput too.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AnalysisError> {
    body.map(|Json(v)| v)
        .map_err(|rej| rejected(AnalysisError::InvalidInput(rej.body_text())))
}

async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AnalysisError> {
    let body = json_body(body)?;
    let input = RationaleInput::from_value(body).map_err(rejected)?;
    let result = state.analyzer.analyze_input(&input);
    counter!(ANALYSES_TOTAL, "route" => "analyze").increment(1);
    Ok(Json(Value::Object(result.to_record())))
}

async fn analyze_batch(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AnalysisError> {
    let body = json_body(body)?;
    let items = RationaleInput::batch_from_value(body).map_err(rejected)?;
    let records = state
        .analyzer
        .batch_analyze(&items)
        .iter()
        .map(|r| Value::Object(r.to_record()))
        .collect::<Vec<_>>();
    counter!(ANALYSES_TOTAL, "route" => "batch").increment(records.len() as u64);
    Ok(Json(Value::Array(records)))
}
