// src/metrics.rs
use axum::{routing::get, Router};
use metrics::gauge;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Counter names recorded by the HTTP layer.
pub const ANALYSES_TOTAL: &str = "rationale_analyses_total";
pub const INVALID_INPUT_TOTAL: &str = "rationale_invalid_input_total";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder and publish the loaded lexicon size.
    pub fn init(lexicon_phrases: usize) -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;

        gauge!("lexicon_phrases").set(lexicon_phrases as f64);

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` in the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
