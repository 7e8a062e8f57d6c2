// src/main.rs
//! Rationale analysis service — binary entrypoint.
//! Boots the Axum HTTP server, wiring config, the analyzer, and middleware.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rating_rationale_analyzer::{
    api::{self, AppState},
    config::AppConfig,
    metrics::Metrics,
    RationaleAnalyzer,
};

/// RUST_LOG drives the filter; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rating_rationale_analyzer=info,warn"));

    let json = std::env::var("LOG_FORMAT")
        .ok()
        .is_some_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::from_env()?;
    let lexicon = cfg.load_lexicon()?;
    let phrases = lexicon.phrase_count();

    let mut app = api::router(AppState::new(RationaleAnalyzer::new(lexicon)));
    if cfg.metrics_enabled {
        let metrics = Metrics::init(phrases)?;
        app = app.merge(metrics.router());
    }

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("bind {}", cfg.bind_addr))?;
    info!(addr = %cfg.bind_addr, phrases, metrics = cfg.metrics_enabled, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
