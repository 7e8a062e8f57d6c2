// src/config.rs
//! Service configuration from the environment (`.env` is loaded by the binary).
//!
//! - `RATIONALE_BIND_ADDR`    listen address, default `0.0.0.0:8080`
//! - `RATIONALE_LEXICON_PATH` optional TOML file overriding phrase tables
//! - `RATIONALE_METRICS`      `1` mounts the Prometheus `/metrics` route

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use crate::lexicon::Lexicon;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub const ENV_BIND_ADDR: &str = "RATIONALE_BIND_ADDR";
pub const ENV_LEXICON_PATH: &str = "RATIONALE_LEXICON_PATH";
pub const ENV_METRICS: &str = "RATIONALE_METRICS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub lexicon_path: Option<PathBuf>,
    pub metrics_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|k| std::env::var(k).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = var(ENV_BIND_ADDR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("invalid {ENV_BIND_ADDR}: {raw_addr}"))?;

        let lexicon_path = var(ENV_LEXICON_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let metrics_enabled = var(ENV_METRICS).is_some_and(|v| v.trim() == "1");

        Ok(Self {
            bind_addr,
            lexicon_path,
            metrics_enabled,
        })
    }

    /// Lexicon from the configured file, or the compiled-in tables.
    pub fn load_lexicon(&self) -> anyhow::Result<Lexicon> {
        match &self.lexicon_path {
            Some(path) => Ok(Lexicon::from_path(path)?),
            None => {
                info!("using built-in lexicon");
                Ok(Lexicon::default())
            }
        }
    }
}
