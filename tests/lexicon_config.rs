// tests/lexicon_config.rs
//
// Lexicon overrides loaded from TOML files and wired through env config.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;

use rating_rationale_analyzer::config::{AppConfig, ENV_LEXICON_PATH};
use rating_rationale_analyzer::{AnalysisError, IndustryPosition, Lexicon, RationaleAnalyzer};

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
    fs::write(&path, content).expect("write temp lexicon");
    path
}

const OVERRIDE: &str = r#"
[[risks]]
label = "Sovereign Risk"
phrases = ["Sovereign Ceiling", "country risk"]

[industry_position]
leader = ["flagship"]
"#;

#[test]
fn from_path_applies_overrides() {
    let path = write_temp("lexicon-override.toml", OVERRIDE);
    let lx = Lexicon::from_path(&path).expect("load lexicon");
    let _ = fs::remove_file(&path);

    let r = RationaleAnalyzer::new(lx).analyze(
        "Acme",
        "The flagship lender is capped by the sovereign ceiling.",
        "BBB",
        None,
    );
    assert_eq!(r.risks, vec!["Sovereign Risk"]);
    assert_eq!(r.industry_position, IndustryPosition::MarketLeader);
    // the built-in tables know nothing of "flagship"
    let plain = RationaleAnalyzer::default().analyze("Acme", "flagship lender", "BBB", None);
    assert_eq!(plain.industry_position, IndustryPosition::StableMarketPosition);
}

#[test]
fn from_path_missing_file_is_config_error() {
    let err = Lexicon::from_path("/no/such/lexicon.toml").unwrap_err();
    assert!(matches!(err, AnalysisError::Config(_)));
}

#[test]
#[serial]
fn env_path_selects_lexicon() {
    let path = write_temp("lexicon-env.toml", OVERRIDE);
    std::env::set_var(ENV_LEXICON_PATH, &path);
    let cfg = AppConfig::from_env().expect("config");
    std::env::remove_var(ENV_LEXICON_PATH);

    let lx = cfg.load_lexicon().expect("lexicon");
    let _ = fs::remove_file(&path);
    assert_eq!(lx.risks.len(), 1);
    assert_eq!(lx.risks[0].phrases[0], "sovereign ceiling");
}

#[test]
#[serial]
fn no_env_path_uses_builtin_tables() {
    std::env::remove_var(ENV_LEXICON_PATH);
    let cfg = AppConfig::from_env().expect("config");
    assert_eq!(cfg.load_lexicon().expect("lexicon"), Lexicon::default());
}
