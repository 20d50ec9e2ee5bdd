//! swing-report - score a file of captured swings
//!
//! Reads a JSON array of swing captures, analyzes each one and prints the
//! per-swing analyses plus the session summary as JSON.
//!
//! Usage: swing-report <captures.json> [config.toml]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use swingmetrics::storage::config::{load_config, load_config_from};
use swingmetrics::{CbSwingAnalysis, SessionSummary, SwingAnalyzer, SwingCapture};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    swings: Vec<CbSwingAnalysis>,
    summary: SessionSummary,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting swing-report v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(captures_path) = args.next().map(PathBuf::from) else {
        bail!("usage: swing-report <captures.json> [config.toml]");
    };

    let config = match args.next() {
        Some(path) => load_config_from(&PathBuf::from(path)),
        None => load_config(),
    }
    .context("Failed to load engine configuration")?;

    let content = std::fs::read_to_string(&captures_path)
        .with_context(|| format!("Failed to read {}", captures_path.display()))?;
    let captures: Vec<SwingCapture> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse captures in {}", captures_path.display()))?;

    tracing::info!("Analyzing {} swings", captures.len());

    let analyzer = SwingAnalyzer::new(config);
    let swings = analyzer.analyze_batch(&captures);
    let summary = analyzer.summarize(&swings);

    let report = Report { swings, summary };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
