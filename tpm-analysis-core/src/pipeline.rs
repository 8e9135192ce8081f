//! One load cycle, from config to charts.
//!
//! resolve sources
//! load_sources (FsFetcher)
//! LoadReport
//! Dashboard::build
//!
//! A refresh is simply another cycle; its result replaces the previous one
//! as a whole.

use crate::chart::Dashboard;
use crate::conf::{AnalysisConfig, ConfigError};
use crate::source::{FsFetcher, LoadReport, load_sources};

pub struct Analysis {
    pub report: LoadReport,
    pub dashboard: Dashboard,
}

pub async fn analyze(cfg: &AnalysisConfig) -> Result<Analysis, ConfigError> {
    let sources = cfg.resolve_sources()?;
    tracing::info!(
        sources = sources.len(),
        data_root = %cfg.data_root.display(),
        "loading sources"
    );

    let fetcher = FsFetcher::new(&cfg.data_root, cfg.variants.clone());
    let report = load_sources(&fetcher, &sources).await;
    let dashboard = Dashboard::build(&report, &cfg.variants.labels());

    tracing::info!(
        loaded = report.loaded.len(),
        failed = report.failed.len(),
        charts = dashboard.views().len(),
        "load cycle complete"
    );

    Ok(Analysis { report, dashboard })
}

/// Runs [`analyze`] on a single-threaded runtime.
pub fn analyze_blocking(cfg: &AnalysisConfig) -> anyhow::Result<Analysis> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    Ok(rt.block_on(analyze(cfg))?)
}
