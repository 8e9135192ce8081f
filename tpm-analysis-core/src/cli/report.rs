use crate::cli::{render_json, render_report};
use crate::conf::AnalysisConfig;
use crate::model::OperationKind;
use crate::pipeline::analyze_blocking;
use anyhow::{Result, bail};

pub fn run_report(cfg: &AnalysisConfig, json: bool, operation: Option<OperationKind>) -> Result<()> {
    let analysis = analyze_blocking(cfg)?;

    if json {
        println!(
            "{}",
            render_json(&analysis.dashboard, &analysis.report, operation)?
        );
    } else {
        print!(
            "{}",
            render_report(&analysis.dashboard, &analysis.report, operation)
        );
    }

    if analysis.report.is_empty() {
        bail!("no source could be loaded");
    }
    Ok(())
}
