use crate::chart::{ChartId, DirectorySink, ExportSize, export_chart};
use crate::conf::AnalysisConfig;
use crate::pipeline::analyze_blocking;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ExportArgs {
    /// Chart to export. `None` exports every chart.
    pub chart: Option<ChartId>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub out: Option<PathBuf>,
}

pub fn run_export(cfg: &AnalysisConfig, args: ExportArgs) -> Result<()> {
    let size = ExportSize::new(
        args.width.unwrap_or(cfg.export.width),
        args.height.unwrap_or(cfg.export.height),
    )?;
    let sink = DirectorySink::new(args.out.unwrap_or_else(|| cfg.export.output_dir.clone()));

    let analysis = analyze_blocking(cfg)?;
    if analysis.dashboard.is_empty() {
        bail!("nothing to export: no source could be loaded");
    }

    let ids: Vec<ChartId> = match args.chart {
        Some(id) => vec![id],
        None => analysis
            .dashboard
            .views()
            .iter()
            .map(|v| v.id.clone())
            .collect(),
    };

    for id in ids {
        let filename = format!("{}.png", id.file_stem());
        let path = export_chart(&analysis.dashboard, &id, size, &filename, &sink)
            .with_context(|| format!("exporting chart {id}"))?;
        println!("✔ {}", path.display());
    }

    Ok(())
}
