use crate::chart::{ChartView, Dashboard, format_duration};
use crate::model::OperationKind;
use crate::source::LoadReport;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;

const ABSENT: &str = "-";
const SIZE_HEADER: &str = "Size (MB)";

/// Renders one chart as a fixed-width table, `-` for absent cells.
pub fn render_table(view: &ChartView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n{}\n",
        view.title,
        "=".repeat(view.title.chars().count())
    ));

    let widths: Vec<usize> = view
        .series
        .iter()
        .map(|s| s.chars().count().max(8))
        .collect();

    out.push_str(&format!("{SIZE_HEADER:>10}"));
    for (label, width) in view.series.iter().zip(widths.iter().copied()) {
        out.push_str(&format!("  {label:>width$}"));
    }
    out.push('\n');

    for row in &view.rows {
        out.push_str(&format!("{:>10}", row.size.as_str()));
        for ((_, value), width) in row.columns.iter().zip(widths.iter().copied()) {
            let cell = value.map(format_duration);
            let cell = cell.as_deref().unwrap_or(ABSENT);
            out.push_str(&format!("  {cell:>width$}"));
        }
        out.push('\n');
    }

    out
}

/// Every chart of `dashboard` (optionally one operation only), followed by
/// the list of sources that failed to load.
pub fn render_report(
    dashboard: &Dashboard,
    report: &LoadReport,
    operation: Option<OperationKind>,
) -> String {
    let mut out = String::new();

    for view in dashboard.views().iter().filter(|v| shows(v, operation)) {
        out.push_str(&render_table(view));
        out.push('\n');
    }

    out.push_str(&render_failures(report));
    out
}

pub fn render_failures(report: &LoadReport) -> String {
    let mut out = String::new();
    if report.failed.is_empty() {
        return out;
    }

    out.push_str(&format!("{}\n", "Failed sources:".yellow().bold()));
    for (source, err) in &report.failed {
        out.push_str(&format!("  {} {}: {}\n", "✘".red(), source, err));
    }
    out
}

#[derive(Serialize)]
struct ReportJson<'a> {
    loaded: Vec<&'a str>,
    failed: BTreeMap<&'a str, String>,
    charts: Vec<&'a ChartView>,
}

pub fn render_json(
    dashboard: &Dashboard,
    report: &LoadReport,
    operation: Option<OperationKind>,
) -> serde_json::Result<String> {
    let json = ReportJson {
        loaded: report.loaded.keys().map(String::as_str).collect(),
        failed: report
            .failed
            .iter()
            .map(|(source, err)| (source.as_str(), err.to_string()))
            .collect(),
        charts: dashboard
            .views()
            .iter()
            .filter(|v| shows(v, operation))
            .collect(),
    };

    serde_json::to_string_pretty(&json)
}

// The combined chart spans both operations and is always shown.
fn shows(view: &ChartView, operation: Option<OperationKind>) -> bool {
    use crate::chart::ChartId;

    match (&view.id, operation) {
        (_, None) | (ChartId::Combined, _) => true,
        (ChartId::Source { operation: op, .. }, Some(wanted)) => *op == wanted,
    }
}
