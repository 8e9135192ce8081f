use crate::align::{align_combined, align_source};
use crate::chart::{ChartId, ChartView, ExportError};
use crate::model::{OperationKind, VariantLabels};
use crate::source::LoadReport;
use serde::Serialize;

/// Every chart built from one load cycle.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Dashboard {
    views: Vec<ChartView>,
}

impl Dashboard {
    /// Two charts per loaded source (one per operation) followed by the
    /// combined chart. Charts without any row are left out.
    pub fn build(report: &LoadReport, labels: &VariantLabels) -> Self {
        let mut views = Vec::new();

        for (source, profiles) in &report.loaded {
            for operation in OperationKind::ALL {
                let rows = align_source(profiles, operation, labels);
                if rows.is_empty() {
                    tracing::debug!(source = %source, %operation, "no data for chart");
                    continue;
                }

                views.push(ChartView::new(
                    ChartId::source(source.as_str(), operation),
                    format!("{source} - {}", operation.title()),
                    rows,
                ));
            }
        }

        let combined = align_combined(report, labels);
        if !combined.is_empty() {
            views.push(ChartView::new(
                ChartId::Combined,
                "Comparação de Performance TPM",
                combined,
            ));
        }

        Self { views }
    }

    pub fn views(&self) -> &[ChartView] {
        &self.views
    }

    pub fn get(&self, id: &ChartId) -> Option<&ChartView> {
        self.views.iter().find(|v| &v.id == id)
    }

    pub fn resolve(&self, id: &ChartId) -> Result<&ChartView, ExportError> {
        self.get(id)
            .ok_or_else(|| ExportError::ChartNotFound(id.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
