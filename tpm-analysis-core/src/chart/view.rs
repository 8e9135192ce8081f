use crate::align::AlignedRow;
use crate::chart::ChartId;
use serde::Serialize;

/// Data and chrome of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    #[serde(serialize_with = "serialize_id")]
    pub id: ChartId,
    pub title: String,
    pub series: Vec<String>,
    pub rows: Vec<AlignedRow>,
}

impl ChartView {
    pub fn new(id: ChartId, title: impl Into<String>, rows: Vec<AlignedRow>) -> Self {
        let series = rows
            .first()
            .map(|row| row.labels().map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            id,
            title: title.into(),
            series,
            rows,
        }
    }

    /// Values of one series as `(size, duration_ms)`, absent cells skipped.
    pub fn series_points(&self, index: usize) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|row| {
                let (_, value) = row.columns.get(index)?;
                value.map(|v| (row.size.value(), v))
            })
            .collect()
    }

    /// `(min, max)` size over all rows.
    pub fn size_bounds(&self) -> Option<(f64, f64)> {
        let first = self.rows.first()?.size.value();
        let last = self.rows.last()?.size.value();
        Some((first, last))
    }

    pub fn max_duration(&self) -> Option<f64> {
        self.rows
            .iter()
            .flat_map(|row| row.columns.iter().filter_map(|(_, v)| *v))
            .reduce(f64::max)
    }
}

fn serialize_id<S: serde::Serializer>(id: &ChartId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}
