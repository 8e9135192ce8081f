//! Dataset alignment
//!
//! Charts need one row per size with one column per series. Profiles rarely
//! cover the same sizes, so rows are built over the union of every observed
//! size, and a series without a measurement at that size gets `None` rather
//! than a made-up number.

mod row;


pub use row::AlignedRow;

use crate::model::{
    AggregatedPoint, OperationKind, Profile, SizeKey, SourceProfiles, Variant, VariantLabels,
};
use crate::source::LoadReport;
use std::collections::BTreeSet;

/// Aligns any number of labelled profiles on one operation.
///
/// Columns keep the order of `profiles`.
pub fn align<L>(profiles: &[(L, &Profile)], operation: OperationKind) -> Vec<AlignedRow>
where
    L: AsRef<str>,
{
    let series: Vec<(&str, &[AggregatedPoint])> = profiles
        .iter()
        .map(|(label, profile)| (label.as_ref(), profile.points(operation)))
        .collect();

    align_series(&series)
}

/// Two columns, module enabled vs disabled, for one source.
pub fn align_source(
    profiles: &SourceProfiles,
    operation: OperationKind,
    labels: &VariantLabels,
) -> Vec<AlignedRow> {
    let pairs: Vec<(&str, &Profile)> = Variant::ALL
        .iter()
        .map(|&variant| (labels.get(variant), profiles.get(variant)))
        .collect();

    align(&pairs, operation)
}

/// One column per (source, operation, variant) across every loaded source.
pub fn align_combined(report: &LoadReport, labels: &VariantLabels) -> Vec<AlignedRow> {
    let mut series: Vec<(String, &[AggregatedPoint])> = Vec::new();

    for (source, profiles) in &report.loaded {
        for operation in OperationKind::ALL {
            for variant in Variant::ALL {
                let points = profiles.get(variant).points(operation);
                if points.is_empty() {
                    continue;
                }

                series.push((combined_label(source, operation, labels.get(variant)), points));
            }
        }
    }

    let borrowed: Vec<(&str, &[AggregatedPoint])> =
        series.iter().map(|(l, p)| (l.as_str(), *p)).collect();

    align_series(&borrowed)
}

pub fn combined_label(source: &str, operation: OperationKind, variant_label: &str) -> String {
    format!("{source} {operation} {variant_label}")
}

fn align_series(series: &[(&str, &[AggregatedPoint])]) -> Vec<AlignedRow> {
    let sizes: BTreeSet<&SizeKey> = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|p| &p.size))
        .collect();

    sizes
        .into_iter()
        .map(|size| AlignedRow {
            size: size.clone(),
            columns: series
                .iter()
                .map(|(label, points)| (label.to_string(), lookup(points, size)))
                .collect(),
        })
        .collect()
}

// Points are sorted by size, see `aggregate`.
fn lookup(points: &[AggregatedPoint], size: &SizeKey) -> Option<f64> {
    points
        .binary_search_by(|p| p.size.cmp(size))
        .ok()
        .map(|i| points[i].duration_ms)
}
