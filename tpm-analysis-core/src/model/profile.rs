use crate::model::{OperationKind, SizeKey, Variant};
use serde::Serialize;
use std::collections::BTreeMap;

/// One parsed measurement line.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub operation: OperationKind,
    pub size: SizeKey,
    pub duration_ms: f64,
}

/// Mean duration of every sample sharing one (operation, size).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedPoint {
    pub size: SizeKey,
    pub duration_ms: f64,
    /// How many samples were averaged.
    pub samples: usize,
}

/// Aggregated points of one (source, variant) run, per operation.
///
/// Points of each operation are strictly ascending by size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Profile {
    points: BTreeMap<OperationKind, Vec<AggregatedPoint>>,
}

impl Profile {
    pub(crate) fn new(points: BTreeMap<OperationKind, Vec<AggregatedPoint>>) -> Self {
        Self { points }
    }

    pub fn points(&self, operation: OperationKind) -> &[AggregatedPoint] {
        self.points
            .get(&operation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn operations(&self) -> impl Iterator<Item = OperationKind> + '_ {
        self.points.keys().copied()
    }

    pub fn point_count(&self) -> usize {
        self.points.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

/// Both variants of one source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceProfiles {
    pub enabled: Profile,
    pub disabled: Profile,
}

impl SourceProfiles {
    pub fn get(&self, variant: Variant) -> &Profile {
        match variant {
            Variant::Enabled => &self.enabled,
            Variant::Disabled => &self.disabled,
        }
    }
}
