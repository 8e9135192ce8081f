
use crate::model::{AggregatedPoint, OperationKind, Profile, Sample, SizeKey};
use std::collections::BTreeMap;

// Running mean, finite for any finite input.
#[derive(Default)]
struct Accumulator {
    mean_ms: f64,
    count: usize,
}

impl Accumulator {
    fn record(&mut self, duration_ms: f64) {
        self.count += 1;
        self.mean_ms += (duration_ms - self.mean_ms) / self.count as f64;
    }

    fn mean(&self) -> f64 {
        self.mean_ms
    }
}

/// Reduces samples of one (source, variant) run to one mean per
/// (operation, size). Only observed sizes appear, ascending.
pub fn aggregate<I>(samples: I) -> Profile
where
    I: IntoIterator<Item = Sample>,
{
    let mut groups: BTreeMap<OperationKind, BTreeMap<SizeKey, Accumulator>> = BTreeMap::new();

    for sample in samples {
        groups
            .entry(sample.operation)
            .or_default()
            .entry(sample.size)
            .or_default()
            .record(sample.duration_ms);
    }

    let points = groups
        .into_iter()
        .map(|(operation, sizes)| {
            let points = sizes
                .into_iter()
                .map(|(size, acc)| AggregatedPoint {
                    size,
                    duration_ms: acc.mean(),
                    samples: acc.count,
                })
                .collect();
            (operation, points)
        })
        .collect();

    Profile::new(points)
}
