//! Record extraction
//!
//! Turns one raw benchmark log into a sequence of [`Sample`]s. The log is
//! free text: section marker lines ("Encryption", "Decriptação:", ...) switch
//! the operation that following measurements are attributed to, and
//! measurement lines carry a size in MB and a duration in ms or s.
//!
//! The scan is a left-to-right fold over lines with an explicit accumulator,
//! so the "current section" never lives outside a single call.
//!
//! raw text
//! section_marker / parse_measurement
//! ExtractState
//! Vec<Sample>

mod markers;
mod measurement;


pub use markers::section_marker;
pub use measurement::{LineOutcome, parse_measurement};

use crate::model::{OperationKind, Sample};

/// Line counters for one extracted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines: usize,
    pub matched: usize,
    /// Measurements seen before any section marker.
    pub unattributed: usize,
    /// Lines that looked like measurements but carried unusable numbers.
    pub skipped: usize,
}

#[derive(Debug, Default)]
struct ExtractState {
    current: Option<OperationKind>,
    samples: Vec<Sample>,
    stats: ExtractStats,
}

impl ExtractState {
    fn step(mut self, line: &str) -> Self {
        self.stats.lines += 1;

        if let Some(operation) = section_marker(line) {
            self.current = Some(operation);
        }

        match parse_measurement(line) {
            LineOutcome::NoMatch => {}
            LineOutcome::Skipped(reason) => {
                self.stats.skipped += 1;
                tracing::trace!(line = self.stats.lines, reason, "measurement skipped");
            }
            LineOutcome::Measured { size, duration_ms } => match self.current {
                Some(operation) => {
                    self.stats.matched += 1;
                    self.samples.push(Sample {
                        operation,
                        size,
                        duration_ms,
                    });
                }
                None => self.stats.unattributed += 1,
            },
        }

        self
    }
}

/// Extracts every attributable sample, in line order.
pub fn extract(raw: &str) -> Vec<Sample> {
    extract_with_stats(raw).0
}

pub fn extract_with_stats(raw: &str) -> (Vec<Sample>, ExtractStats) {
    let state = raw.lines().fold(ExtractState::default(), ExtractState::step);

    tracing::debug!(
        lines = state.stats.lines,
        matched = state.stats.matched,
        unattributed = state.stats.unattributed,
        skipped = state.stats.skipped,
        "log text extracted"
    );

    (state.samples, state.stats)
}
