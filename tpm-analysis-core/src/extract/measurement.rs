use crate::model::SizeKey;
use once_cell::sync::Lazy;
use regex::Regex;

// Anything may sit between the size and the duration fields.
static MEASUREMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Size:\s*([0-9.]+)\s*MB.*?Duration:\s*([0-9.]+)\s*(ms|s)")
        .expect("measurement pattern is valid")
});

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    NoMatch,
    Skipped(&'static str),
    Measured { size: SizeKey, duration_ms: f64 },
}

pub fn parse_measurement(line: &str) -> LineOutcome {
    let Some(caps) = MEASUREMENT.captures(line) else {
        return LineOutcome::NoMatch;
    };

    let Some(size) = SizeKey::parse(&caps[1]) else {
        return LineOutcome::Skipped("unparsable size");
    };
    if size.value() <= 0.0 {
        return LineOutcome::Skipped("non-positive size");
    }

    let Ok(duration) = caps[2].parse::<f64>() else {
        return LineOutcome::Skipped("unparsable duration");
    };

    let duration_ms = if caps[3].eq_ignore_ascii_case("s") {
        duration * 1000.0
    } else {
        duration
    };

    if !duration_ms.is_finite() || duration_ms < 0.0 {
        return LineOutcome::Skipped("invalid duration");
    }

    LineOutcome::Measured { size, duration_ms }
}
