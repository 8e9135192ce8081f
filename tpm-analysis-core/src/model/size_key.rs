use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Payload size in MB, keyed by its canonical decimal text.
///
/// Two sizes are the same group when their decimal spelling is the same once
/// insignificant zeros are dropped (`1.50`, `01.5` and `1.5` are one key,
/// `1.00` equals `1`). Keys never compare raw IEEE-754 values for equality.
/// Ordering is numeric.
#[derive(Debug, Clone)]
pub struct SizeKey {
    canonical: String,
    value: f64,
}

impl SizeKey {
    /// Parses the size text exactly as it appeared in the log line.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let value: f64 = raw.parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        Some(Self {
            canonical: canonicalize(raw),
            value,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

fn canonicalize(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.strip_prefix('+').unwrap_or(raw)),
    };

    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));

    let int = int.trim_start_matches('0');
    let int = if int.is_empty() { "0" } else { int };
    let frac = frac.trim_end_matches('0');

    let sign = if int == "0" && frac.is_empty() { "" } else { sign };

    if frac.is_empty() {
        format!("{sign}{int}")
    } else {
        format!("{sign}{int}.{frac}")
    }
}

impl PartialEq for SizeKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for SizeKey {}

impl Hash for SizeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for SizeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SizeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then_with(|| self.canonical.cmp(&other.canonical))
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl Serialize for SizeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}
