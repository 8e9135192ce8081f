use crate::model::SizeKey;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One chart row: a size and the value of every series at that size.
///
/// `None` marks a series with no measurement at this size; it is never
/// conflated with a measured `Some(0.0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    pub size: SizeKey,
    pub columns: Vec<(String, Option<f64>)>,
}

impl AlignedRow {
    /// `None` for an unknown label, `Some(None)` for an absent measurement.
    pub fn value(&self, label: &str) -> Option<Option<f64>> {
        self.columns
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(l, _)| l.as_str())
    }
}

// Flat `{"size": 1.5, "<label>": 250.0, "<label>": null}` records, the shape
// chart front-ends consume directly.
impl Serialize for AlignedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry("size", &self.size)?;
        for (label, value) in &self.columns {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
