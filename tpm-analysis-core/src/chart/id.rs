use crate::chart::ChartIdError;
use crate::model::OperationKind;
use std::fmt;
use std::str::FromStr;

const COMBINED: &str = "combined";

/// Names one chart of a [`Dashboard`](crate::chart::Dashboard).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartId {
    /// Enabled vs disabled for one machine and operation.
    Source {
        source: String,
        operation: OperationKind,
    },
    /// Every machine, operation and variant on one chart.
    Combined,
}

impl ChartId {
    pub fn source(source: impl Into<String>, operation: OperationKind) -> Self {
        ChartId::Source {
            source: source.into(),
            operation,
        }
    }

    /// File name stem, e.g. `machine1-encryption`.
    pub fn file_stem(&self) -> String {
        match self {
            ChartId::Source { source, operation } => format!("{source}-{operation}"),
            ChartId::Combined => COMBINED.to_string(),
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartId::Source { source, operation } => write!(f, "{source}/{operation}"),
            ChartId::Combined => f.write_str(COMBINED),
        }
    }
}

impl FromStr for ChartId {
    type Err = ChartIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == COMBINED {
            return Ok(ChartId::Combined);
        }

        let (source, operation) = s.split_once('/').ok_or_else(|| ChartIdError(s.to_string()))?;
        if source.is_empty() {
            return Err(ChartIdError(s.to_string()));
        }
        let operation = operation
            .parse::<OperationKind>()
            .map_err(|_| ChartIdError(s.to_string()))?;

        Ok(ChartId::source(source, operation))
    }
}
