use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which half of the benchmark a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Encryption,
    Decryption,
}

impl OperationKind {
    pub const ALL: [OperationKind; 2] = [OperationKind::Encryption, OperationKind::Decryption];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Encryption => "encryption",
            OperationKind::Decryption => "decryption",
        }
    }

    /// Heading used on charts and report tables.
    pub fn title(&self) -> &'static str {
        match self {
            OperationKind::Encryption => "Criptografia",
            OperationKind::Decryption => "Descriptografia",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encryption" => Ok(OperationKind::Encryption),
            "decryption" => Ok(OperationKind::Decryption),
            other => Err(format!(
                "unknown operation: {other}, expected encryption or decryption"
            )),
        }
    }
}
