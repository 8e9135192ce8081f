use serde::Serialize;
use std::fmt;

/// Whether the hardware security module was enabled for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Enabled,
    Disabled,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Enabled, Variant::Disabled];

    pub fn default_file_name(&self) -> &'static str {
        match self {
            Variant::Enabled => "result_with_tpm.txt",
            Variant::Disabled => "result_without_tpm.txt",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            Variant::Enabled => "Com TPM",
            Variant::Disabled => "Sem TPM",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Enabled => f.write_str("enabled"),
            Variant::Disabled => f.write_str("disabled"),
        }
    }
}

/// Column labels for the two variants of one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantLabels {
    pub enabled: String,
    pub disabled: String,
}

impl VariantLabels {
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Enabled => &self.enabled,
            Variant::Disabled => &self.disabled,
        }
    }
}

impl Default for VariantLabels {
    fn default() -> Self {
        Self {
            enabled: Variant::Enabled.default_label().to_string(),
            disabled: Variant::Disabled.default_label().to_string(),
        }
    }
}
