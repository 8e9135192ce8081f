use crate::model::{Variant, VariantLabels};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DISCOVER_PATTERN: &str = "machine*";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Directory holding one sub-directory per source.
    pub data_root: PathBuf,

    /// Explicit source list. When empty, sources are discovered.
    pub sources: Vec<String>,

    /// Glob, relative to `data_root`, matching source directories.
    pub discover: String,

    pub variants: VariantsConfig,

    pub export: ExportConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("data"),
            sources: Vec::new(),
            discover: DEFAULT_DISCOVER_PATTERN.to_string(),
            variants: VariantsConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariantsConfig {
    pub enabled: VariantSettings,
    pub disabled: VariantSettings,
}

impl VariantsConfig {
    pub fn get(&self, variant: Variant) -> &VariantSettings {
        match variant {
            Variant::Enabled => &self.enabled,
            Variant::Disabled => &self.disabled,
        }
    }

    pub fn labels(&self) -> VariantLabels {
        VariantLabels {
            enabled: self.enabled.label.clone(),
            disabled: self.disabled.label.clone(),
        }
    }
}

impl Default for VariantsConfig {
    fn default() -> Self {
        Self {
            enabled: VariantSettings::defaults_for(Variant::Enabled),
            disabled: VariantSettings::defaults_for(Variant::Disabled),
        }
    }
}

/// Log file name and chart label of one variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VariantSettings {
    pub file: String,
    pub label: String,
}

impl VariantSettings {
    pub fn defaults_for(variant: Variant) -> Self {
        Self {
            file: variant.default_file_name().to_string(),
            label: variant.default_label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 400,
            output_dir: PathBuf::from("exports"),
        }
    }
}
