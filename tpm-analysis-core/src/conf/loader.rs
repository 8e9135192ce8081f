use crate::chart::ExportSize;
use crate::conf::{AnalysisConfig, ConfigError, discover_sources};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "tpm-analysis.hcl";

/// Loads and validates a config file.
///
/// Relative `data_root` and `export.output_dir` are resolved against the
/// directory holding the file.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut cfg: AnalysisConfig = hcl::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    if let Some(base) = path.parent() {
        cfg.data_root = base.join(&cfg.data_root);
        cfg.export.output_dir = base.join(&cfg.export.output_dir);
    }

    cfg.validate()?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Loads `explicit` when given (a missing file is an error), otherwise
/// `tpm-analysis.hcl` from the working directory when present, otherwise the
/// built-in defaults.
pub fn load_or_default(explicit: Option<&Path>) -> Result<AnalysisConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let implicit = Path::new(CONFIG_FILE_NAME);
    if implicit.is_file() {
        return load_config(implicit);
    }

    tracing::debug!("no config file, using defaults");
    let cfg = AnalysisConfig::default();
    cfg.validate()?;
    Ok(cfg)
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let export = &self.export;
        if ExportSize::new(export.width, export.height).is_err() {
            return Err(ConfigError::InvalidExportSize {
                width: export.width,
                height: export.height,
            });
        }

        if self.variants.enabled.label == self.variants.disabled.label {
            return Err(ConfigError::DuplicateLabel {
                label: self.variants.enabled.label.clone(),
            });
        }

        Ok(())
    }

    /// The configured source list, or the discovered one when none is set.
    pub fn resolve_sources(&self) -> Result<Vec<String>, ConfigError> {
        if !self.sources.is_empty() {
            return Ok(self.sources.clone());
        }

        let discovered = discover_sources(&self.data_root, &self.discover)?;
        if discovered.is_empty() {
            return Err(ConfigError::NoSources {
                root: self.data_root.clone(),
                pattern: self.discover.clone(),
            });
        }

        Ok(discovered)
    }
}
