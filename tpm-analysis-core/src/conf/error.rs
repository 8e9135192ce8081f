use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    // IO / Discovery
    #[error("failed to read config file {path}: {source}")]
    #[diagnostic(code(tpm_analysis::config::read_file))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    #[diagnostic(code(tpm_analysis::config::glob))]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    #[diagnostic(code(tpm_analysis::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("no sources configured and none matched '{pattern}' under {root}")]
    #[diagnostic(code(tpm_analysis::config::no_sources))]
    NoSources { root: PathBuf, pattern: String },

    #[error("invalid export size {width}x{height}")]
    #[diagnostic(code(tpm_analysis::config::export_size))]
    InvalidExportSize { width: u32, height: u32 },

    #[error("variant labels must differ, both are '{label}'")]
    #[diagnostic(code(tpm_analysis::config::duplicate_label))]
    DuplicateLabel { label: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
