use crate::model::Variant;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("log file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Transport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A source whose logs could not be retrieved. The source is left out of
/// every dataset; other sources are unaffected.
#[derive(Debug, Error)]
#[error("source '{source_id}' failed to load {variant} logs: {source}")]
pub struct SourceLoadError {
    pub source_id: String,
    pub variant: Variant,
    #[source]
    pub source: FetchError,
}
