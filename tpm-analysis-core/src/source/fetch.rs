use crate::conf::VariantsConfig;
use crate::model::Variant;
use crate::source::FetchError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Retrieves the raw log text of one (source, variant).
#[async_trait]
pub trait LogFetcher: Send + Sync {
    async fn fetch(&self, source: &str, variant: Variant) -> Result<String, FetchError>;
}

/// Reads `<root>/<source>/<variant file>` from disk.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
    variants: VariantsConfig,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>, variants: VariantsConfig) -> Self {
        Self {
            root: root.into(),
            variants,
        }
    }

    pub fn path_for(&self, source: &str, variant: Variant) -> PathBuf {
        self.root
            .join(source)
            .join(&self.variants.get(variant).file)
    }
}

#[async_trait]
impl LogFetcher for FsFetcher {
    async fn fetch(&self, source: &str, variant: Variant) -> Result<String, FetchError> {
        let path = self.path_for(source, variant);

        tracing::debug!(source, %variant, path = %path.display(), "fetching log");

        // Logs are produced by foreign tooling, tolerate stray non-UTF-8 bytes.
        match fs::read(&path).await {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::NotFound { path }),
            Err(e) => Err(FetchError::Transport { path, source: e }),
        }
    }
}
