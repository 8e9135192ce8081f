
use crate::model::Variant;
use crate::source::{FetchError, LogFetcher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------
#[derive(Default)]
pub struct MemoryFetcher {
    logs: HashMap<(String, Variant), String>,
}

impl MemoryFetcher {
    pub fn with(mut self, source: &str, variant: Variant, raw: &str) -> Self {
        self.logs
            .insert((source.to_string(), variant), raw.to_string());
        self
    }

    pub fn with_both(self, source: &str, enabled: &str, disabled: &str) -> Self {
        self.with(source, Variant::Enabled, enabled)
            .with(source, Variant::Disabled, disabled)
    }
}

#[async_trait]
impl LogFetcher for MemoryFetcher {
    async fn fetch(&self, source: &str, variant: Variant) -> Result<String, FetchError> {
        self.logs
            .get(&(source.to_string(), variant))
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                path: PathBuf::from(format!("{source}/{variant}")),
            })
    }
}
