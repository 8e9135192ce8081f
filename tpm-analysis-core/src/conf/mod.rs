mod discover;
mod error;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use discover::{discover_sources, resolve_glob};
pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, load_config, load_or_default};
pub use types::*;
