use crate::conf::ConfigError;
use glob::glob;
use std::path::Path;

/// Discovers source directories matching a glob pattern.
///
/// Only directories count; their file names become source ids, returned in
/// sorted order. Unreadable entries are silently filtered out.
///
/// # Errors
///
/// Returns `ConfigError::Glob` if the pattern is malformed.
pub fn discover_sources(root: &Path, glob_pattern: &str) -> Result<Vec<String>, ConfigError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut sources: Vec<String> = glob(pattern)
        .map_err(|e| ConfigError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|path| path.is_dir())
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();

    sources.sort();
    sources.dedup();
    Ok(sources)
}

/// Joins `pattern` onto `root`, giving the pattern glob should match.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
