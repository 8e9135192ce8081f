use crate::chart::ExportError;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

/// Where exported images go.
pub trait DownloadSink {
    /// Stores `png` under `filename` and returns where it ended up.
    fn save(&self, filename: &str, png: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Saves into a directory. The file only appears once fully written.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, filename: &str, png: &[u8]) -> Result<PathBuf, ExportError> {
        validate_filename(filename)?;

        let save_error = |source| ExportError::Save {
            filename: filename.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(save_error)?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(save_error)?;
        tmp.write_all(png).map_err(save_error)?;
        tmp.flush().map_err(save_error)?;

        let target = self.dir.join(filename);
        tmp.persist(&target).map_err(|e| save_error(e.error))?;

        Ok(target)
    }
}

/// A bare file name: one normal path component.
pub fn validate_filename(filename: &str) -> Result<(), ExportError> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ExportError::InvalidFilename(filename.to_string())),
    }
}
