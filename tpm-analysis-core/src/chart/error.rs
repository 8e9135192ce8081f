use crate::chart::ChartId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no chart named '{0}'")]
    ChartNotFound(ChartId),

    #[error("invalid export size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to rasterise chart: {0}")]
    Render(String),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid export file name '{0}'")]
    InvalidFilename(String),

    #[error("failed to save {filename}: {source}")]
    Save {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
#[error("invalid chart id '{0}', expected <source>/<operation> or combined")]
pub struct ChartIdError(pub String);
