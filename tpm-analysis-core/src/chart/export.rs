use crate::chart::{ChartId, ChartView, Dashboard, DownloadSink, ExportError};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::PathBuf;

pub const MAX_EXPORT_DIMENSION: u32 = 8192;

/// Exact pixel size of an exported image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSize {
    width: u32,
    height: u32,
}

impl ExportSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ExportError> {
        let valid = 1..=MAX_EXPORT_DIMENSION;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(ExportError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Renders one chart of `dashboard` to PNG and hands it to `sink`.
///
/// Nothing reaches the sink unless rendering and encoding both succeed.
pub fn export_chart<S>(
    dashboard: &Dashboard,
    id: &ChartId,
    size: ExportSize,
    filename: &str,
    sink: &S,
) -> Result<PathBuf, ExportError>
where
    S: DownloadSink + ?Sized,
{
    let saved = export_with(dashboard, id, filename, sink, |view| render_png(view, size))?;

    tracing::info!(
        chart = %id,
        width = size.width,
        height = size.height,
        path = %saved.display(),
        "chart exported"
    );

    Ok(saved)
}

pub(crate) fn export_with<S, R>(
    dashboard: &Dashboard,
    id: &ChartId,
    filename: &str,
    sink: &S,
    render: R,
) -> Result<PathBuf, ExportError>
where
    S: DownloadSink + ?Sized,
    R: FnOnce(&ChartView) -> Result<Vec<u8>, ExportError>,
{
    let view = dashboard.resolve(id)?;
    let png = render(view)?;
    tracing::debug!(chart = %id, bytes = png.len(), "chart rendered");

    sink.save(filename, &png)
}

/// Rasterises the plot of `view` at 1:1 onto an opaque white surface of
/// exactly `size` and encodes it as PNG.
pub fn render_png(view: &ChartView, size: ExportSize) -> Result<Vec<u8>, ExportError> {
    // The surface lives only in this frame; every exit path releases it.
    let surface = rasterize(view, size)?;

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        &surface,
        size.width,
        size.height,
        ExtendedColorType::Rgb8,
    )?;

    Ok(png)
}

fn rasterize(view: &ChartView, size: ExportSize) -> Result<Vec<u8>, ExportError> {
    let mut pixels = vec![0u8; size.width as usize * size.height as usize * 3];

    {
        let root =
            BitMapBackend::with_buffer(&mut pixels, (size.width, size.height)).into_drawing_area();
        draw_onto(view, &root)?;
    }

    Ok(pixels)
}

/// White background, the plot, then present. Any backend failure is
/// `ExportError::Render`.
pub(crate) fn draw_onto<DB>(
    view: &ChartView,
    area: &DrawingArea<DB, Shift>,
) -> Result<(), ExportError>
where
    DB: DrawingBackend,
{
    area.fill(&WHITE).map_err(render_error)?;
    view.draw_plot(area).map_err(render_error)?;
    area.present().map_err(render_error)?;
    Ok(())
}

fn render_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::Render(err.to_string())
}
