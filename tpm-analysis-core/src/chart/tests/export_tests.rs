use super::{MemorySink, profile, report};
use crate::chart::plot::series_color;
use crate::chart::{
    ChartId, Dashboard, DirectorySink, DownloadSink, ExportError, ExportSize, MAX_EXPORT_DIMENSION,
    draw_onto, export_chart, export_with, render_png,
};
use crate::model::{OperationKind, SourceProfiles, VariantLabels};
use crate::source::LoadReport;
use plotters::prelude::IntoDrawingArea;
use plotters_backend::{BackendColor, BackendCoord, DrawingBackend, DrawingErrorKind};
use std::path::PathBuf;

use pretty_assertions::assert_eq;

struct FailingSink;

impl DownloadSink for FailingSink {
    fn save(&self, filename: &str, _png: &[u8]) -> Result<PathBuf, ExportError> {
        Err(ExportError::Save {
            filename: filename.to_string(),
            source: std::io::Error::other("disk full"),
        })
    }
}

/// Refuses every drawing operation.
struct FailingBackend;

impl DrawingBackend for FailingBackend {
    type ErrorType = std::io::Error;

    fn get_size(&self) -> (u32, u32) {
        (100, 100)
    }

    fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Err(DrawingErrorKind::DrawingError(std::io::Error::other(
            "backend unavailable",
        )))
    }

    fn present(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Ok(())
    }

    fn draw_pixel(
        &mut self,
        _point: BackendCoord,
        _color: BackendColor,
    ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
        Err(DrawingErrorKind::DrawingError(std::io::Error::other(
            "backend unavailable",
        )))
    }
}

fn dashboard() -> Dashboard {
    Dashboard::build(&report(), &VariantLabels::default())
}

/// One source whose two series sit far apart on the y axis.
fn separated_dashboard() -> Dashboard {
    use OperationKind::Encryption;

    let mut report = LoadReport::default();
    report.loaded.insert(
        "lab".to_string(),
        SourceProfiles {
            enabled: profile(&[(Encryption, "1", 100.0), (Encryption, "2", 200.0)]),
            disabled: profile(&[(Encryption, "1", 1000.0), (Encryption, "2", 2000.0)]),
        },
    );
    Dashboard::build(&report, &VariantLabels::default())
}

#[test]
fn export_produces_png_of_exact_size_with_white_background() {
    // Arrange
    let dashboard = dashboard();
    let sink = MemorySink::default();
    let id = ChartId::source("machine1", OperationKind::Encryption);

    // Act
    let saved = export_chart(
        &dashboard,
        &id,
        ExportSize::new(1200, 400).unwrap(),
        "machine1-encryption.png",
        &sink,
    )
    .unwrap();

    // Assert
    assert_eq!(saved, PathBuf::from("machine1-encryption.png"));

    let saved = sink.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "machine1-encryption.png");

    let image = image::load_from_memory(&saved[0].1).unwrap();
    assert_eq!((image.width(), image.height()), (1200, 400));
    assert_eq!(*image.to_rgb8().get_pixel(0, 0), image::Rgb([255, 255, 255]));
}

#[test]
fn exported_png_shows_both_series_in_their_palette_colours() {
    // Arrange
    let dashboard = separated_dashboard();
    let sink = MemorySink::default();
    let id = ChartId::source("lab", OperationKind::Encryption);

    // Act
    export_chart(
        &dashboard,
        &id,
        ExportSize::new(800, 600).unwrap(),
        "lab-encryption.png",
        &sink,
    )
    .unwrap();

    // Assert
    let saved = sink.saved.lock().unwrap();
    let image = image::load_from_memory(&saved[0].1).unwrap().to_rgb8();
    let count = |index: usize| {
        let color = series_color(index);
        let wanted = image::Rgb([color.0, color.1, color.2]);
        image.pixels().filter(|p| **p == wanted).count()
    };

    assert!(count(0) > 0, "enabled series colour missing");
    assert!(count(1) > 0, "disabled series colour missing");
}

#[test]
fn backend_failure_is_a_render_error_and_nothing_is_saved() {
    // Arrange
    let dashboard = separated_dashboard();
    let sink = MemorySink::default();
    let id = ChartId::source("lab", OperationKind::Encryption);

    // Act
    let err = export_with(&dashboard, &id, "lab-encryption.png", &sink, |view| {
        draw_onto(view, &FailingBackend.into_drawing_area())?;
        Ok(Vec::new())
    })
    .unwrap_err();

    // Assert
    match err {
        ExportError::Render(message) => assert!(message.contains("backend unavailable")),
        other => panic!("expected a render error, got {other:?}"),
    }
    assert!(sink.saved.lock().unwrap().is_empty());
}

#[test]
fn combined_chart_exports_at_any_requested_size() {
    let view = dashboard();
    let view = view.resolve(&ChartId::Combined).unwrap();

    let png = render_png(view, ExportSize::new(300, 200).unwrap()).unwrap();

    let image = image::load_from_memory(&png).unwrap();
    assert_eq!((image.width(), image.height()), (300, 200));
}

#[test]
fn unknown_chart_is_an_error_and_nothing_is_saved() {
    let sink = MemorySink::default();

    let err = export_chart(
        &dashboard(),
        &ChartId::source("machine9", OperationKind::Encryption),
        ExportSize::new(1200, 400).unwrap(),
        "x.png",
        &sink,
    )
    .unwrap_err();

    assert!(matches!(err, ExportError::ChartNotFound(_)));
    assert!(sink.saved.lock().unwrap().is_empty());
}

#[test]
fn sink_failure_is_reported() {
    let err = export_chart(
        &dashboard(),
        &ChartId::Combined,
        ExportSize::new(100, 100).unwrap(),
        "combined.png",
        &FailingSink,
    )
    .unwrap_err();

    assert!(matches!(err, ExportError::Save { .. }));
}

#[test]
fn export_size_rejects_zero_and_oversized_dimensions() {
    assert!(ExportSize::new(0, 400).is_err());
    assert!(ExportSize::new(1200, 0).is_err());
    assert!(ExportSize::new(MAX_EXPORT_DIMENSION + 1, 10).is_err());
    assert!(ExportSize::new(MAX_EXPORT_DIMENSION, 1).is_ok());
}

#[test]
fn directory_sink_writes_only_the_final_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path().join("exports"));

    // Act
    let path = sink.save("chart.png", b"png-bytes").unwrap();

    // Assert
    assert_eq!(path, dir.path().join("exports").join("chart.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");

    let entries: Vec<_> = std::fs::read_dir(sink.dir()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn directory_sink_rejects_paths() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());

    for name in ["", "..", "../escape.png", "nested/chart.png", "/abs.png"] {
        let err = sink.save(name, b"x").unwrap_err();
        assert!(
            matches!(err, ExportError::InvalidFilename(_)),
            "{name:?} should be rejected"
        );
    }
}
