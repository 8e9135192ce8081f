use integration_tests::harness::Fixture;
use std::fs;
use tpm_analysis_core::chart::{ChartId, DirectorySink, ExportSize, export_chart};
use tpm_analysis_core::cli::{ExportArgs, run_export};
use tpm_analysis_core::model::OperationKind;
use tpm_analysis_core::pipeline::analyze_blocking;

use pretty_assertions::assert_eq;

#[test]
fn exported_chart_has_the_configured_size() {
    let fixture = Fixture::new();
    let cfg = fixture.config();
    let analysis = analyze_blocking(&cfg).unwrap();
    let sink = DirectorySink::new(&cfg.export.output_dir);

    let path = export_chart(
        &analysis.dashboard,
        &ChartId::source("machine1", OperationKind::Encryption),
        ExportSize::new(cfg.export.width, cfg.export.height).unwrap(),
        "machine1-encryption.png",
        &sink,
    )
    .unwrap();

    assert_eq!(path, fixture.root().join("exports/machine1-encryption.png"));
    let image = image::open(&path).unwrap();
    assert_eq!((image.width(), image.height()), (1200, 400));
}

#[test]
fn export_command_writes_every_chart() {
    let fixture = Fixture::new();
    let cfg = fixture.config();
    let out = fixture.root().join("all");

    run_export(
        &cfg,
        ExportArgs {
            chart: None,
            width: Some(640),
            height: Some(320),
            out: Some(out.clone()),
        },
    )
    .unwrap();

    let mut files: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "combined.png",
            "machine1-decryption.png",
            "machine1-encryption.png",
            "machine3-decryption.png",
            "machine3-encryption.png",
        ]
    );

    let image = image::open(out.join("combined.png")).unwrap();
    assert_eq!((image.width(), image.height()), (640, 320));
}

#[test]
fn exporting_a_chart_of_a_failed_source_is_an_error() {
    let fixture = Fixture::new();
    let cfg = fixture.config();
    let out = fixture.root().join("none");

    let err = run_export(
        &cfg,
        ExportArgs {
            chart: Some(ChartId::source("machine2", OperationKind::Encryption)),
            out: Some(out.clone()),
            ..ExportArgs::default()
        },
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("no chart named 'machine2/encryption'"));
    assert!(fs::read_dir(&out).map(|d| d.count() == 0).unwrap_or(true));
}
