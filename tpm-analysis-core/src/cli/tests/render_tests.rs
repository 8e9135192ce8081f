use crate::aggregate::aggregate;
use crate::chart::{ChartId, Dashboard};
use crate::cli::{render_failures, render_json, render_report, render_table};
use crate::model::{OperationKind, Sample, SizeKey, SourceProfiles, Variant, VariantLabels};
use crate::source::{FetchError, LoadReport, SourceLoadError};
use std::path::PathBuf;

use pretty_assertions::assert_eq;

fn sample(operation: OperationKind, size: &str, duration_ms: f64) -> Sample {
    Sample {
        operation,
        size: SizeKey::parse(size).unwrap(),
        duration_ms,
    }
}

fn report() -> LoadReport {
    use OperationKind::*;

    let mut report = LoadReport::default();
    report.loaded.insert(
        "machine1".to_string(),
        SourceProfiles {
            enabled: aggregate([sample(Encryption, "1", 250.0), sample(Decryption, "1", 90.0)]),
            disabled: aggregate([sample(Encryption, "1", 200.0), sample(Encryption, "10", 1500.0)]),
        },
    );
    report.failed.insert(
        "machine2".to_string(),
        SourceLoadError {
            source_id: "machine2".to_string(),
            variant: Variant::Disabled,
            source: FetchError::NotFound {
                path: PathBuf::from("data/machine2/result_without_tpm.txt"),
            },
        },
    );
    report
}

#[test]
fn table_marks_absent_cells_with_a_dash() {
    // Arrange
    let dashboard = Dashboard::build(&report(), &VariantLabels::default());
    let view = dashboard
        .get(&ChartId::source("machine1", OperationKind::Encryption))
        .unwrap();

    // Act
    let table = render_table(view);

    // Assert
    let expected = "\
machine1 - Criptografia
=======================
 Size (MB)   Com TPM   Sem TPM
         1     250ms     200ms
        10         -      1.5s
";
    assert_eq!(table, expected);
}

#[test]
fn report_filters_by_operation_but_keeps_the_combined_chart() {
    let report = report();
    let dashboard = Dashboard::build(&report, &VariantLabels::default());

    let out = render_report(&dashboard, &report, Some(OperationKind::Decryption));

    assert!(out.contains("machine1 - Descriptografia"));
    assert!(!out.contains("machine1 - Criptografia"));
    assert!(out.contains("Comparação de Performance TPM"));
}

#[test]
fn failures_name_the_source_and_the_missing_file() {
    let out = render_failures(&report());

    assert!(out.contains("Failed sources:"));
    assert!(out.contains("machine2"));
    assert!(out.contains("result_without_tpm.txt"));
}

#[test]
fn no_failures_renders_nothing() {
    assert_eq!(render_failures(&LoadReport::default()), "");
}

#[test]
fn json_report_lists_loaded_failed_and_charts() {
    let report = report();
    let dashboard = Dashboard::build(&report, &VariantLabels::default());

    let json = render_json(&dashboard, &report, None).unwrap();
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(json["loaded"], serde_json::json!(["machine1"]));
    assert!(json["failed"]["machine2"]
        .as_str()
        .unwrap()
        .contains("disabled"));
    assert_eq!(json["charts"][0]["title"], "machine1 - Criptografia");
    assert!(json["charts"][0]["rows"][1]["Com TPM"].is_null());
}
