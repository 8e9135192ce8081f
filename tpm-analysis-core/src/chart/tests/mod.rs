mod export_tests;

use crate::aggregate::aggregate;
use crate::chart::{DownloadSink, ExportError};
use crate::model::{OperationKind, Profile, Sample, SizeKey, SourceProfiles};
use crate::source::LoadReport;
use std::path::PathBuf;
use std::sync::Mutex;

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------
pub fn profile(points: &[(OperationKind, &str, f64)]) -> Profile {
    aggregate(points.iter().map(|(operation, size, duration_ms)| Sample {
        operation: *operation,
        size: SizeKey::parse(size).unwrap(),
        duration_ms: *duration_ms,
    }))
}

/// machine1 has both operations, machine2 only encryption.
pub fn report() -> LoadReport {
    use OperationKind::*;

    let mut report = LoadReport::default();
    report.loaded.insert(
        "machine1".to_string(),
        SourceProfiles {
            enabled: profile(&[(Encryption, "1", 120.0), (Decryption, "1", 80.0)]),
            disabled: profile(&[(Encryption, "1", 100.0), (Encryption, "2", 1500.0)]),
        },
    );
    report.loaded.insert(
        "machine2".to_string(),
        SourceProfiles {
            enabled: profile(&[(Encryption, "0.5", 40.0)]),
            disabled: profile(&[(Encryption, "0.5", 35.0)]),
        },
    );
    report
}

#[derive(Default)]
pub struct MemorySink {
    pub saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl DownloadSink for MemorySink {
    fn save(&self, filename: &str, png: &[u8]) -> Result<PathBuf, ExportError> {
        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), png.to_vec()));
        Ok(PathBuf::from(filename))
    }
}
