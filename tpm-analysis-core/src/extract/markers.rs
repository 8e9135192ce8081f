use crate::model::OperationKind;

// English and Portuguese spellings; either one selects the same section.
const ENCRYPTION_MARKERS: &[&str] = &["Encryption", "Encriptação:"];
const DECRYPTION_MARKERS: &[&str] = &["Decryption", "Decriptação:"];

/// Returns the section a line switches to, if it carries a marker.
///
/// Encryption wins when a line mentions both.
pub fn section_marker(line: &str) -> Option<OperationKind> {
    if ENCRYPTION_MARKERS.iter().any(|m| line.contains(m)) {
        Some(OperationKind::Encryption)
    } else if DECRYPTION_MARKERS.iter().any(|m| line.contains(m)) {
        Some(OperationKind::Decryption)
    } else {
        None
    }
}
