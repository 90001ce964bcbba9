//! Availability errors

use super::PkgsyncError;

/// Creates an unavailable packages error
pub fn unavailable(missing: Vec<String>, failed: Vec<String>) -> PkgsyncError {
    PkgsyncError::PackagesUnavailable { missing, failed }
}

/// Builds the message for [`PkgsyncError::PackagesUnavailable`].
///
/// Lists every missing package in one line, followed by the packages whose
/// index query could not be completed.
pub(crate) fn unavailable_message(missing: &[String], failed: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!(
            "Packages not found in the package index: {}",
            missing.join(", ")
        ));
    }
    if !failed.is_empty() {
        parts.push(format!(
            "Could not query the package index for: {}",
            failed.join(", ")
        ));
    }
    if parts.is_empty() {
        return "Package availability check failed".to_string();
    }
    parts.join("; ")
}
