//! Installation errors

use super::PkgsyncError;

/// Creates an install failed error
///
/// `installed` is the number of packages from the same plan that were
/// installed before this one.
pub fn failed(
    name: impl Into<String>,
    reason: impl Into<String>,
    installed: usize,
) -> PkgsyncError {
    PkgsyncError::InstallFailed {
        name: name.into(),
        reason: reason.into(),
        installed,
    }
}
