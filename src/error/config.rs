//! Package file errors

use super::PkgsyncError;

/// Creates a package file not found error
pub fn not_found(path: impl Into<String>) -> PkgsyncError {
    PkgsyncError::ConfigNotFound { path: path.into() }
}

/// Creates a package file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PkgsyncError {
    PkgsyncError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a package file parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PkgsyncError {
    PkgsyncError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid package name error
pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> PkgsyncError {
    PkgsyncError::InvalidPackageName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate package error
pub fn duplicate(name: impl Into<String>) -> PkgsyncError {
    PkgsyncError::DuplicatePackage { name: name.into() }
}
