//! Error types and handling for pkgsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Package file and package name errors
//! - [`precondition`]: Missing tools and privilege errors
//! - [`availability`]: Upstream index errors
//! - [`install`]: Installation errors

pub mod availability;
pub mod config;
pub mod install;
pub mod precondition;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pkgsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum PkgsyncError {
    // Configuration errors
    #[error("Package file not found: {path}")]
    #[diagnostic(
        code(pkgsync::config::not_found),
        help("Create the file or point to another one with --file <PATH>")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read package file: {path}: {reason}")]
    #[diagnostic(code(pkgsync::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse package file: {path}: {reason}")]
    #[diagnostic(
        code(pkgsync::config::parse_failed),
        help("The file must be a YAML mapping with a `packages` list, e.g. `packages: [curl, wget]`")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid package name '{name}': {reason}")]
    #[diagnostic(code(pkgsync::config::invalid_name))]
    InvalidPackageName { name: String, reason: String },

    #[error("Package '{name}' is listed more than once")]
    #[diagnostic(
        code(pkgsync::config::duplicate),
        help("Remove the duplicate entry from the package file")
    )]
    DuplicatePackage { name: String },

    // Precondition errors
    #[error("Required tool '{tool}' is not available: {reason}")]
    #[diagnostic(
        code(pkgsync::precondition::tool_unavailable),
        help("pkgsync needs apt-cache, dpkg-query and apt-get on PATH")
    )]
    ToolUnavailable { tool: String, reason: String },

    #[error("Insufficient privileges: {reason}")]
    #[diagnostic(
        code(pkgsync::precondition::privilege),
        help("Run pkgsync as root or as a user allowed to use sudo")
    )]
    InsufficientPrivilege { reason: String },

    // Availability errors
    #[error("{}", availability::unavailable_message(.missing, .failed))]
    #[diagnostic(
        code(pkgsync::availability::unavailable),
        help("Fix the package file, or pass --skip-check to install anyway")
    )]
    PackagesUnavailable {
        missing: Vec<String>,
        failed: Vec<String>,
    },

    // Install errors
    #[error("Failed to install package '{name}': {reason} ({installed} package(s) before it were installed)")]
    #[diagnostic(
        code(pkgsync::install::failed),
        help("Packages installed before the failure stay installed; fix the cause and re-run")
    )]
    InstallFailed {
        name: String,
        reason: String,
        installed: usize,
    },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PkgsyncError>;
