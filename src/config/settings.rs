//! Run settings
//!
//! Everything the reconciler needs to know about the invocation is resolved
//! here once, at the CLI boundary, and passed down explicitly.

use std::path::PathBuf;

use crate::cli::Cli;

/// Options that change how a reconciliation run behaves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Do not query the package index before installing.
    ///
    /// Unknown packages are then only discovered when `apt-get` fails on
    /// them, after earlier packages in the list may already be installed.
    pub skip_availability_check: bool,

    /// Compute and print the plan without installing anything
    pub dry_run: bool,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path to the package file
    pub package_file: PathBuf,

    pub options: ReconcileOptions,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            package_file: cli.file.clone(),
            options: ReconcileOptions {
                skip_availability_check: cli.skip_check,
                dry_run: cli.dry_run,
            },
        }
    }
}
