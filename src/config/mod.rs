//! Configuration handling for pkgsync
//!
//! This module contains:
//! - `packages.yaml` - the declarative package list
//! - [`Settings`] - run options resolved from the command line

pub mod package_list;
pub mod settings;

// Re-export commonly used types
pub use package_list::{DEFAULT_PACKAGE_FILE, PackageList, PackageName};
pub use settings::{ReconcileOptions, Settings};
