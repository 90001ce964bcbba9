//! Package manager backend
//!
//! The reconciler talks to the system only through the narrow capability
//! traits defined here:
//! - [`PackageIndex`]: does a package exist upstream
//! - [`PackageDatabase`]: is a package installed locally
//! - [`PackageInstaller`]: install one package
//! - [`PrivilegeCheck`]: may we change the system at all
//!
//! [`apt::AptBackend`] implements all of them on top of `apt-cache`,
//! `dpkg-query` and `apt-get`.

pub mod apt;
pub mod privilege;

pub use apt::AptBackend;

use crate::config::PackageName;
use crate::error::Result;

/// Outcome of querying the upstream package index for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// The index knows the package
    Available,
    /// The index answered and does not know the package
    Missing,
    /// The index could not be queried
    QueryFailed(String),
}

/// How privileged commands must be run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// Already running as root
    None,
    /// Prefix privileged commands with `sudo`
    Sudo,
}

/// Upstream repository index
pub trait PackageIndex {
    /// Query the index for a single package
    fn availability(&self, name: &PackageName) -> Availability;
}

/// Local package database
pub trait PackageDatabase {
    /// Whether the package is currently installed
    ///
    /// Absence is a normal answer, so this never fails.
    fn is_installed(&self, name: &PackageName) -> bool;
}

/// Package installation
pub trait PackageInstaller {
    /// Install a single package, returning the failure reason on error
    fn install(&self, name: &PackageName, escalation: Escalation)
    -> std::result::Result<(), String>;
}

/// Privilege precondition
pub trait PrivilegeCheck {
    /// Confirm installs can be performed, and how
    fn ensure_privileged(&self) -> Result<Escalation>;
}
