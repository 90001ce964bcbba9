//! Test fixtures shared by the unit tests.
//!
//! [`FakeBackend`] implements every backend trait in memory and records the
//! calls made to it, so reconciler tests never touch apt or dpkg.
//!
//! ```ignore
//! let backend = FakeBackend::new()
//!     .with_installed(&["curl"])
//!     .with_missing(&["foo-nonexistent"]);
//! ```

#![allow(clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use crate::backend::{
    Availability, Escalation, PackageDatabase, PackageIndex, PackageInstaller, PrivilegeCheck,
};
use crate::config::{PackageList, PackageName};
use crate::error::{Result, precondition};

/// Build a package list, panicking on invalid input.
pub fn package_list(names: &[&str]) -> PackageList {
    PackageList::from_names(names).expect("valid package list")
}

/// Collect package names as strings for assertions.
pub fn names<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a PackageName>,
{
    items.into_iter().map(ToString::to_string).collect()
}

/// In-memory backend
///
/// Packages are available unless marked missing, and installs succeed
/// unless marked failing. Successful installs are added to the installed
/// set, so a second run sees them.
#[derive(Default)]
pub struct FakeBackend {
    missing: HashSet<String>,
    index_failures: HashSet<String>,
    install_failures: HashSet<String>,
    installed: RefCell<HashSet<String>>,
    privileged: bool,
    privilege_checks: Cell<usize>,
    index_queries: RefCell<Vec<String>>,
    database_queries: RefCell<Vec<String>>,
    install_calls: RefCell<Vec<String>>,
    last_escalation: Cell<Option<Escalation>>,
}

fn to_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            privileged: true,
            ..Self::default()
        }
    }

    pub fn with_installed(self, names: &[&str]) -> Self {
        self.installed.borrow_mut().extend(to_set(names));
        self
    }

    pub fn with_missing(mut self, names: &[&str]) -> Self {
        self.missing.extend(to_set(names));
        self
    }

    pub fn with_index_failure(mut self, names: &[&str]) -> Self {
        self.index_failures.extend(to_set(names));
        self
    }

    pub fn with_install_failure(mut self, names: &[&str]) -> Self {
        self.install_failures.extend(to_set(names));
        self
    }

    pub fn unprivileged(mut self) -> Self {
        self.privileged = false;
        self
    }

    pub fn index_queries(&self) -> Vec<String> {
        self.index_queries.borrow().clone()
    }

    pub fn database_queries(&self) -> Vec<String> {
        self.database_queries.borrow().clone()
    }

    pub fn install_calls(&self) -> Vec<String> {
        self.install_calls.borrow().clone()
    }

    pub fn privilege_checks(&self) -> usize {
        self.privilege_checks.get()
    }

    pub fn last_escalation(&self) -> Option<Escalation> {
        self.last_escalation.get()
    }
}

impl PackageIndex for FakeBackend {
    fn availability(&self, name: &PackageName) -> Availability {
        self.index_queries.borrow_mut().push(name.to_string());
        if self.index_failures.contains(name.as_str()) {
            Availability::QueryFailed("index unreachable".to_string())
        } else if self.missing.contains(name.as_str()) {
            Availability::Missing
        } else {
            Availability::Available
        }
    }
}

impl PackageDatabase for FakeBackend {
    fn is_installed(&self, name: &PackageName) -> bool {
        self.database_queries.borrow_mut().push(name.to_string());
        self.installed.borrow().contains(name.as_str())
    }
}

impl PackageInstaller for FakeBackend {
    fn install(
        &self,
        name: &PackageName,
        escalation: Escalation,
    ) -> std::result::Result<(), String> {
        self.install_calls.borrow_mut().push(name.to_string());
        self.last_escalation.set(Some(escalation));
        if self.install_failures.contains(name.as_str()) {
            return Err(format!("unable to install {name}"));
        }
        self.installed.borrow_mut().insert(name.to_string());
        Ok(())
    }
}

impl PrivilegeCheck for FakeBackend {
    fn ensure_privileged(&self) -> Result<Escalation> {
        self.privilege_checks.set(self.privilege_checks.get() + 1);
        if self.privileged {
            Ok(Escalation::None)
        } else {
            Err(precondition::insufficient_privilege("not root"))
        }
    }
}
