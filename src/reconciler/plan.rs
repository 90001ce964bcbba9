//! Installed-state detection and install planning

use std::collections::HashSet;

use crate::backend::PackageDatabase;
use crate::config::{PackageList, PackageName};
use crate::ui::ProgressReporter;

/// Packages from the list that are already installed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledSet {
    packages: HashSet<PackageName>,
}

impl InstalledSet {
    pub fn contains(&self, name: &PackageName) -> bool {
        self.packages.contains(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }
}

impl FromIterator<PackageName> for InstalledSet {
    fn from_iter<T: IntoIterator<Item = PackageName>>(iter: T) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}

/// Packages that still need installing, in list order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    packages: Vec<PackageName>,
}

impl InstallPlan {
    pub fn iter(&self) -> std::slice::Iter<'_, PackageName> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<'a> IntoIterator for &'a InstallPlan {
    type Item = &'a PackageName;
    type IntoIter = std::slice::Iter<'a, PackageName>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}

/// Query the local database once per package
pub fn detect_installed(
    list: &PackageList,
    database: &dyn PackageDatabase,
    progress: &mut dyn ProgressReporter,
) -> InstalledSet {
    progress.start_phase("Detecting installed", list.len());
    let installed = list
        .iter()
        .filter(|name| {
            let installed = database.is_installed(name);
            tracing::debug!(package = %name, installed, "installed state");
            progress.advance(name.as_str());
            installed
        })
        .cloned()
        .collect();
    progress.finish_phase();
    installed
}

/// `list` minus `installed`, keeping the order of `list`
pub fn compute_plan(list: &PackageList, installed: &InstalledSet) -> InstallPlan {
    InstallPlan {
        packages: list
            .iter()
            .filter(|name| !installed.contains(name))
            .cloned()
            .collect(),
    }
}
