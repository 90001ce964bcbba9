//! Upstream availability check

use crate::backend::{Availability, PackageIndex};
use crate::config::{PackageList, PackageName};
use crate::error::{Result, availability};
use crate::ui::ProgressReporter;

/// Packages confirmed to exist in the package index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySet {
    packages: Vec<PackageName>,
}

impl AvailabilitySet {
    pub fn len(&self) -> usize {
        self.packages.len()
    }
}

/// Query the index once per package and fail if any package is unavailable
///
/// Every package is queried before failing so the error names all of the
/// unavailable packages at once.
pub fn check_availability(
    list: &PackageList,
    index: &dyn PackageIndex,
    progress: &mut dyn ProgressReporter,
) -> Result<AvailabilitySet> {
    let mut available = Vec::new();
    let mut missing = Vec::new();
    let mut failed = Vec::new();

    progress.start_phase("Checking availability", list.len());
    for name in list {
        match index.availability(name) {
            Availability::Available => available.push(name.clone()),
            Availability::Missing => {
                tracing::debug!(package = %name, "not found in package index");
                missing.push(name.to_string());
            }
            Availability::QueryFailed(reason) => {
                tracing::warn!(package = %name, %reason, "package index query failed");
                failed.push(name.to_string());
            }
        }
        progress.advance(name.as_str());
    }

    if missing.is_empty() && failed.is_empty() {
        progress.finish_phase();
        Ok(AvailabilitySet {
            packages: available,
        })
    } else {
        progress.abandon();
        Err(availability::unavailable(missing, failed))
    }
}
