//! Package reconciliation
//!
//! Drives the local system towards the declared package list:
//! 1. Check that every package exists upstream (unless skipped)
//! 2. Detect which packages are already installed
//! 3. Plan the remaining packages, keeping list order
//! 4. Confirm privileges, then install the plan one package at a time,
//!    stopping at the first failure
//!
//! Running again after a successful run finds everything installed and
//! does nothing.

pub mod availability;
pub mod execution;
pub mod plan;

pub use availability::check_availability;
pub use execution::{InstallResult, execute_plan};
pub use plan::{InstallPlan, compute_plan, detect_installed};

use crate::backend::{PackageDatabase, PackageIndex, PackageInstaller, PrivilegeCheck};
use crate::config::{PackageList, PackageName, ReconcileOptions};
use crate::error::{Result, install};
use crate::ui::ProgressReporter;

/// What a reconciliation run found and did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Packages that were installed before the run
    pub already_installed: Vec<PackageName>,
    /// Packages that needed installing
    pub plan: InstallPlan,
    /// Install outcomes, empty for dry runs and empty plans
    pub results: Vec<InstallResult>,
    pub dry_run: bool,
}

impl ReconcileReport {
    /// Number of packages installed by this run
    pub fn installed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_failed()).count()
    }
}

/// Reconciles a package list against the system through the backend traits
pub struct Reconciler<'a> {
    index: &'a dyn PackageIndex,
    database: &'a dyn PackageDatabase,
    installer: &'a dyn PackageInstaller,
    privilege: &'a dyn PrivilegeCheck,
    options: ReconcileOptions,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler using one backend for every capability
    pub fn new<B>(backend: &'a B, options: ReconcileOptions) -> Self
    where
        B: PackageIndex + PackageDatabase + PackageInstaller + PrivilegeCheck,
    {
        Self {
            index: backend,
            database: backend,
            installer: backend,
            privilege: backend,
            options,
        }
    }

    /// Run a full reconciliation
    ///
    /// Returns an error for unavailable packages, missing privileges, or the
    /// first package that fails to install.
    pub fn run(
        &self,
        list: &PackageList,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ReconcileReport> {
        if self.options.skip_availability_check {
            tracing::info!("skipping availability check");
        } else {
            let available = check_availability(list, self.index, progress)?;
            tracing::debug!(count = available.len(), "all packages available");
        }

        let installed = detect_installed(list, self.database, progress);
        let plan = compute_plan(list, &installed);
        let already_installed = list
            .iter()
            .filter(|name| installed.contains(name))
            .cloned()
            .collect();
        tracing::debug!(
            installed = installed.len(),
            planned = plan.len(),
            "computed install plan"
        );

        let mut report = ReconcileReport {
            already_installed,
            plan,
            results: Vec::new(),
            dry_run: self.options.dry_run,
        };

        if self.options.dry_run || report.plan.is_empty() {
            return Ok(report);
        }

        let escalation = self.privilege.ensure_privileged()?;
        report.results = execute_plan(&report.plan, self.installer, escalation, progress);

        if let Some(InstallResult::Failed { name, reason }) = report.results.last() {
            return Err(install::failed(
                name.as_str(),
                reason.as_str(),
                report.installed_count(),
            ));
        }

        Ok(report)
    }
}
