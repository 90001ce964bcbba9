//! Sequential, fail-stop plan execution

use crate::backend::{Escalation, PackageInstaller};
use crate::config::PackageName;
use crate::reconciler::plan::InstallPlan;
use crate::ui::ProgressReporter;

/// Outcome of installing one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallResult {
    Installed(PackageName),
    Failed { name: PackageName, reason: String },
}

impl InstallResult {
    pub fn name(&self) -> &PackageName {
        match self {
            InstallResult::Installed(name) | InstallResult::Failed { name, .. } => name,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, InstallResult::Failed { .. })
    }
}

/// Install the plan one package at a time, in order
///
/// Stops at the first failure: the returned results then end with that
/// `Failed` entry and the remaining packages were never attempted.
pub fn execute_plan(
    plan: &InstallPlan,
    installer: &dyn PackageInstaller,
    escalation: Escalation,
    progress: &mut dyn ProgressReporter,
) -> Vec<InstallResult> {
    let total = plan.len();
    let mut results = Vec::with_capacity(total);

    for (i, name) in plan.iter().enumerate() {
        progress.install_started(name.as_str(), i + 1, total);
        match installer.install(name, escalation) {
            Ok(()) => {
                tracing::info!(package = %name, "installed");
                progress.install_finished(name.as_str(), true);
                results.push(InstallResult::Installed(name.clone()));
            }
            Err(reason) => {
                tracing::error!(package = %name, %reason, "install failed");
                progress.install_finished(name.as_str(), false);
                results.push(InstallResult::Failed {
                    name: name.clone(),
                    reason,
                });
                break;
            }
        }
    }

    results
}
