//! Sync command implementation
//!
//! The sync process:
//! 1. Load the package list
//! 2. Check that the required tools can be run
//! 3. Reconcile: availability check, installed-state detection, plan, install
//! 4. Print a summary

use crate::backend::AptBackend;
use crate::config::{PackageList, Settings};
use crate::error::Result;
use crate::reconciler::Reconciler;
use crate::ui::InteractiveProgressReporter;
use crate::ui::display;

/// Run the sync command
pub fn run(settings: &Settings) -> Result<()> {
    let list = PackageList::load(&settings.package_file)?;
    if list.is_empty() {
        display::print_nothing_to_do();
        return Ok(());
    }

    let options = settings.options;
    let backend = AptBackend::new();
    backend.ensure_tools(!options.skip_availability_check, !options.dry_run)?;

    let mut progress = InteractiveProgressReporter::new();
    let report = Reconciler::new(&backend, options).run(&list, &mut progress)?;
    display::print_summary(&report);

    Ok(())
}
