//! Styled output for plans and run summaries

use console::Style;

use crate::config::PackageName;
use crate::reconciler::{InstallResult, ReconcileReport};

fn join(names: &[PackageName]) -> String {
    names
        .iter()
        .map(PackageName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_install_started(package: &str, current: usize, total: usize) {
    println!(
        "{} {}",
        Style::new().dim().apply_to(format!("[{current}/{total}]")),
        Style::new().bold().apply_to(format!("Installing {package}"))
    );
}

pub fn print_install_finished(package: &str, success: bool) {
    if success {
        println!("  {} {package}", Style::new().green().apply_to("✔"));
    } else {
        eprintln!("  {} {package}", Style::new().red().apply_to("✘"));
    }
}

/// Print an empty-list notice
pub fn print_nothing_to_do() {
    println!("No packages listed. Nothing to install.");
}

/// Print what a run found and did
pub fn print_summary(report: &ReconcileReport) {
    if !report.already_installed.is_empty() {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Already installed:"),
            join(&report.already_installed)
        );
    }

    if report.plan.is_empty() {
        println!(
            "{}",
            Style::new()
                .green()
                .apply_to("All packages are installed. Nothing to do.")
        );
        return;
    }

    if report.dry_run {
        println!(
            "[DRY RUN] Would install {} package(s):",
            report.plan.len()
        );
        for name in &report.plan {
            println!("  - {}", Style::new().bold().yellow().apply_to(name));
        }
        return;
    }

    let installed: Vec<PackageName> = report
        .results
        .iter()
        .map(InstallResult::name)
        .cloned()
        .collect();
    println!(
        "{} {}",
        Style::new()
            .green()
            .apply_to(format!("Installed {} package(s):", report.installed_count())),
        join(&installed)
    );
}
