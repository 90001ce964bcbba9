//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while probing the package index and database
//! - Styled plan and summary output (see [`display`])
//!
//! All progress reporting goes through the [`ProgressReporter`] trait, so the
//! reconciler does not care whether bars are drawn or not.

pub mod display;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for the probing phases of a run
pub trait ProgressReporter {
    /// Start a new phase covering `total` packages
    fn start_phase(&mut self, label: &str, total: usize);

    /// Mark one package of the current phase as done
    fn advance(&mut self, package: &str);

    /// Finish the current phase
    fn finish_phase(&mut self);

    /// Abandon on error
    fn abandon(&mut self);

    /// An install is about to start (`current` is 1-based)
    fn install_started(&mut self, package: &str, current: usize, total: usize);

    /// An install has finished
    fn install_finished(&mut self, package: &str, success: bool);
}

/// Interactive progress reporter with visual progress bars
///
/// indicatif draws to stderr and stays hidden when stderr is not a terminal.
#[derive(Default)]
pub struct InteractiveProgressReporter {
    phase_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_phase(&mut self, label: &str, total: usize) {
        self.finish_phase();
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::style());
        pb.set_prefix(label.to_string());
        self.phase_pb = Some(pb);
    }

    fn advance(&mut self, package: &str) {
        if let Some(ref pb) = self.phase_pb {
            pb.set_message(package.to_string());
            pb.inc(1);
        }
    }

    fn finish_phase(&mut self) {
        if let Some(pb) = self.phase_pb.take() {
            pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(pb) = self.phase_pb.take() {
            pb.abandon();
        }
    }

    // apt-get writes to the terminal during installs, so no bar here.
    fn install_started(&mut self, package: &str, current: usize, total: usize) {
        self.finish_phase();
        display::print_install_started(package, current, total);
    }

    fn install_finished(&mut self, package: &str, success: bool) {
        display::print_install_finished(package, success);
    }
}

/// Silent progress reporter
///
/// No-op implementation used by tests.
#[cfg(test)]
#[derive(Default)]
pub struct SilentProgressReporter;

#[cfg(test)]
impl ProgressReporter for SilentProgressReporter {
    fn start_phase(&mut self, _label: &str, _total: usize) {}

    fn advance(&mut self, _package: &str) {}

    fn finish_phase(&mut self) {}

    fn abandon(&mut self) {}

    fn install_started(&mut self, _package: &str, _current: usize, _total: usize) {}

    fn install_finished(&mut self, _package: &str, _success: bool) {}
}
