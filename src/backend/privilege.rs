//! Privilege detection
//!
//! Root installs directly. Anyone else needs working `sudo` credentials,
//! validated once with `sudo -v` before the first install.

use std::process::Command;

use crate::backend::Escalation;
use crate::error::{Result, precondition};

/// Determine how installs can be run, or fail if they cannot
pub fn detect() -> Result<Escalation> {
    if is_root() {
        tracing::debug!("running as root");
        return Ok(Escalation::None);
    }

    tracing::debug!("not running as root, validating sudo credentials");
    let status = Command::new("sudo").arg("-v").status().map_err(|e| {
        precondition::insufficient_privilege(format!(
            "not running as root and sudo could not be run: {e}"
        ))
    })?;

    if status.success() {
        Ok(Escalation::Sudo)
    } else {
        Err(precondition::insufficient_privilege(
            "not running as root and sudo refused to validate credentials",
        ))
    }
}

#[cfg(unix)]
fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn is_root() -> bool {
    false
}
