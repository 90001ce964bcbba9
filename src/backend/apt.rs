//! apt/dpkg backend
//!
//! - `apt-cache show <name>` answers index queries
//! - `dpkg-query -W --showformat=${Status} <name>` answers installed-state queries
//! - `apt-get install -y <name>` installs, optionally through `sudo`
//!
//! Every command runs with `LC_ALL=C` so that the English messages and
//! status strings matched below are what the tools print.

use std::io;
use std::process::{Command, Output, Stdio};

use crate::backend::{
    Availability, Escalation, PackageDatabase, PackageIndex, PackageInstaller, PrivilegeCheck,
    privilege,
};
use crate::config::PackageName;
use crate::error::{Result, precondition};

/// Locale the tools run under
const LOCALE: &str = "C";

const APT_CACHE: &str = "apt-cache";
const DPKG_QUERY: &str = "dpkg-query";
const APT_GET: &str = "apt-get";

/// dpkg status of a fully installed package
const INSTALLED_STATUS: &str = "install ok installed";

/// Backend driving the Debian package tools
#[derive(Debug, Default, Clone, Copy)]
pub struct AptBackend;

impl AptBackend {
    pub fn new() -> Self {
        Self
    }

    /// Check that every tool needed for this run can be executed
    ///
    /// `apt-cache` is only needed for the availability check and `apt-get`
    /// only when actually installing.
    pub fn ensure_tools(&self, availability_check: bool, installing: bool) -> Result<()> {
        check_tools(&required_tools(availability_check, installing))
    }
}

/// Tools a run needs, in probe order
fn required_tools(availability_check: bool, installing: bool) -> Vec<&'static str> {
    let mut tools = Vec::new();
    if availability_check {
        tools.push(APT_CACHE);
    }
    tools.push(DPKG_QUERY);
    if installing {
        tools.push(APT_GET);
    }
    tools
}

fn check_tools(tools: &[&str]) -> Result<()> {
    for &tool in tools {
        probe_tool(tool).map_err(|e| precondition::tool_unavailable(tool, e.to_string()))?;
    }
    Ok(())
}

fn probe_tool(tool: &str) -> io::Result<()> {
    tracing::debug!(tool, "probing tool");
    Command::new(tool)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|_| ())
}

/// Command for a query whose output gets parsed
fn query_command(program: &str, args: &[&str]) -> Command {
    let mut command = Command::new(program);
    command
        .args(args)
        .env("LC_ALL", LOCALE)
        .stdin(Stdio::null());
    command
}

fn capture(program: &str, args: &[&str]) -> io::Result<Output> {
    tracing::debug!(program, ?args, "running");
    query_command(program, args).output()
}

fn install_command(name: &PackageName, escalation: Escalation) -> Command {
    let mut command = match escalation {
        Escalation::None => {
            let mut command = Command::new(APT_GET);
            command
                .env("DEBIAN_FRONTEND", "noninteractive")
                .env("LC_ALL", LOCALE);
            command
        }
        Escalation::Sudo => {
            // sudo resets the environment, so pass the variables through env(1).
            let mut command = Command::new("sudo");
            command.args([
                "env",
                "DEBIAN_FRONTEND=noninteractive",
                "LC_ALL=C",
                APT_GET,
            ]);
            command
        }
    };
    command.args(["install", "-y", name.as_str()]);
    command
}

/// Interpret the result of `apt-cache show`
///
/// apt-cache exits non-zero both for unknown packages and for broken
/// indexes, so stderr decides which one it was.
fn classify_index_output(success: bool, stdout: &str, stderr: &str) -> Availability {
    if success && !stdout.trim().is_empty() {
        return Availability::Available;
    }
    if success || stderr.contains("No packages found") || stderr.contains("Unable to locate") {
        return Availability::Missing;
    }
    let reason = stderr.trim();
    if reason.is_empty() {
        Availability::QueryFailed("apt-cache exited with an error".to_string())
    } else {
        Availability::QueryFailed(reason.to_string())
    }
}

/// Whether a `dpkg-query --showformat=${Status}` answer means "installed"
fn is_installed_status(status: &str) -> bool {
    status.trim() == INSTALLED_STATUS
}

/// Interpret the result of `dpkg-query`
///
/// dpkg-query exits non-zero for packages it has never heard of.
fn classify_status(result: io::Result<Output>, name: &PackageName) -> bool {
    match result {
        Ok(output) if output.status.success() => {
            is_installed_status(&String::from_utf8_lossy(&output.stdout))
        }
        Ok(_) => false,
        Err(e) => {
            tracing::warn!(
                package = %name,
                error = %e,
                "dpkg-query failed, treating package as not installed"
            );
            false
        }
    }
}

impl PackageIndex for AptBackend {
    fn availability(&self, name: &PackageName) -> Availability {
        match capture(APT_CACHE, &["show", name.as_str()]) {
            Ok(output) => classify_index_output(
                output.status.success(),
                &String::from_utf8_lossy(&output.stdout),
                &String::from_utf8_lossy(&output.stderr),
            ),
            Err(e) => Availability::QueryFailed(format!("failed to run {APT_CACHE}: {e}")),
        }
    }
}

impl PackageDatabase for AptBackend {
    fn is_installed(&self, name: &PackageName) -> bool {
        let result = capture(DPKG_QUERY, &["-W", "--showformat=${Status}", name.as_str()]);
        classify_status(result, name)
    }
}

impl PackageInstaller for AptBackend {
    fn install(
        &self,
        name: &PackageName,
        escalation: Escalation,
    ) -> std::result::Result<(), String> {
        tracing::debug!(package = %name, ?escalation, "installing");
        let status = install_command(name, escalation)
            .status()
            .map_err(|e| format!("failed to run {APT_GET}: {e}"))?;

        if status.success() {
            Ok(())
        } else {
            match status.code() {
                Some(code) => Err(format!("{APT_GET} exited with status {code}")),
                None => Err(format!("{APT_GET} was terminated by a signal")),
            }
        }
    }
}

impl PrivilegeCheck for AptBackend {
    fn ensure_privileged(&self) -> Result<Escalation> {
        privilege::detect()
    }
}
