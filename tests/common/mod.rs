//! Common test utilities for pkgsync integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory to run pkgsync in
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write the default package file
    pub fn write_packages(&self, content: &str) {
        self.write_file("packages.yaml", content);
    }

    /// Names of the entries in the workspace root, sorted
    pub fn entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = std::fs::read_dir(&self.path)
            .expect("Failed to read workspace")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        entries.sort();
        entries
    }
}

/// pkgsync command with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn pkgsync_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pkgsync").expect("pkgsync binary");
    cmd.env_remove("PKGSYNC_FILE").env_remove("RUST_LOG");
    cmd
}

/// pkgsync command running inside `workspace`
pub fn pkgsync_cmd_for_workspace(workspace: &TestWorkspace) -> Command {
    let mut cmd = pkgsync_cmd();
    cmd.current_dir(&workspace.path);
    cmd
}
