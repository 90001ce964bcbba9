//! CLI integration tests using the REAL pkgsync binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    common::pkgsync_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-check"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("packages:"));
}

#[test]
fn test_help_spellings_succeed_without_side_effects() {
    for spelling in ["-h", "--help", "help"] {
        let workspace = common::TestWorkspace::new();
        workspace.write_packages("packages: [curl]\n");

        common::pkgsync_cmd_for_workspace(&workspace)
            .arg(spelling)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));

        assert_eq!(workspace.entries(), vec!["packages.yaml"]);
    }
}

#[test]
fn test_help_ignores_missing_package_file() {
    let workspace = common::TestWorkspace::new();

    common::pkgsync_cmd_for_workspace(&workspace)
        .arg("help")
        .assert()
        .success();
}

#[test]
fn test_version_output() {
    common::pkgsync_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pkgsync"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    common::pkgsync_cmd()
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn test_file_flag_requires_value() {
    common::pkgsync_cmd()
        .arg("--file")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("a value is required"));
}

#[test]
fn test_unexpected_positional_is_usage_error() {
    common::pkgsync_cmd()
        .arg("curl")
        .assert()
        .failure()
        .code(2);
}
