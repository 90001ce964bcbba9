//! CLI definitions using clap derive API

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

use crate::config::DEFAULT_PACKAGE_FILE;

/// pkgsync - package reconciler
///
/// Install every package listed in a YAML file that is not installed yet.
#[derive(Parser, Debug)]
#[command(
    name = "pkgsync",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install the packages listed in a YAML file",
    long_about = "pkgsync reads a list of package names from a YAML file, checks that each one \
                  exists in the apt package index, and installs the ones that are missing, \
                  one at a time and in list order. It stops at the first package that fails \
                  to install.",
    after_help = "\x1b[1m\x1b[32mPackage file:\x1b[0m\n    \
                  packages:\n      \
                  - curl\n      \
                  - wget\n\n\
                  \x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pkgsync\n    \
                  pkgsync --file provisioning/packages.yaml\n    \
                  pkgsync --dry-run\n    \
                  pkgsync --skip-check"
)]
pub struct Cli {
    /// Package file to read
    #[arg(
        long,
        short = 'f',
        value_name = "PATH",
        env = "PKGSYNC_FILE",
        default_value = DEFAULT_PACKAGE_FILE
    )]
    pub file: PathBuf,

    /// Skip the package index check. Unknown packages then only fail during
    /// installation, possibly after earlier packages were already installed.
    #[arg(long, short = 's')]
    pub skip_check: bool,

    /// Show what would be installed without installing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Parse arguments, accepting a bare `help` word as a help request
    pub fn parse_with_help_word() -> Self {
        Self::parse_from(normalize_help_word(std::env::args_os()))
    }
}

/// Rewrite a leading `help` argument to `--help`.
///
/// `-h` and `--help` are handled by clap itself.
pub fn normalize_help_word<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.get(1).is_some_and(|arg| arg == "help") {
        args[1] = OsString::from("--help");
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::try_parse_from(["pkgsync"]).unwrap();
        assert!(!cli.skip_check);
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_file_default_and_env() {
        let command = Cli::command();
        let file = command
            .get_arguments()
            .find(|arg| arg.get_id() == "file")
            .unwrap();
        let defaults: Vec<_> = file
            .get_default_values()
            .iter()
            .map(|value| value.to_string_lossy().into_owned())
            .collect();
        assert_eq!(defaults, [DEFAULT_PACKAGE_FILE]);
        assert_eq!(file.get_env(), Some(OsStr::new("PKGSYNC_FILE")));
    }

    #[test]
    fn test_cli_parsing_with_options() {
        let cli = Cli::try_parse_from([
            "pkgsync",
            "--file",
            "/tmp/packages.yaml",
            "--skip-check",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("/tmp/packages.yaml"));
        assert!(cli.skip_check);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_short_options() {
        let cli = Cli::try_parse_from(["pkgsync", "-s", "-n", "-f", "pkgs.yaml"]).unwrap();
        assert!(cli.skip_check);
        assert!(cli.dry_run);
        assert_eq!(cli.file, PathBuf::from("pkgs.yaml"));
    }

    #[test]
    fn test_cli_file_requires_value() {
        let err = Cli::try_parse_from(["pkgsync", "--file"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_cli_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["pkgsync", "--frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_help_spellings() {
        for spelling in ["-h", "--help", "help"] {
            let args = normalize_help_word(["pkgsync", spelling]);
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "spelling: {spelling}");
        }
    }

    #[test]
    fn test_normalize_only_touches_first_argument() {
        let args = normalize_help_word(["pkgsync", "--file", "help"]);
        assert_eq!(args[2], OsString::from("help"));
    }
}
