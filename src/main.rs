//! pkgsync - package reconciler
//!
//! Reads a YAML list of package names and installs the ones that are not
//! installed yet, stopping at the first package that fails.

use miette::Diagnostic;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod backend;
mod cli;
mod commands;
mod config;
mod error;
mod reconciler;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use config::Settings;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "pkgsync=debug" } else { "pkgsync=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse_with_help_word();
    init_tracing(cli.verbose);

    let settings = Settings::from(&cli);
    tracing::debug!(?settings, "starting");

    if let Err(e) = commands::sync::run(&settings) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
