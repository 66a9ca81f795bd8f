//! CLI entry point - the composition root.
//!
//! Prints the resolved launcher on stdout. Configuration errors are reported on
//! stderr and mapped to a sysexits-style exit code.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chplenv_cli::{Cli, CliConfig, bootstrap, handlers};

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries only the launcher name
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let result = bootstrap(&CliConfig::from(&cli)).and_then(|ctx| {
        handlers::launcher::execute(&ctx, &mut io::stdout().lock(), &mut io::stderr().lock())
    });

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(exit_code = err.exit_code(), "Launcher resolution failed");
            eprintln!("Error: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
