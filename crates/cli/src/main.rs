//! `ttlsim`: replay a timestamped log against a simulated TTL cache.
//!
//! The statistics report is the only thing written to stdout; diagnostics and
//! errors go to stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use ttlsim_core::{render_report, SimulatorError};

mod cli;
mod logging;

use cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version come through here too
            let code = if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
            let _ = err.print();
            return code;
        }
    };

    logging::init(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(sim_err) = err.downcast_ref::<SimulatorError>() {
                debug!(kind = sim_err.label(), "simulation failed");
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.to_config()?;
    let stats = ttlsim_core::run(&config)?;
    let report = render_report(&stats, config.output)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes()).context("failed to write report")?;
    stdout.flush().context("failed to write report")?;
    Ok(())
}
