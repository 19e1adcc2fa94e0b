// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trial::cli::Cli;

mod cmd_run;
mod demo;

/// Exit status for usage and configuration errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_run::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("trial: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Log to stderr. `TRIAL_LOG` sets the filter; `--verbose` forces debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("TRIAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
