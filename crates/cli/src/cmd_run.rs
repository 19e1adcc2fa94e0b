// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run command implementation.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;

use trial::cli::Cli;
use trial::config::{self, Config};
use trial::discovery;
use trial::filter::TestFilter;
use trial::harness::Harness;
use trial::report;
use trial::runner::disposition;

use crate::demo;

/// Run the demo harness and range testers.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;

    // Config, then environment, then flags.
    let filter = TestFilter::from_config(&config.filter)
        .merge(TestFilter::from_env())
        .merge(cli_filter(cli));

    let harness = demo::harness(cli.with_failures);
    if cli.list {
        list(&harness, &filter)?;
        return Ok(ExitCode::SUCCESS);
    }

    let color = cli.color.unwrap_or(config.report.color).resolve(cli.no_color);
    let mut reporter = report::stdout_reporter(cli.output, color, config.report.slow_factor);

    let mut all_passed = true;
    if cli.facility.includes_harness() {
        let summary = harness.run(&filter, reporter.as_mut())?;
        all_passed &= summary.all_passed();
    }
    if cli.facility.includes_range() {
        all_passed &= demo::run_ranges(reporter.as_mut(), cli.with_failures)?;
    }

    Ok(if all_passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            discovery::find_config(&cwd)
        }
    };
    match path {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(Config::default()),
    }
}

fn cli_filter(cli: &Cli) -> TestFilter {
    let filter = TestFilter::new().with_disabled(cli.disable.iter().cloned());
    match cli.filter.as_deref() {
        Some(pattern) if !pattern.is_empty() => filter.with_pattern(pattern),
        _ => filter,
    }
}

/// Print every registered case with its status and what a run would do.
fn list(harness: &Harness, filter: &TestFilter) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for case in harness.cases() {
        writeln!(
            out,
            "{:<40} {:<9} {}",
            case.full_name(),
            case.status.as_str(),
            disposition(case, filter).as_str()
        )?;
    }
    Ok(())
}
