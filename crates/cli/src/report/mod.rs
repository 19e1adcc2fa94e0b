// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run reporting.
//!
//! Reporters observe a run as it happens and render the summary at the end.
//! They only project already-computed results and never alter outcomes.

mod json;
mod text;

use std::io;

use termcolor::{ColorChoice, StandardStream};

use crate::cli::OutputFormat;
use crate::config::defaults;
use crate::outcome::{RunSummary, TestResult};

pub use json::JsonReporter;
pub use text::TextReporter;

/// Observer of a test run.
///
/// Per-test hooks default to doing nothing so that end-of-run formats only
/// implement [`Reporter::run_finished`].
pub trait Reporter {
    /// Called once before any test, with the number of eligible tests.
    fn run_started(&mut self, _total: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called immediately before a test executes.
    fn test_started(&mut self, _name: &str, _description: &str) -> io::Result<()> {
        Ok(())
    }

    /// Called immediately after a test executes.
    fn test_finished(&mut self, _result: &TestResult) -> io::Result<()> {
        Ok(())
    }

    /// Called for a harness test tallied as skipped without running.
    fn test_skipped(&mut self, _name: &str, _reason: &str) -> io::Result<()> {
        Ok(())
    }

    /// Called once after the last test.
    fn run_finished(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn run_finished(&mut self, _summary: &RunSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Build a stdout reporter for the requested format.
pub fn stdout_reporter(
    format: OutputFormat,
    color: ColorChoice,
    slow_factor: f64,
) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(
            TextReporter::new(StandardStream::stdout(color)).with_slow_factor(slow_factor),
        ),
        OutputFormat::Json => Box::new(JsonReporter::new(io::stdout())),
    }
}

/// Default stdout reporter used by `run()` convenience entry points.
pub fn default_reporter() -> Box<dyn Reporter> {
    stdout_reporter(OutputFormat::Text, ColorChoice::Auto, defaults::SLOW_FACTOR)
}

/// Format a duration as whole milliseconds.
pub fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
