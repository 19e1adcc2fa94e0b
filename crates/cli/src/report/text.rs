// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable text output.

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::config::defaults;
use crate::outcome::{RunMode, RunSummary, TestResult};

use super::{Reporter, millis};

const SEPARATOR: &str = "==========================================";
const SUB_SEPARATOR: &str = "------------------------------------------";

/// Text reporter writing progress lines and a summary block.
pub struct TextReporter<W> {
    out: W,
    slow_factor: f64,
}

impl<W: WriteColor> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, slow_factor: defaults::SLOW_FACTOR }
    }

    /// Multiple of the average duration above which a test is called out as slow.
    pub fn with_slow_factor(mut self, slow_factor: f64) -> Self {
        self.slow_factor = slow_factor;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `text` in `spec`, then reset.
    fn colored(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_totals(&mut self, summary: &RunSummary) -> io::Result<()> {
        let stats = &summary.stats;
        writeln!(self.out, "Total Tests: {}", stats.total)?;
        writeln!(self.out, "Passed: {}", stats.passed)?;
        writeln!(self.out, "Failed: {}", stats.failed)?;
        if summary.mode == RunMode::Harness {
            writeln!(self.out, "Skipped: {}", stats.skipped)?;
        }
        writeln!(self.out, "Pass Rate: {:.1}%", summary.pass_rate())?;
        writeln!(self.out, "Total Time: {} ms", millis(stats.total_time))?;
        writeln!(self.out, "Total Test Time: {} ms", millis(summary.total_test_time()))?;
        writeln!(self.out, "Average Time per Test: {} ms", millis(summary.average_time()))?;
        writeln!(self.out, "Overhead Time: {} ms", millis(summary.overhead_time()))
    }

    fn write_passed(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.stats.passed == 0 {
            return Ok(());
        }
        self.out.set_color(&scheme::pass())?;
        writeln!(self.out, "\n[PASSED TESTS] {} tests", summary.stats.passed)?;
        writeln!(self.out, "{}", SUB_SEPARATOR)?;
        for result in summary.passed() {
            write_entry(&mut self.out, '+', result)?;
        }
        self.out.reset()
    }

    fn write_failed(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.stats.failed == 0 {
            return Ok(());
        }
        self.out.set_color(&scheme::fail())?;
        writeln!(self.out, "\n[FAILED TESTS] {} tests", summary.stats.failed)?;
        writeln!(self.out, "{}", SUB_SEPARATOR)?;
        for result in summary.failed() {
            write_entry(&mut self.out, 'x', result)?;
            writeln!(self.out, "  Error: {}", result.error_message())?;
        }
        self.out.reset()
    }

    fn write_skipped(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.skipped.is_empty() {
            return Ok(());
        }
        self.out.set_color(&scheme::skip())?;
        writeln!(self.out, "\n[SKIPPED TESTS] {} tests", summary.skipped.len())?;
        writeln!(self.out, "{}", SUB_SEPARATOR)?;
        for skipped in &summary.skipped {
            if skipped.reason.is_empty() {
                writeln!(self.out, "~ {}", skipped.name)?;
            } else {
                writeln!(self.out, "~ {}: {}", skipped.name, skipped.reason)?;
            }
        }
        self.out.reset()
    }

    fn write_performance(&mut self, summary: &RunSummary) -> io::Result<()> {
        let (Some(slowest), Some(fastest)) = (summary.slowest(), summary.fastest()) else {
            return Ok(());
        };

        writeln!(self.out, "\n[PERFORMANCE ANALYSIS]")?;
        writeln!(self.out, "{}", SUB_SEPARATOR)?;

        self.out.set_color(&scheme::skip())?;
        writeln!(self.out, "Slowest Test: {} ({} ms)", slowest.name, millis(slowest.duration))?;
        writeln!(self.out, "Fastest Test: {} ({} ms)", fastest.name, millis(fastest.duration))?;
        writeln!(self.out, "Average Time: {} ms", millis(summary.average_time()))?;

        let slow = summary.slow_tests(self.slow_factor);
        if !slow.is_empty() {
            let percent = (self.slow_factor - 1.0) * 100.0;
            writeln!(self.out, "\nTests Significantly Above Average (>{:.0}%):", percent)?;
            for result in slow {
                write_entry(&mut self.out, '-', result)?;
            }
        }
        self.out.reset()
    }
}

/// `<marker> name (N ms) - description`
fn write_entry(out: &mut impl Write, marker: char, result: &TestResult) -> io::Result<()> {
    write!(out, "{} {} ({} ms)", marker, result.name, millis(result.duration))?;
    if !result.description.is_empty() {
        write!(out, " - {}", result.description)?;
    }
    writeln!(out)
}

impl<W: WriteColor> Reporter for TextReporter<W> {
    fn run_started(&mut self, total: usize) -> io::Result<()> {
        self.colored(&scheme::banner(), &format!("\n[==========] Running {} tests\n", total))
    }

    fn test_started(&mut self, name: &str, description: &str) -> io::Result<()> {
        let mut line = format!("\n[ RUN      ] {}", name);
        if !description.is_empty() {
            line.push_str(" - ");
            line.push_str(description);
        }
        line.push('\n');
        self.colored(&scheme::banner(), &line)
    }

    fn test_finished(&mut self, result: &TestResult) -> io::Result<()> {
        if result.success {
            let line = format!("[       OK ] {} ({} ms)\n", result.name, millis(result.duration));
            return self.colored(&scheme::pass(), &line);
        }
        let line =
            format!("[  FAILED  ] {}\nError: {}\n", result.name, result.error_message());
        self.colored(&scheme::fail(), &line)
    }

    fn test_skipped(&mut self, name: &str, reason: &str) -> io::Result<()> {
        self.colored(&scheme::skip(), &format!("[  SKIPPED ] {}: {}\n", name, reason))
    }

    fn run_finished(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out, "\n\n{}", SEPARATOR)?;
        writeln!(self.out, "                 Test Summary")?;
        writeln!(self.out, "{}\n", SEPARATOR)?;

        self.write_totals(summary)?;
        self.write_passed(summary)?;
        self.write_failed(summary)?;
        self.write_skipped(summary)?;
        if summary.mode == RunMode::Range {
            self.write_performance(summary)?;
        }

        writeln!(self.out, "\n{}", SEPARATOR)?;
        writeln!(self.out, "                    End")?;
        writeln!(self.out, "{}\n", SEPARATOR)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
