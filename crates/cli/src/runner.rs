// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run coordinator.
//!
//! Drives each eligible test through its lifecycle in registration order,
//! times it, and feeds results to a [`Reporter`]. A failing test never
//! stops the ones after it, and neither does a reporter that cannot write:
//! the first write error is logged and kept, and the run goes on.

use std::io;
use std::time::Instant;

use crate::error::Result;
use crate::evaluate::{Predicate, evaluate_case, evaluate_item};
use crate::filter::TestFilter;
use crate::harness::{TestCase, TestStatus};
use crate::lifecycle::Lifecycle;
use crate::outcome::{RunMode, RunSummary, SkippedTest, TestResult};
use crate::registry::ItemRegistry;
use crate::report::Reporter;

/// What the coordinator does with a harness case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Eligible: executed and counted.
    Run,
    /// Ineligible `Skip` case: reported and tallied as skipped.
    Skip,
    /// Ineligible: silently left out.
    Omit,
}

impl Disposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Disposition::Run => "run",
            Disposition::Skip => "skip",
            Disposition::Omit => "omit",
        }
    }
}

/// Decide how a case is treated under `filter`.
///
/// Disabled cases are always omitted. Any other case runs when its full
/// name passes the filter; otherwise a `Skip` case is tallied and the rest
/// are omitted.
pub fn disposition(case: &TestCase, filter: &TestFilter) -> Disposition {
    if case.status == TestStatus::Disabled {
        return Disposition::Omit;
    }
    if filter.should_run(&case.full_name()) {
        Disposition::Run
    } else if case.status == TestStatus::Skip {
        Disposition::Skip
    } else {
        Disposition::Omit
    }
}

/// Executes runs and reports them.
pub struct Coordinator<'a> {
    reporter: &'a mut dyn Reporter,
    report_error: Option<io::Error>,
}

impl<'a> Coordinator<'a> {
    pub fn new(reporter: &'a mut dyn Reporter) -> Self {
        Self { reporter, report_error: None }
    }

    /// First write error returned by the reporter, if any.
    pub fn report_error(&self) -> Option<&io::Error> {
        self.report_error.as_ref()
    }

    fn emit<F>(&mut self, event: F)
    where
        F: FnOnce(&mut dyn Reporter) -> io::Result<()>,
    {
        if let Err(err) = event(&mut *self.reporter) {
            if self.report_error.is_none() {
                tracing::warn!("failed to write report, continuing run: {}", err);
                self.report_error = Some(err);
            } else {
                tracing::debug!("failed to write report: {}", err);
            }
        }
    }

    /// Evaluate every registry item against `predicate`.
    pub fn run_items<T>(
        &mut self,
        registry: &ItemRegistry<T>,
        predicate: &Predicate<'_, T>,
    ) -> Result<RunSummary> {
        let started = Instant::now();
        self.emit(|r| r.run_started(registry.len()));

        let mut results = Vec::with_capacity(registry.len());
        for item in registry {
            let mut lifecycle = Lifecycle::new(item.name.as_str());
            lifecycle.start()?;
            self.emit(|r| r.test_started(&item.name, &item.description));

            let timer = Instant::now();
            let outcome = evaluate_item(item, predicate);
            let duration = timer.elapsed();
            lifecycle.finish(outcome.is_ok())?;

            let result = TestResult::from_outcome(item.name.as_str(), outcome, duration)
                .with_description(item.description.as_str())
                .with_expected_to_fail(item.expected_to_fail);
            self.emit(|r| r.test_finished(&result));
            results.push(result);
        }

        self.finish(RunSummary::new(RunMode::Range, results, Vec::new(), started.elapsed()))
    }

    /// Run the harness cases eligible under `filter`.
    pub fn run_cases(&mut self, cases: &[TestCase], filter: &TestFilter) -> Result<RunSummary> {
        let started = Instant::now();
        let plan: Vec<_> = cases.iter().map(|case| (case, disposition(case, filter))).collect();
        let eligible = plan.iter().filter(|(_, d)| *d == Disposition::Run).count();
        tracing::debug!("{} of {} registered tests eligible", eligible, cases.len());
        self.emit(|r| r.run_started(eligible));

        let mut results = Vec::with_capacity(eligible);
        let mut skipped = Vec::new();
        for (case, disposition) in plan {
            let name = case.full_name();
            let mut lifecycle = Lifecycle::new(name.as_str());
            match disposition {
                Disposition::Omit => {
                    tracing::debug!("omitting {}", name);
                }
                Disposition::Skip => {
                    lifecycle.skip()?;
                    self.emit(|r| r.test_skipped(&name, &case.skip_reason));
                    skipped.push(SkippedTest { name, reason: case.skip_reason.clone() });
                }
                Disposition::Run => {
                    lifecycle.start()?;
                    self.emit(|r| r.test_started(&name, ""));

                    let timer = Instant::now();
                    let outcome = evaluate_case(case.action.as_ref(), case.precondition.as_deref());
                    let duration = timer.elapsed();
                    lifecycle.finish(outcome.is_ok())?;

                    let result = TestResult::from_outcome(name, outcome, duration);
                    self.emit(|r| r.test_finished(&result));
                    results.push(result);
                }
            }
        }

        self.finish(RunSummary::new(RunMode::Harness, results, skipped, started.elapsed()))
    }

    fn finish(&mut self, summary: RunSummary) -> Result<RunSummary> {
        tracing::debug!(
            "{} run finished: {} passed, {} failed, {} skipped",
            summary.mode.as_str(),
            summary.stats.passed,
            summary.stats.failed,
            summary.stats.skipped
        );
        self.emit(|r| r.run_finished(&summary));
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
