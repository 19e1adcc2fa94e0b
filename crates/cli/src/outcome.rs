// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test outcomes, results, and run statistics.

use std::time::Duration;

/// Message for a failure that carries no description.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Message for a harness test whose precondition returned false.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Message for a range item whose predicate returned false.
pub const TEST_FAILED: &str = "Test failed";

/// Message for an expected-to-fail range item whose predicate returned true.
pub const UNEXPECTEDLY_PASSED: &str = "Test unexpectedly passed";

/// Why a test failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// An assertion helper inside a harness action failed.
    Assertion,
    /// A harness precondition returned false; the action never ran.
    Validation,
    /// Any other error or panic raised while evaluating the test.
    Unexpected,
    /// A range predicate returned false.
    PredicateFalse,
    /// A range predicate returned true for an item expected to fail.
    UnexpectedPass,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Assertion => "assertion",
            FailureKind::Validation => "validation",
            FailureKind::Unexpected => "unexpected",
            FailureKind::PredicateFalse => "predicate_false",
            FailureKind::UnexpectedPass => "unexpected_pass",
        }
    }
}

/// A structured test failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn validation() -> Self {
        Self::new(FailureKind::Validation, VALIDATION_FAILED)
    }

    /// An unexpected error, falling back to [`UNKNOWN_ERROR`] for an empty description.
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::new(FailureKind::Unexpected, UNKNOWN_ERROR)
        } else {
            Self::new(FailureKind::Unexpected, message)
        }
    }
}

/// Outcome of evaluating one test.
pub type Outcome = Result<(), Failure>;

/// Result of one executed test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    pub name: String,
    pub success: bool,
    /// Failure message; empty on success.
    pub error: String,
    pub duration: Duration,
    pub was_expected_to_fail: bool,
    pub description: String,
    pub failure: Option<Failure>,
}

impl TestResult {
    /// Create a passing result.
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self::from_outcome(name, Ok(()), duration)
    }

    /// Create a failing result.
    pub fn failed(name: impl Into<String>, duration: Duration, failure: Failure) -> Self {
        Self::from_outcome(name, Err(failure), duration)
    }

    pub fn from_outcome(name: impl Into<String>, outcome: Outcome, duration: Duration) -> Self {
        let (success, error, failure) = match outcome {
            Ok(()) => (true, String::new(), None),
            Err(failure) => (false, failure.message.clone(), Some(failure)),
        };
        Self {
            name: name.into(),
            success,
            error,
            duration,
            was_expected_to_fail: false,
            description: String::new(),
            failure,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_expected_to_fail(mut self, expected_to_fail: bool) -> Self {
        self.was_expected_to_fail = expected_to_fail;
        self
    }

    /// Failure message for display, never empty for a failed test.
    pub fn error_message(&self) -> &str {
        if self.error.is_empty() { UNKNOWN_ERROR } else { &self.error }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(|f| f.kind)
    }
}

/// A harness test tallied as skipped without running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTest {
    pub name: String,
    pub reason: String,
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestStatistics {
    /// Number of eligible (executed) tests.
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Wall-clock span of the whole run.
    pub total_time: Duration,
}

impl TestStatistics {
    /// Fold executed results plus the skip tally into counters.
    pub fn from_results(results: &[TestResult], skipped: usize, total_time: Duration) -> Self {
        let passed = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            skipped,
            total_time,
        }
    }
}

/// Which facility produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Range,
    Harness,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Range => "range",
            RunMode::Harness => "harness",
        }
    }
}

/// Everything a run produced, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub mode: RunMode,
    pub results: Vec<TestResult>,
    pub skipped: Vec<SkippedTest>,
    pub stats: TestStatistics,
}

impl RunSummary {
    pub fn new(
        mode: RunMode,
        results: Vec<TestResult>,
        skipped: Vec<SkippedTest>,
        total_time: Duration,
    ) -> Self {
        let stats = TestStatistics::from_results(&results, skipped.len(), total_time);
        Self { mode, results, skipped, stats }
    }

    /// True when every eligible test passed.
    pub fn all_passed(&self) -> bool {
        self.stats.passed == self.stats.total
    }

    /// Process exit status: non-zero iff at least one test failed.
    pub fn exit_code(&self) -> i32 {
        if self.stats.failed > 0 { 1 } else { 0 }
    }

    pub fn passed(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.success)
    }

    pub fn failed(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| !r.success)
    }

    /// Sum of individual test durations.
    pub fn total_test_time(&self) -> Duration {
        self.results.iter().map(|r| r.duration).sum()
    }

    /// Mean test duration, zero when nothing ran.
    pub fn average_time(&self) -> Duration {
        if self.results.is_empty() {
            return Duration::ZERO;
        }
        let nanos = self.total_test_time().as_nanos() / self.results.len() as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Time spent outside of test bodies.
    pub fn overhead_time(&self) -> Duration {
        self.stats.total_time.saturating_sub(self.total_test_time())
    }

    /// Percentage of executed tests that passed.
    pub fn pass_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.stats.passed as f64 / self.results.len() as f64 * 100.0
    }

    /// Longest-running test; the last one wins ties.
    pub fn slowest(&self) -> Option<&TestResult> {
        self.results.iter().max_by_key(|r| r.duration)
    }

    /// Shortest-running test; the first one wins ties.
    pub fn fastest(&self) -> Option<&TestResult> {
        self.results.iter().min_by_key(|r| r.duration)
    }

    /// Tests whose duration exceeds `factor` times the average.
    pub fn slow_tests(&self, factor: f64) -> Vec<&TestResult> {
        let threshold = self.average_time().as_nanos() as f64 * factor;
        self.results.iter().filter(|r| r.duration.as_nanos() as f64 > threshold).collect()
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
