// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite-based test harness.
//!
//! Tests are registered explicitly on a [`Harness`], grouped into suites,
//! and addressed by their full name `Suite.case`. Registration happens
//! before any test runs.
//!
//! ```
//! use trial::{Harness, TestFilter, ensure_eq};
//! use trial::report::SilentReporter;
//!
//! let mut harness = Harness::new();
//! harness.suite("Math", |s| {
//!     s.test("add", || {
//!         ensure_eq!(2 + 2, 4);
//!         Ok(())
//!     });
//!     s.skip("divide", "not implemented", || Ok(()));
//! });
//!
//! let summary = harness.run(&TestFilter::new(), &mut SilentReporter).unwrap();
//! assert_eq!(summary.exit_code(), 0);
//! ```

use std::fmt;

use crate::error::Result;
use crate::evaluate::{Action, CaseResult, Precondition};
use crate::filter::TestFilter;
use crate::outcome::RunSummary;
use crate::report::{self, Reporter};
use crate::runner::Coordinator;

/// Registration status of a harness case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TestStatus {
    #[default]
    Enabled,
    /// Never runs and is not reported.
    Disabled,
    /// Reported as skipped when filtered out.
    Skip,
}

impl TestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TestStatus::Enabled => "enabled",
            TestStatus::Disabled => "disabled",
            TestStatus::Skip => "skip",
        }
    }
}

/// A registered harness test.
pub struct TestCase {
    pub suite: String,
    pub name: String,
    pub action: Box<Action<'static>>,
    pub precondition: Option<Box<Precondition<'static>>>,
    pub status: TestStatus,
    pub skip_reason: String,
}

impl TestCase {
    pub fn new<F>(suite: impl Into<String>, name: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> CaseResult + 'static,
    {
        Self {
            suite: suite.into(),
            name: name.into(),
            action: Box::new(action),
            precondition: None,
            status: TestStatus::Enabled,
            skip_reason: String::new(),
        }
    }

    /// Check run before the action; returning `false` fails the test
    /// with "Validation failed" and the action is not called.
    pub fn with_precondition<P>(mut self, precondition: P) -> Self
    where
        P: Fn() -> bool + 'static,
    {
        self.precondition = Some(Box::new(precondition));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.status = TestStatus::Disabled;
        self
    }

    pub fn skip(mut self, reason: impl Into<String>) -> Self {
        self.status = TestStatus::Skip;
        self.skip_reason = reason.into();
        self
    }

    /// `Suite.case`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.suite, self.name)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("suite", &self.suite)
            .field("name", &self.name)
            .field("status", &self.status)
            .field("skip_reason", &self.skip_reason)
            .field("has_precondition", &self.precondition.is_some())
            .finish_non_exhaustive()
    }
}

/// Ordered set of harness tests.
#[derive(Debug, Default)]
pub struct Harness {
    cases: Vec<TestCase>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a case. A case whose full name is already registered is ignored.
    pub fn register(&mut self, case: TestCase) -> &mut Self {
        let full_name = case.full_name();
        if self.get(&full_name).is_some() {
            tracing::warn!("duplicate test {} ignored", full_name);
        } else {
            tracing::debug!("registered {} ({})", full_name, case.status.as_str());
            self.cases.push(case);
        }
        self
    }

    /// Register several cases under one suite name.
    pub fn suite<F>(&mut self, name: &str, build: F) -> &mut Self
    where
        F: FnOnce(&mut Suite<'_>),
    {
        let mut suite = Suite { harness: self, name: name.to_string() };
        build(&mut suite);
        self
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn get(&self, full_name: &str) -> Option<&TestCase> {
        self.cases.iter().find(|c| c.full_name() == full_name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run eligible cases under `filter`, reporting to `reporter`.
    pub fn run(&self, filter: &TestFilter, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        Coordinator::new(reporter).run_cases(&self.cases, filter)
    }

    /// Run with the filter from `TRIAL_DISABLED_TESTS` / `TRIAL_FILTER` and
    /// text output on stdout. Returns the process exit code.
    pub fn run_all(&self) -> Result<i32> {
        let filter = TestFilter::from_env();
        let mut reporter = report::default_reporter();
        let summary = self.run(&filter, reporter.as_mut())?;
        Ok(summary.exit_code())
    }
}

/// Builder for the cases of one suite.
pub struct Suite<'h> {
    harness: &'h mut Harness,
    name: String,
}

impl Suite<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test<F>(&mut self, name: &str, action: F) -> &mut Self
    where
        F: Fn() -> CaseResult + 'static,
    {
        self.add(TestCase::new(self.name.as_str(), name, action))
    }

    pub fn test_with_precondition<P, F>(
        &mut self,
        name: &str,
        precondition: P,
        action: F,
    ) -> &mut Self
    where
        P: Fn() -> bool + 'static,
        F: Fn() -> CaseResult + 'static,
    {
        self.add(TestCase::new(self.name.as_str(), name, action).with_precondition(precondition))
    }

    pub fn disabled<F>(&mut self, name: &str, action: F) -> &mut Self
    where
        F: Fn() -> CaseResult + 'static,
    {
        self.add(TestCase::new(self.name.as_str(), name, action).disabled())
    }

    pub fn skip<F>(&mut self, name: &str, reason: &str, action: F) -> &mut Self
    where
        F: Fn() -> CaseResult + 'static,
    {
        self.add(TestCase::new(self.name.as_str(), name, action).skip(reason))
    }

    fn add(&mut self, case: TestCase) -> &mut Self {
        self.harness.register(case);
        self
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
