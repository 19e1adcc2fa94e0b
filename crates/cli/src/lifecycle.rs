// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test lifecycle state machine.
//!
//! ```text
//! Pending ──start──▶ Running ──finish──▶ Passed | Failed
//!    │
//!    └──skip──▶ Skipped
//! ```
//!
//! Skipped is only reachable before a test starts.

use std::fmt;

use crate::error::{Error, Result};

/// State of a single test within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestState {
    #[default]
    Pending,
    Running,
    Passed,
    Failed,
    Skipped,
}

impl TestState {
    /// Whether no further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, TestState::Passed | TestState::Failed | TestState::Skipped)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TestState::Pending => "pending",
            TestState::Running => "running",
            TestState::Passed => "passed",
            TestState::Failed => "failed",
            TestState::Skipped => "skipped",
        }
    }

    fn can_transition_to(self, to: TestState) -> bool {
        matches!(
            (self, to),
            (TestState::Pending, TestState::Running)
                | (TestState::Pending, TestState::Skipped)
                | (TestState::Running, TestState::Passed)
                | (TestState::Running, TestState::Failed)
        )
    }
}

impl fmt::Display for TestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks one named test through its lifecycle.
#[derive(Debug)]
pub struct Lifecycle {
    name: String,
    state: TestState,
}

impl Lifecycle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), state: TestState::Pending }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> TestState {
        self.state
    }

    /// Pending -> Running.
    pub fn start(&mut self) -> Result<()> {
        self.transition(TestState::Running)
    }

    /// Running -> Passed or Failed.
    pub fn finish(&mut self, success: bool) -> Result<()> {
        self.transition(if success { TestState::Passed } else { TestState::Failed })
    }

    /// Pending -> Skipped.
    pub fn skip(&mut self) -> Result<()> {
        self.transition(TestState::Skipped)
    }

    fn transition(&mut self, to: TestState) -> Result<()> {
        if !self.state.can_transition_to(to) {
            return Err(Error::InvalidTransition { name: self.name.clone(), from: self.state, to });
        }
        tracing::trace!("{}: {} -> {}", self.name, self.state, to);
        self.state = to;
        Ok(())
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
