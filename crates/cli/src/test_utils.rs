// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the trial crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use tempfile::{NamedTempFile, TempDir};
use termcolor::NoColor;

use crate::outcome::{RunSummary, TestResult};
use crate::report::Reporter;

/// Creates a temp directory containing a `trial.toml` with `config`.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trial.toml"), config).unwrap();
    dir
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Uncolored in-memory sink for text reporter tests.
pub fn plain_buffer() -> NoColor<Vec<u8>> {
    NoColor::new(Vec::new())
}

/// Builds a result with a fixed duration in milliseconds.
pub fn passed_ms(name: &str, ms: u64) -> TestResult {
    TestResult::passed(name, Duration::from_millis(ms))
}

/// One observed reporter callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RunStarted(usize),
    Started(String),
    Finished(String, bool),
    Skipped(String, String),
    RunFinished,
}

/// Reporter that records callbacks into a shared log.
///
/// Clones share the same log so a test can keep one handle while the
/// runner holds another.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    events: Rc<RefCell<Vec<Event>>>,
    summary: Rc<RefCell<Option<RunSummary>>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Names passed to `test_started`, in order.
    pub fn started(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Started(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn summary(&self) -> Option<RunSummary> {
        self.summary.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn run_started(&mut self, total: usize) -> io::Result<()> {
        self.events.borrow_mut().push(Event::RunStarted(total));
        Ok(())
    }

    fn test_started(&mut self, name: &str, _description: &str) -> io::Result<()> {
        self.events.borrow_mut().push(Event::Started(name.to_string()));
        Ok(())
    }

    fn test_finished(&mut self, result: &TestResult) -> io::Result<()> {
        self.events.borrow_mut().push(Event::Finished(result.name.clone(), result.success));
        Ok(())
    }

    fn test_skipped(&mut self, name: &str, reason: &str) -> io::Result<()> {
        self.events.borrow_mut().push(Event::Skipped(name.to_string(), reason.to_string()));
        Ok(())
    }

    fn run_finished(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.events.borrow_mut().push(Event::RunFinished);
        *self.summary.borrow_mut() = Some(summary.clone());
        Ok(())
    }
}

/// Reporter whose every write fails as if stdout were a closed pipe.
#[derive(Debug, Default)]
pub struct ClosedReporter {
    pub calls: usize,
}

impl ClosedReporter {
    fn closed(&mut self) -> io::Result<()> {
        self.calls += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

impl Reporter for ClosedReporter {
    fn run_started(&mut self, _total: usize) -> io::Result<()> {
        self.closed()
    }

    fn test_started(&mut self, _name: &str, _description: &str) -> io::Result<()> {
        self.closed()
    }

    fn test_finished(&mut self, _result: &TestResult) -> io::Result<()> {
        self.closed()
    }

    fn test_skipped(&mut self, _name: &str, _reason: &str) -> io::Result<()> {
        self.closed()
    }

    fn run_finished(&mut self, _summary: &RunSummary) -> io::Result<()> {
        self.closed()
    }
}
