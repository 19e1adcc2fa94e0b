// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output: one document per run, written as a single line.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::outcome::{RunSummary, TestResult};

use super::{Reporter, millis};

/// JSON reporter. Emits nothing until the run finishes.
pub struct JsonReporter<W> {
    out: W,
    started: Option<DateTime<Utc>>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, started: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Build the JSON document for a run.
pub fn summary_json(summary: &RunSummary, started: DateTime<Utc>) -> serde_json::Value {
    let stats = &summary.stats;
    let results: Vec<_> = summary.results.iter().map(result_json).collect();
    let skipped: Vec<_> = summary
        .skipped
        .iter()
        .map(|s| json!({ "name": s.name, "reason": s.reason }))
        .collect();

    json!({
        "started": started.to_rfc3339(),
        "mode": summary.mode.as_str(),
        "passed": summary.all_passed(),
        "statistics": {
            "total": stats.total,
            "passed": stats.passed,
            "failed": stats.failed,
            "skipped": stats.skipped,
            "pass_rate": summary.pass_rate(),
            "total_time_ms": millis(stats.total_time),
            "total_test_time_ms": millis(summary.total_test_time()),
            "average_time_ms": millis(summary.average_time()),
            "overhead_time_ms": millis(summary.overhead_time()),
        },
        "results": results,
        "skipped": skipped,
    })
}

fn result_json(result: &TestResult) -> serde_json::Value {
    let mut value = json!({
        "name": result.name,
        "success": result.success,
        "duration_ms": millis(result.duration),
        "expected_to_fail": result.was_expected_to_fail,
    });
    if !result.description.is_empty() {
        value["description"] = json!(result.description);
    }
    if let Some(failure) = &result.failure {
        value["error"] = json!(result.error_message());
        value["kind"] = json!(failure.kind.as_str());
    }
    value
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn run_started(&mut self, _total: usize) -> io::Result<()> {
        self.started = Some(Utc::now());
        Ok(())
    }

    fn run_finished(&mut self, summary: &RunSummary) -> io::Result<()> {
        let started = self.started.take().unwrap_or_else(Utc::now);
        serde_json::to_writer(&mut self.out, &summary_json(summary, started))?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
