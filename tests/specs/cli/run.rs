// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral tests for a default `trial` run.

use crate::prelude::*;

/// All bundled tests pass, so the run exits 0
#[test]
fn default_run_passes() {
    let project = Project::empty();
    project
        .cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("[       OK ] Math.addition"))
        .stdout(predicates::str::contains("Test Summary"))
        .stdout(predicates::str::contains("[  FAILED  ]").not());
}

/// Disabled tests never run and skip-marked tests that pass the filter do
#[test]
fn harness_runs_every_enabled_and_skip_test() {
    let stdout = run_stdout(&["--facility", "harness"]);
    assert!(stdout.contains("Running 9 tests"));
    assert!(stdout.contains("[ RUN      ] Math.matrix_inverse"));
    assert!(!stdout.contains("Math.prime_sieve_large"));
    assert!(stdout.contains("Skipped: 0"));
}

/// Failures of every kind are reported and the run exits 1
#[test]
fn failures_exit_non_zero() {
    let project = Project::empty();
    project
        .cmd()
        .arg("--with-failures")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("[  FAILED  ] Failing.assertion"))
        .stdout(predicates::str::contains("Error: Expected 1 + 1 == 3"))
        .stdout(predicates::str::contains("Error: Validation failed"))
        .stdout(predicates::str::contains("Error: index out of range"))
        .stdout(predicates::str::contains("Error: number too large to fit in target type"))
        .stdout(predicates::str::contains("Error: Test unexpectedly passed"));
}

/// A failing test does not stop the tests registered after it
#[test]
fn failures_do_not_abort_remaining_tests() {
    let stdout = run_stdout(&["--with-failures", "--facility", "harness"]);
    assert!(stdout.contains("[  FAILED  ] Failing.panic"));
    assert!(stdout.contains("[ RUN      ] Failing.condition"));
    assert!(stdout.contains("Failed: 5"));
}

/// Range runs include the performance block
#[test]
fn range_facility_reports_performance() {
    let stdout = run_stdout(&["--facility", "range"]);
    assert!(stdout.contains("[PERFORMANCE ANALYSIS]"));
    assert!(stdout.contains("[ RUN      ] negative - Should fail"));
    assert!(stdout.contains("[       OK ] chinese"));
    assert!(!stdout.contains("Math.addition"));
}

/// --verbose enables debug logging on stderr
#[test]
fn verbose_logs_registration() {
    let project = Project::empty();
    project
        .cmd()
        .args(["--verbose", "--facility", "harness"])
        .assert()
        .success()
        .stderr(predicates::str::contains("registered Math.addition"));
}

/// TRIAL_LOG selects the log level
#[test]
fn trial_log_env_sets_level() {
    let project = Project::empty();
    project
        .cmd()
        .env("TRIAL_LOG", "debug")
        .args(["--facility", "harness"])
        .assert()
        .success()
        .stderr(predicates::str::contains("eligible"));
}
