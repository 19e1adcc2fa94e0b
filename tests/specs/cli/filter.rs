// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral tests for test selection.

use crate::prelude::*;

/// --filter selects tests by wildcard; filtered-out skip tests are reported
#[test]
fn filter_flag_selects_suite() {
    let stdout = run_stdout(&["--facility", "harness", "--filter", "Strings.*"]);
    assert!(stdout.contains("Running 5 tests"));
    assert!(!stdout.contains("[ RUN      ] Math.addition"));
    assert!(stdout.contains("[  SKIPPED ] Math.matrix_inverse: matrix type not implemented"));
    assert!(stdout.contains("Skipped: 1"));
}

/// `?` matches exactly one character
#[test]
fn question_mark_matches_single_character() {
    let stdout = run_stdout(&["--facility", "harness", "--filter", "Strings.?oncat"]);
    assert!(stdout.contains("Running 1 tests"));
    assert!(stdout.contains("[       OK ] Strings.concat"));
}

/// TRIAL_FILTER applies the same selection as --filter
#[test]
fn filter_env_selects_suite() {
    let project = Project::empty();
    project
        .cmd()
        .env("TRIAL_FILTER", "Math.*")
        .args(["--facility", "harness"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 4 tests"));
}

/// --filter overrides TRIAL_FILTER
#[test]
fn filter_flag_overrides_env() {
    let project = Project::empty();
    project
        .cmd()
        .env("TRIAL_FILTER", "Math.*")
        .args(["--facility", "harness", "--filter", "Strings.concat"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 1 tests"));
}

/// TRIAL_DISABLED_TESTS removes tests by full name
#[test]
fn disabled_env_removes_tests() {
    let project = Project::empty();
    project
        .cmd()
        .env("TRIAL_DISABLED_TESTS", "Math.addition, Strings.concat")
        .args(["--facility", "harness"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 7 tests"))
        .stdout(predicates::str::contains("Math.addition").not());
}

/// --disable adds to the disabled set from the environment
#[test]
fn disable_flag_unions_with_env() {
    let project = Project::empty();
    project
        .cmd()
        .env("TRIAL_DISABLED_TESTS", "Math.addition")
        .args(["--facility", "harness", "--disable", "Strings.concat"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 7 tests"));
}

/// Disabling a skip-marked test reports it as skipped
#[test]
fn disabling_skip_test_reports_skip() {
    let stdout = run_stdout(&["--facility", "harness", "--disable", "Strings.locale_collation"]);
    assert!(stdout.contains("Running 8 tests"));
    assert!(stdout.contains("[  SKIPPED ] Strings.locale_collation: needs ICU data"));
}

/// A malformed pattern matches nothing and warns
#[test]
fn malformed_pattern_runs_nothing() {
    let project = Project::empty();
    project
        .cmd()
        .args(["--facility", "harness", "--filter", "Math.["])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 0 tests"))
        .stdout(predicates::str::contains("Skipped: 2"))
        .stderr(predicates::str::contains("invalid filter pattern"));
}
