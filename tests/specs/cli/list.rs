// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral tests for `trial --list`.

use crate::prelude::*;

/// --list prints every registered test without running any
#[test]
fn list_prints_all_tests() {
    let project = Project::empty();
    project
        .cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Math.addition"))
        .stdout(predicates::str::is_match(r"Math\.prime_sieve_large\s+disabled\s+omit").unwrap())
        .stdout(predicates::str::contains("Test Summary").not());
}

/// --list shows how the filter treats each test
#[test]
fn list_reflects_filter() {
    let stdout = run_stdout(&["--list", "--filter", "Math.*"]);
    let line = |name: &str| stdout.lines().find(|l| l.starts_with(name)).unwrap().to_string();

    assert!(line("Math.addition ").ends_with("run"));
    assert!(line("Strings.concat ").ends_with("omit"));
    assert!(line("Strings.locale_collation ").ends_with("skip"));
}

/// --with-failures adds the failing suite
#[test]
fn list_includes_failing_suite_on_request() {
    let stdout = run_stdout(&["--list", "--with-failures"]);
    assert!(stdout.contains("Failing.panic"));
    assert!(!run_stdout(&["--list"]).contains("Failing."));
}
