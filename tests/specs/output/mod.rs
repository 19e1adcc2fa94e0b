// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral tests for output formats.

use crate::prelude::*;

fn json_lines(args: &[&str]) -> Vec<serde_json::Value> {
    run_stdout(args)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Text output is uncolored when stdout is not a terminal
#[test]
fn text_output_is_plain_when_piped() {
    let stdout = run_stdout(&["--facility", "harness"]);
    assert!(!stdout.contains('\x1b'));
}

/// JSON output writes one document per run
#[test]
fn json_output_one_line_per_run() {
    let runs = json_lines(&["--output", "json"]);
    assert_eq!(runs.len(), 6);
    assert_eq!(runs[0]["mode"], "harness");
    assert!(runs[1..].iter().all(|r| r["mode"] == "range"));
    assert!(runs.iter().all(|r| r["passed"] == true));
}

/// JSON statistics for the harness run
#[test]
fn json_harness_statistics() {
    let runs = json_lines(&["--output", "json", "--facility", "harness", "--filter", "Math.*"]);
    assert_eq!(runs.len(), 1);
    let run = &runs[0];
    assert_eq!(run["statistics"]["total"], 4);
    assert_eq!(run["statistics"]["passed"], 4);
    assert_eq!(run["statistics"]["skipped"], 1);
    assert_eq!(run["skipped"][0]["name"], "Strings.locale_collation");
    assert_eq!(run["results"][0]["name"], "Math.addition");
}

/// JSON failures carry their kind
#[test]
fn json_failure_kinds() {
    let runs = json_lines(&[
        "--output",
        "json",
        "--facility",
        "harness",
        "--with-failures",
        "--filter",
        "Failing.*",
    ]);
    let results = runs[0]["results"].as_array().unwrap();
    let kind = |name: &str| {
        results.iter().find(|r| r["name"] == name).unwrap()["kind"].as_str().unwrap().to_string()
    };
    assert_eq!(kind("Failing.assertion"), "assertion");
    assert_eq!(kind("Failing.precondition"), "validation");
    assert_eq!(kind("Failing.error"), "unexpected");
    assert_eq!(kind("Failing.panic"), "unexpected");
    assert_eq!(runs[0]["passed"], false);
}

/// JSON output still exits 1 on failure
#[test]
fn json_output_exit_code() {
    let project = Project::empty();
    project.cmd().args(["--output", "json", "--with-failures"]).assert().code(1);
}
