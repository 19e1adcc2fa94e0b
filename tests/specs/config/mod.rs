// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral tests for configuration.
//!
//! Tests that trial correctly handles:
//! - trial.toml discovery
//! - explicit --config paths
//! - precedence of config, environment and flags

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// trial.toml in the working directory is picked up
#[test]
fn discovered_config_applies_filter() {
    let project = Project::with_config("[filter]\npattern = \"Math.*\"\n");
    project
        .cmd()
        .args(["--facility", "harness"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 4 tests"));
}

/// Config disabled list removes tests
#[test]
fn config_disabled_list() {
    let project = Project::with_config("[filter]\ndisabled = [\"Math.addition\"]\n");
    project
        .cmd()
        .args(["--facility", "harness"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 8 tests"));
}

/// --config points at a file outside the working directory
#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("custom.toml", "[filter]\npattern = \"Strings.*\"\n");
    project
        .cmd()
        .args(["--facility", "harness", "--config", "custom.toml"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 5 tests"));
}

/// TRIAL_CONFIG is equivalent to --config
#[test]
fn config_env_var() {
    let project = Project::empty();
    project.file("custom.toml", "[filter]\npattern = \"Strings.*\"\n");
    project
        .cmd()
        .env("TRIAL_CONFIG", project.path().join("custom.toml"))
        .args(["--facility", "harness"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 5 tests"));
}

/// The environment overrides the config pattern, and flags override both
#[test]
fn precedence_config_env_flag() {
    let project = Project::with_config("[filter]\npattern = \"Math.*\"\n");
    project
        .cmd()
        .env("TRIAL_FILTER", "Strings.*")
        .args(["--facility", "harness"])
        .assert()
        .stdout(predicates::str::contains("Running 5 tests"));

    project
        .cmd()
        .env("TRIAL_FILTER", "Strings.*")
        .args(["--facility", "harness", "--filter", "Math.addition"])
        .assert()
        .stdout(predicates::str::contains("Running 1 tests"));
}

/// Malformed config is a configuration error
#[test]
fn invalid_config_exits_2() {
    let project = Project::with_config("[filter\n");
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to parse config"));
}

/// Unknown keys are rejected
#[test]
fn unknown_config_key_exits_2() {
    let project = Project::with_config("[report]\nslow = 2.0\n");
    project.cmd().assert().code(2);
}

/// A missing explicit config file is an error
#[test]
fn missing_config_file_exits_2() {
    let project = Project::empty();
    project
        .cmd()
        .args(["--config", "absent.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read config"));
}

/// report.color = "always" forces ANSI escapes even when piped
#[test]
fn config_color_always() {
    let project = Project::with_config("[report]\ncolor = \"always\"\n");
    project
        .cmd()
        .args(["--facility", "harness"])
        .env_remove("NO_COLOR")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// --no-color wins over a config that asks for color
#[test]
fn no_color_flag_overrides_config() {
    let project = Project::with_config("[report]\ncolor = \"always\"\n");
    project
        .cmd()
        .args(["--facility", "harness", "--no-color"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}
