// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the trial CLI in isolation.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the trial binary.
///
/// Filter and config environment variables are cleared so the host
/// environment cannot leak into a run.
pub fn trial_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("trial"));
    for var in ["TRIAL_FILTER", "TRIAL_DISABLED_TESTS", "TRIAL_CONFIG", "TRIAL_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Temporary working directory, optionally holding a trial.toml.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty directory marked as a git root so discovery stops here.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// A project with `content` as its trial.toml.
    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.file("trial.toml", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).unwrap();
    }

    /// `trial` with this directory as cwd.
    pub fn cmd(&self) -> Command {
        let mut cmd = trial_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Run in a clean project and return stdout.
pub fn run_stdout(args: &[&str]) -> String {
    let project = Project::empty();
    let output = project.cmd().args(args).output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}
