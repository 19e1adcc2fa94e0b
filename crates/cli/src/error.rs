// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for trial.
//!
//! Per-test failures are not errors: they are recorded as [`Failure`]s on the
//! test's result and never leave the run. The variants here are the
//! conditions that abort a run or a config load.
//!
//! [`Failure`]: crate::outcome::Failure

use std::path::PathBuf;

use crate::lifecycle::TestState;

/// Result type alias using trial's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run or prevent one from starting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A range tester was run before a predicate was set.
    #[error("no test predicate configured; call for_each() before run()")]
    NotConfigured,

    /// The coordinator attempted a lifecycle transition that is not allowed.
    #[error("invalid state transition for {name}: {from} -> {to}")]
    InvalidTransition { name: String, from: TestState, to: TestState },

    /// Config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown fields.
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Writing report output failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
