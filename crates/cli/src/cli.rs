// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;

/// Run the bundled test suites and range demonstrations
#[derive(Parser)]
#[command(name = "trial")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "TRIAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run only tests whose name matches PATTERN (`*` and `?` wildcards)
    #[arg(short, long, value_name = "PATTERN")]
    pub filter: Option<String>,

    /// Disable a test by its full name (repeatable)
    #[arg(long = "disable", value_name = "NAME")]
    pub disable: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Which facility to run
    #[arg(long, default_value = "all")]
    pub facility: Facility,

    /// List registered tests and exit
    #[arg(long)]
    pub list: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Also register the intentionally failing demo suite
    #[arg(long, hide = true)]
    pub with_failures: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Facility {
    #[default]
    All,
    Harness,
    Range,
}

impl Facility {
    pub fn includes_harness(self) -> bool {
        matches!(self, Facility::All | Facility::Harness)
    }

    pub fn includes_range(self) -> bool {
        matches!(self, Facility::All | Facility::Range)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
