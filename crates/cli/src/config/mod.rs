// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for `trial.toml`.
//!
//! All sections are optional. Values here are the lowest layer: the
//! `TRIAL_FILTER` / `TRIAL_DISABLED_TESTS` environment variables and then
//! command-line flags are applied on top.

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::color::ColorMode;
use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub filter: FilterConfig,
    pub report: ReportConfig,
}

/// `[filter]` section.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Wildcard pattern test names must match.
    pub pattern: Option<String>,

    /// Composite test names (`Suite.case`) that never run.
    pub disabled: Vec<String>,
}

/// `[report]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Multiple of the average duration that marks a test as slow.
    pub slow_factor: f64,

    pub color: ColorMode,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { slow_factor: defaults::SLOW_FACTOR, color: ColorMode::default() }
    }
}

/// Parse config from TOML text, replacing invalid values with defaults.
pub fn parse(content: &str) -> std::result::Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    let factor = config.report.slow_factor;
    if !factor.is_finite() || factor <= 0.0 {
        tracing::warn!("report.slow_factor must be positive, using {}", defaults::SLOW_FACTOR);
        config.report.slow_factor = defaults::SLOW_FACTOR;
    }
    Ok(config)
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Config { path: path.to_path_buf(), source })?;
    let config =
        parse(&content).map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
