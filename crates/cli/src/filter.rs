// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test name filtering for the harness.
//!
//! A test runs only if its composite name (`Suite.case`) is not in the
//! disabled set and, when a pattern is configured, fully matches it.
//! Patterns use `*` for any sequence and `?` for any single character;
//! other characters keep their regex meaning. A pattern that fails to
//! compile matches nothing.

use std::collections::BTreeSet;

use regex::Regex;

use crate::config::FilterConfig;

/// Comma-separated list of composite names to disable.
pub const DISABLED_ENV: &str = "TRIAL_DISABLED_TESTS";

/// Wildcard pattern that test names must match.
pub const FILTER_ENV: &str = "TRIAL_FILTER";

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Option<Regex>,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Self {
        let regex = match Regex::new(&wildcard_to_regex(pattern)) {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!("invalid filter pattern {:?}, matching nothing: {}", pattern, e);
                None
            }
        };
        Self { source: pattern.to_string(), regex }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// False for a pattern that failed to compile.
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(name))
    }
}

/// Translate a wildcard pattern into an anchored regex.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push_str("^(?:");
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push(c),
        }
    }
    out.push_str(")$");
    out
}

/// Decides which harness tests are eligible to run.
#[derive(Debug, Clone, Default)]
pub struct TestFilter {
    disabled: BTreeSet<String>,
    pattern: Option<NamePattern>,
}

impl TestFilter {
    /// A filter that lets everything through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read [`DISABLED_ENV`] and [`FILTER_ENV`].
    pub fn from_env() -> Self {
        let disabled = std::env::var(DISABLED_ENV).ok();
        let pattern = std::env::var(FILTER_ENV).ok();
        Self::from_vars(disabled.as_deref(), pattern.as_deref())
    }

    /// Build from raw variable values.
    pub fn from_vars(disabled: Option<&str>, pattern: Option<&str>) -> Self {
        let mut filter = Self::new();
        if let Some(list) = disabled {
            filter = filter.with_disabled(parse_name_list(list));
        }
        if let Some(pattern) = pattern.filter(|p| !p.is_empty()) {
            filter = filter.with_pattern(pattern);
        }
        filter
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        let filter = Self::new().with_disabled(config.disabled.iter().cloned());
        match config.pattern.as_deref() {
            Some(pattern) if !pattern.is_empty() => filter.with_pattern(pattern),
            _ => filter,
        }
    }

    pub fn with_disabled<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(NamePattern::new(pattern));
        self
    }

    /// Layer `other` on top: disabled sets are unioned and `other`'s
    /// pattern, if any, replaces ours.
    pub fn merge(mut self, other: TestFilter) -> Self {
        self.disabled.extend(other.disabled);
        if other.pattern.is_some() {
            self.pattern = other.pattern;
        }
        self
    }

    pub fn disabled(&self) -> impl Iterator<Item = &str> {
        self.disabled.iter().map(String::as_str)
    }

    pub fn pattern(&self) -> Option<&NamePattern> {
        self.pattern.as_ref()
    }

    pub fn is_disabled(&self, full_name: &str) -> bool {
        self.disabled.contains(full_name)
    }

    /// Whether the named test passes both gates.
    pub fn should_run(&self, full_name: &str) -> bool {
        if self.is_disabled(full_name) {
            return false;
        }
        match &self.pattern {
            Some(pattern) => pattern.is_match(full_name),
            None => true,
        }
    }
}

fn parse_name_list(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
