// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Range tester: one predicate applied to many named values.
//!
//! ```
//! use trial::RangeTester;
//! use trial::report::SilentReporter;
//!
//! let mut tester = RangeTester::new();
//! tester
//!     .add_named(-1.0_f64, "negative", "below zero")
//!     .add(1.0)
//!     .add(0.0)
//!     .expect_fail("negative")
//!     .for_each(|v| *v >= 0.0);
//!
//! assert!(tester.run_with(&mut SilentReporter).unwrap());
//! assert_eq!(tester.passed_count(), 3);
//! ```

use crate::error::{Error, Result};
use crate::evaluate::Predicate;
use crate::outcome::{RunSummary, TestResult};
use crate::registry::{ItemRegistry, TestItem};
use crate::report::{self, Reporter};
use crate::runner::Coordinator;

/// Registry of values, the predicate to check them with, and the last run.
pub struct RangeTester<T> {
    items: ItemRegistry<T>,
    predicate: Option<Box<Predicate<'static, T>>>,
    summary: Option<RunSummary>,
}

impl<T> Default for RangeTester<T> {
    fn default() -> Self {
        Self { items: ItemRegistry::new(), predicate: None, summary: None }
    }
}

impl<T: 'static> RangeTester<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: T) -> &mut Self {
        self.items.add(value);
        self
    }

    pub fn add_named(&mut self, value: T, name: &str, description: &str) -> &mut Self {
        self.items.add_named(value, name, description);
        self
    }

    pub fn add_item(&mut self, item: TestItem<T>) -> &mut Self {
        self.items.add_item(item);
        self
    }

    /// Add every value, naming each `<prefix>_<n>` (`Test` when `prefix` is empty).
    pub fn add_all<I>(&mut self, values: I, prefix: &str) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.add_all(values, prefix);
        self
    }

    pub fn add_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = TestItem<T>>,
    {
        self.items.add_items(items);
        self
    }

    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.items.remove(name);
        self
    }

    pub fn remove_if<F>(&mut self, pred: F) -> &mut Self
    where
        F: FnMut(&TestItem<T>) -> bool,
    {
        self.items.remove_if(pred);
        self
    }

    pub fn expect_fail(&mut self, name: &str) -> &mut Self {
        self.items.expect_fail(name);
        self
    }

    pub fn expect_fail_if<F>(&mut self, pred: F) -> &mut Self
    where
        F: FnMut(&TestItem<T>) -> bool,
    {
        self.items.expect_fail_if(pred);
        self
    }

    /// Remove all items and results. The predicate is kept.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self.summary = None;
        self
    }

    /// Set the predicate. Replaces any previous one.
    pub fn for_each<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.predicate =
            Some(Box::new(move |value: &T| Ok::<_, anyhow::Error>(predicate(value))));
        self
    }

    /// Set a fallible predicate. An `Err` fails the item regardless of
    /// whether it was expected to fail.
    pub fn try_for_each<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&T) -> anyhow::Result<bool> + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn get(&self, name: &str) -> Option<&TestItem<T>> {
        self.items.get(name)
    }

    pub fn registry(&self) -> &ItemRegistry<T> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Results of the last run, in execution order.
    pub fn results(&self) -> &[TestResult] {
        self.summary.as_ref().map(|s| s.results.as_slice()).unwrap_or_default()
    }

    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    pub fn passed_count(&self) -> usize {
        self.summary.as_ref().map_or(0, |s| s.stats.passed)
    }

    pub fn failed_count(&self) -> usize {
        self.summary.as_ref().map_or(0, |s| s.stats.failed)
    }

    pub fn pass_rate(&self) -> f64 {
        self.summary.as_ref().map_or(0.0, RunSummary::pass_rate)
    }

    /// Run every item with text output on stdout.
    pub fn run(&mut self) -> Result<bool> {
        let mut reporter = report::default_reporter();
        self.run_with(reporter.as_mut())
    }

    /// Run every item, reporting to `reporter`. Returns true when all passed.
    ///
    /// Results from a previous run are replaced.
    pub fn run_with(&mut self, reporter: &mut dyn Reporter) -> Result<bool> {
        let predicate = self.predicate.as_deref().ok_or(Error::NotConfigured)?;
        let summary = Coordinator::new(reporter).run_items(&self.items, predicate)?;
        let all_passed = summary.all_passed();
        self.summary = Some(summary);
        Ok(all_passed)
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
