// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trial library.
//!
//! Two small test facilities sharing one execution and reporting core:
//!
//! - [`RangeTester`] applies a single predicate to a collection of named
//!   values, with per-item expected-failure inversion.
//! - [`Harness`] runs named test cases grouped into suites, gated by a
//!   disabled list and a wildcard name filter.
//!
//! Both run every eligible test in registration order, contain failures and
//! panics per test, and hand results to a [`report::Reporter`].

pub mod assert;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod evaluate;
pub mod filter;
pub mod harness;
pub mod lifecycle;
pub mod outcome;
pub mod range;
pub mod registry;
pub mod report;
pub mod runner;

#[cfg(test)]
pub mod test_utils;

pub use assert::AssertionFailure;
pub use error::{Error, Result};
pub use evaluate::CaseResult;
pub use filter::TestFilter;
pub use harness::{Harness, Suite, TestCase, TestStatus};
pub use outcome::{Failure, FailureKind, RunSummary, TestResult};
pub use range::RangeTester;
pub use registry::{ItemRegistry, TestItem};
