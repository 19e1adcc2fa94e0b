// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion helpers for harness test actions.
//!
//! Each `ensure_*!` macro returns early from the enclosing action with an
//! [`AssertionFailure`] when its check does not hold. Actions return
//! [`CaseResult`](crate::evaluate::CaseResult), so the failure converts into
//! an `anyhow::Error` and is reported with its message.
//!
//! ```ignore
//! suite.test("add", || {
//!     trial::ensure_eq!(2 + 2, 4);
//!     trial::ensure_true!("abc".starts_with('a'));
//!     Ok(())
//! });
//! ```

/// A failed assertion inside a harness action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionFailure {
    pub message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Fail unless the condition is true.
#[macro_export]
macro_rules! ensure_true {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err(
                $crate::assert::AssertionFailure::new(::std::format!(
                    "Expected true: {}",
                    ::core::stringify!($cond)
                ))
                .into(),
            );
        }
    };
}

/// Fail unless the condition is false.
#[macro_export]
macro_rules! ensure_false {
    ($cond:expr $(,)?) => {
        if $cond {
            return ::core::result::Result::Err(
                $crate::assert::AssertionFailure::new(::std::format!(
                    "Expected false: {}",
                    ::core::stringify!($cond)
                ))
                .into(),
            );
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ensure_cmp {
    ($left:expr, $right:expr, $op:tt) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left $op *right) {
                    return ::core::result::Result::Err(
                        $crate::assert::AssertionFailure::new(::std::format!(
                            "Expected {} {} {} (left: {:?}, right: {:?})",
                            ::core::stringify!($left),
                            ::core::stringify!($op),
                            ::core::stringify!($right),
                            left,
                            right
                        ))
                        .into(),
                    );
                }
            }
        }
    };
}

/// Fail unless `left == right`.
#[macro_export]
macro_rules! ensure_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__ensure_cmp!($left, $right, ==)
    };
}

/// Fail unless `left != right`.
#[macro_export]
macro_rules! ensure_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__ensure_cmp!($left, $right, !=)
    };
}

/// Fail unless `left > right`.
#[macro_export]
macro_rules! ensure_gt {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__ensure_cmp!($left, $right, >)
    };
}

/// Fail unless `left >= right`.
#[macro_export]
macro_rules! ensure_ge {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__ensure_cmp!($left, $right, >=)
    };
}

/// Fail unless `left < right`.
#[macro_export]
macro_rules! ensure_lt {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__ensure_cmp!($left, $right, <)
    };
}

/// Fail unless `left <= right`.
#[macro_export]
macro_rules! ensure_le {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__ensure_cmp!($left, $right, <=)
    };
}

/// Fail unless the expression evaluates to `Err`.
#[macro_export]
macro_rules! ensure_err {
    ($result:expr $(,)?) => {
        if ::core::result::Result::is_ok(&$result) {
            return ::core::result::Result::Err(
                $crate::assert::AssertionFailure::new(::std::format!(
                    "Expected {} to fail",
                    ::core::stringify!($result)
                ))
                .into(),
            );
        }
    };
}

#[cfg(test)]
#[path = "assert_tests.rs"]
mod tests;
