// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome evaluation for a single test.
//!
//! Errors and panics raised by user code are contained here and turned
//! into [`Failure`]s, so one misbehaving test never aborts its siblings.
//!
//! A contained panic is already reported as an `Unexpected` failure, so the
//! process panic hook stays quiet for it and logs it at debug level instead.
//! Panics outside an evaluation still reach the previously installed hook.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};
use std::sync::Once;

use crate::assert::AssertionFailure;
use crate::outcome::{
    Failure, FailureKind, Outcome, TEST_FAILED, UNEXPECTEDLY_PASSED, UNKNOWN_ERROR,
};
use crate::registry::TestItem;

/// Return type of a harness test action.
pub type CaseResult = anyhow::Result<()>;

/// Range predicate applied to every item's value.
pub type Predicate<'a, T> = dyn Fn(&T) -> anyhow::Result<bool> + 'a;

/// Harness test body.
pub type Action<'a> = dyn Fn() -> CaseResult + 'a;

/// Harness check run before the action; `false` fails the test.
pub type Precondition<'a> = dyn Fn() -> bool + 'a;

thread_local! {
    static CONTAINING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Install, once per process, a panic hook that stays silent while the
/// current thread is inside [`contain`].
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CONTAINING.with(Cell::get) {
                tracing::debug!("contained panic: {}", info);
            } else {
                previous(info);
            }
        }));
    });
}

/// Run `f`, catching any panic as its message.
fn contain<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, String> {
    install_quiet_hook();
    let outer = CONTAINING.with(|c| c.replace(true));
    let caught = panic::catch_unwind(f);
    CONTAINING.with(|c| c.set(outer));
    caught.map_err(|payload| panic_message(payload.as_ref()))
}

/// Evaluate one range item against the predicate.
///
/// `expected_to_fail` inverts the predicate's verdict. Errors are never
/// inverted: an error in an expected-to-fail item is still a failure.
pub fn evaluate_item<T>(item: &TestItem<T>, predicate: &Predicate<'_, T>) -> Outcome {
    let verdict = match contain(AssertUnwindSafe(|| predicate(&item.value))) {
        Ok(Ok(verdict)) => verdict,
        Ok(Err(err)) => return Err(Failure::unexpected(err.to_string())),
        Err(message) => return Err(Failure::unexpected(message)),
    };

    match (verdict, item.expected_to_fail) {
        (true, false) | (false, true) => Ok(()),
        (false, false) => Err(Failure::new(FailureKind::PredicateFalse, TEST_FAILED)),
        (true, true) => Err(Failure::new(FailureKind::UnexpectedPass, UNEXPECTEDLY_PASSED)),
    }
}

/// Evaluate one harness case: precondition first, then the action.
pub fn evaluate_case(action: &Action<'_>, precondition: Option<&Precondition<'_>>) -> Outcome {
    let run = || -> Outcome {
        if let Some(precondition) = precondition
            && !precondition()
        {
            return Err(Failure::validation());
        }
        action().map_err(classify)
    };

    contain(AssertUnwindSafe(run)).unwrap_or_else(|message| Err(Failure::unexpected(message)))
}

/// Assertion failures keep their kind; anything else is unexpected.
fn classify(err: anyhow::Error) -> Failure {
    if err.downcast_ref::<AssertionFailure>().is_some() {
        Failure::new(FailureKind::Assertion, err.to_string())
    } else {
        Failure::unexpected(err.to_string())
    }
}

/// Extract the text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        UNKNOWN_ERROR.to_string()
    }
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
