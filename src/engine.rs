//! The assertion engine.
//!
//! Every terminal assertion in the crate funnels through one choke point:
//! the subject computation runs under an unwind guard, the predicate is
//! applied to its value, and the whole spectrum of outcomes collapses into a
//! [`TestResult`]. A panic raised by the code under test and a violated
//! expectation are indistinguishable at the result boundary, and neither
//! escapes to the caller, so a failing test never takes the run down with it.
//!
//! The guard treats the panic payload as the fault's message when it is a
//! `&str` or `String` (what `panic!` produces); other payloads yield a
//! `Failure` with no message.

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use crate::result::TestResult;

/// Invokes `computation`, converting an unwind into an `Err` carrying the
/// panic payload. The computation's state is discarded on unwind, hence the
/// `AssertUnwindSafe`.
pub(crate) fn capture<T>(computation: impl FnOnce() -> T) -> Result<T, Box<dyn Any + Send>> {
    panic::catch_unwind(AssertUnwindSafe(computation))
}

/// Extracts a human-readable message from a panic payload, if it has one.
pub(crate) fn fault_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(message) = payload.downcast_ref::<&str>() {
        Some((*message).to_string())
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Some(message.clone())
    } else {
        None
    }
}

/// Evaluates `computation` and classifies the outcome.
///
/// Completes with a value satisfying `predicate` → `Success`. Completes with
/// a value rejected by `predicate` → `Failure` carrying
/// `failure_message(value)` and `input`. Panics anywhere along the way
/// (computation, predicate, or message builder) → `Failure` carrying the
/// fault's message and `input`.
pub fn evaluate<T>(
    computation: impl FnOnce() -> T,
    predicate: impl FnOnce(&T) -> bool,
    failure_message: impl FnOnce(&T) -> String,
    input: Option<String>,
) -> TestResult {
    evaluate_lazy(computation, predicate, failure_message, move || input)
}

/// [`evaluate`] with a deferred input description: `input` is only invoked
/// when the assertion actually fails.
pub fn evaluate_lazy<T>(
    computation: impl FnOnce() -> T,
    predicate: impl FnOnce(&T) -> bool,
    failure_message: impl FnOnce(&T) -> String,
    input: impl FnOnce() -> Option<String>,
) -> TestResult {
    let verdict = capture(move || {
        let actual = computation();
        if predicate(&actual) {
            Ok(())
        } else {
            Err(failure_message(&actual))
        }
    });

    let message = match verdict {
        Ok(Ok(())) => return TestResult::Success,
        Ok(Err(message)) => Some(message),
        Err(payload) => fault_message(payload.as_ref()),
    };

    let mut failure = TestResult::failure();
    if let Some(message) = message {
        failure = failure.with_message(message);
    }
    if let Some(input) = input() {
        failure = failure.with_input(input);
    }
    failure.into()
}

/// Checks that `computation` produces exactly `expected`.
pub fn assert_equals<T>(computation: impl FnOnce() -> T, expected: T) -> TestResult
where
    T: PartialEq + Debug,
{
    equality_check(computation, expected, None)
}

/// [`assert_equals`] with an input description for the failure report.
pub fn assert_equals_with_input<T>(
    computation: impl FnOnce() -> T,
    expected: T,
    input: impl Into<String>,
) -> TestResult
where
    T: PartialEq + Debug,
{
    equality_check(computation, expected, Some(input.into()))
}

fn equality_check<T>(
    computation: impl FnOnce() -> T,
    expected: T,
    input: Option<String>,
) -> TestResult
where
    T: PartialEq + Debug,
{
    let expected = &expected;
    evaluate(
        computation,
        move |actual| actual == expected,
        move |actual| format!("Expected {:?}, instead got {:?}", expected, actual),
        input,
    )
}

/// Checks that `computation` lands in `[min, max]`, both ends inclusive.
pub fn assert_in_interval<T>(computation: impl FnOnce() -> T, min: T, max: T) -> TestResult
where
    T: PartialOrd + Debug,
{
    interval_check(computation, min, max, None)
}

/// [`assert_in_interval`] with an input description for the failure report.
pub fn assert_in_interval_with_input<T>(
    computation: impl FnOnce() -> T,
    min: T,
    max: T,
    input: impl Into<String>,
) -> TestResult
where
    T: PartialOrd + Debug,
{
    interval_check(computation, min, max, Some(input.into()))
}

fn interval_check<T>(
    computation: impl FnOnce() -> T,
    min: T,
    max: T,
    input: Option<String>,
) -> TestResult
where
    T: PartialOrd + Debug,
{
    let (min, max) = (&min, &max);
    evaluate(
        computation,
        move |actual| min <= actual && actual <= max,
        move |actual| format!("expected {:?} to be in range [{:?}, {:?}]", actual, min, max),
        input,
    )
}
