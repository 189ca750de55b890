//! Pariksa: a minimal, fluent unit-testing engine.
//!
//! Tests are plain closures producing a [`TestResult`]; the [`Runner`]
//! executes them, once or repeatedly for flaky-prone code, and prints a
//! colorized, bounded report. Assertions can be written directly against
//! [`engine`](crate::engine), or assembled with the fluent
//! [`TestCaseBuilder`](crate::case::TestCaseBuilder) to cut boilerplate.
//! Panics raised by the code under test are caught and folded into the
//! result; only misuse of the framework itself (a terminal assertion on a
//! builder with no computation, reading a failure out of a success) panics.
//!
//! ```rust,no_run
//! use pariksa::prelude::*;
//!
//! run_test("addition", || {
//!     TestCaseBuilder::new().expect(|| 2 + 2).to_equal(4)
//! });
//!
//! run_test_repeated("die roll in range", 50, || {
//!     assert_in_interval(|| roll_die(), 1, 6)
//! });
//! # fn roll_die() -> i32 { 4 }
//! ```

pub use crate::result::{Failure, TestResult};
pub use crate::runner::{run_test, run_test_repeated, Runner};

pub mod case;
pub mod engine;
pub mod output;
pub mod prelude;
pub mod result;
pub mod runner;
pub mod style;
