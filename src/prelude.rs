//! One-stop imports for writing tests with the framework.

pub use crate::case::{TestCaseBuilder, TestCaseBuilder1, TestCaseBuilder2};
pub use crate::engine::{
    assert_equals, assert_equals_with_input, assert_in_interval, assert_in_interval_with_input,
    evaluate, evaluate_lazy,
};
pub use crate::output::{OutputBuffer, OutputSink, SharedBuffer, StdoutSink};
pub use crate::result::{Failure, TestResult};
pub use crate::runner::{
    format_duration, run_equality_test, run_equality_test1, run_equality_test2, run_test,
    run_test_repeated, Runner, MAX_FAILURES_PRINTED,
};
pub use crate::style::{Palette, Style};
