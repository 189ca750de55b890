//! Unit tests for the assertion engine: equality and interval checks,
//! fault capture, and input descriptions.
//!
//! Panicking subjects are exercised on purpose here, so `cargo test`
//! shows panic output from the default hook; the assertions below are on
//! the captured results, not that output.

use pariksa::engine::{
    assert_equals, assert_equals_with_input, assert_in_interval, assert_in_interval_with_input,
    evaluate,
};

mod equality {
    use super::*;

    #[test]
    fn passes_on_equal_values() {
        assert!(assert_equals(|| 2 + 2, 4).did_pass());
    }

    #[test]
    fn works_for_non_copy_subjects() {
        let result = assert_equals(|| "four".to_string(), "four".to_string());
        assert!(result.did_pass());
    }

    #[test]
    fn failure_message_names_both_values() {
        let result = assert_equals(|| 2 + 2, 5);
        assert!(!result.did_pass());

        let message = result.as_failure().message().unwrap_or_default();
        assert!(message.contains('5'), "missing expected value: {}", message);
        assert!(message.contains('4'), "missing actual value: {}", message);
    }

    #[test]
    fn input_description_is_attached_on_failure() {
        let result = assert_equals_with_input(|| 1, 2, "the loneliest number");
        assert_eq!(result.as_failure().input(), Some("the loneliest number"));
    }

    #[test]
    fn no_input_description_by_default() {
        let result = assert_equals(|| 1, 2);
        assert_eq!(result.as_failure().input(), None);
    }
}

mod interval {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(assert_in_interval(|| 1, 1, 10).did_pass());
        assert!(assert_in_interval(|| 10, 1, 10).did_pass());
        assert!(assert_in_interval(|| 5, 5, 5).did_pass());
    }

    #[test]
    fn values_outside_fail() {
        assert!(!assert_in_interval(|| 0, 1, 10).did_pass());
        assert!(!assert_in_interval(|| 11, 1, 10).did_pass());
    }

    #[test]
    fn failure_message_names_the_range() {
        let result = assert_in_interval(|| 11, 1, 10);
        let message = result.as_failure().message().unwrap_or_default().to_string();
        assert!(message.contains("11"), "missing actual: {}", message);
        assert!(message.contains("[1, 10]"), "missing range: {}", message);
    }

    #[test]
    fn input_description_is_attached_on_failure() {
        let result = assert_in_interval_with_input(|| 42, 0, 9, "d10 roll");
        assert_eq!(result.as_failure().input(), Some("d10 roll"));
    }
}

mod faults {
    use super::*;

    #[test]
    fn panic_message_becomes_the_failure_message() {
        let result = assert_equals(|| -> i32 { panic!("boom") }, 1);
        assert!(!result.did_pass());
        assert_eq!(result.as_failure().message(), Some("boom"));
    }

    #[test]
    fn formatted_panic_message_is_preserved() {
        let result = assert_equals(|| -> i32 { panic!("bad {}", "state") }, 1);
        assert_eq!(result.as_failure().message(), Some("bad state"));
    }

    #[test]
    fn fault_handling_is_uniform_across_assertion_kinds() {
        let from_equality = assert_equals(|| -> i32 { panic!("kaput") }, 1);
        let from_interval = assert_in_interval(|| -> i32 { panic!("kaput") }, 0, 1);
        assert_eq!(
            from_equality.as_failure().message(),
            from_interval.as_failure().message()
        );
    }

    #[test]
    fn faulting_subject_keeps_its_input_description() {
        let result = assert_equals_with_input(|| -> i32 { panic!("boom") }, 1, "x = 3");
        let failure = result.as_failure();
        assert_eq!(failure.message(), Some("boom"));
        assert_eq!(failure.input(), Some("x = 3"));
    }

    #[test]
    fn typed_payload_yields_a_failure_without_message() {
        let result = evaluate(
            || -> i32 { std::panic::panic_any(7u8) },
            |_| true,
            |_| String::new(),
            None,
        );
        assert!(!result.did_pass());
        assert_eq!(result.as_failure().message(), None);
    }
}

mod general_evaluation {
    use super::*;

    #[test]
    fn predicate_success_is_a_pass() {
        let result = evaluate(|| 12, |n| n % 2 == 0, |n| format!("{} is odd", n), None);
        assert!(result.did_pass());
    }

    #[test]
    fn predicate_failure_uses_the_message_builder() {
        let result = evaluate(
            || 13,
            |n| n % 2 == 0,
            |n| format!("{} is odd", n),
            Some("thirteen".to_string()),
        );
        let failure = result.as_failure();
        assert_eq!(failure.message(), Some("13 is odd"));
        assert_eq!(failure.input(), Some("thirteen"));
    }

    #[test]
    fn faulting_predicate_is_caught_like_the_subject() {
        let result = evaluate(
            || 3,
            |_| panic!("predicate blew up"),
            |_| String::new(),
            None,
        );
        assert_eq!(result.as_failure().message(), Some("predicate blew up"));
    }
}
