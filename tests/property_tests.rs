//! Property-based laws for the assertion checks and result derivation.

use pariksa::engine::{assert_equals, assert_in_interval};
use pariksa::TestResult;
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_value_equals_itself(v in any::<i64>()) {
        prop_assert!(assert_equals(move || v, v).did_pass());
    }

    #[test]
    fn distinct_values_never_pass(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let result = assert_equals(move || a, b);
        prop_assert!(!result.did_pass());

        let message = result.as_failure().message().unwrap_or_default().to_string();
        prop_assert!(message.contains(&a.to_string()));
        prop_assert!(message.contains(&b.to_string()));
    }

    #[test]
    fn interval_check_agrees_with_membership(
        min in -1000i64..1000,
        max in -1000i64..1000,
        x in -1000i64..1000,
    ) {
        prop_assume!(min <= max);
        let inside = min <= x && x <= max;
        prop_assert_eq!(assert_in_interval(move || x, min, max).did_pass(), inside);
    }

    #[test]
    fn failure_derivation_is_idempotent(message in ".*", input in ".*") {
        let once = TestResult::failure()
            .with_message(message.clone())
            .with_input(input.clone());
        let twice = TestResult::failure()
            .with_message(message.clone())
            .with_input(input)
            .with_message(message);
        prop_assert_eq!(once, twice);
    }
}
