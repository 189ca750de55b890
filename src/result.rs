//! Test outcomes.
//!
//! A [`TestResult`] is either a `Success` or a `Failure` and nothing else;
//! the only way to obtain one is through the constructors here, so an
//! invalid shape (a "passed failure") cannot be represented. A [`Failure`]
//! optionally carries a message and a description of the input that
//! produced it, attached through copy-on-write derivation: every `with_*`
//! call returns a new value and leaves the other field untouched.

/// The outcome of evaluating one assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Success,
    Failure(Failure),
}

/// The failing half of a [`TestResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    message: Option<String>,
    input: Option<String>,
}

impl TestResult {
    /// A passing result.
    pub fn success() -> Self {
        TestResult::Success
    }

    /// A failing result with neither message nor input set. Chain
    /// [`Failure::with_message`] / [`Failure::with_input`] to fill it in,
    /// then convert back with `.into()`.
    pub fn failure() -> Failure {
        Failure::default()
    }

    pub fn did_pass(&self) -> bool {
        matches!(self, TestResult::Success)
    }

    /// Views this result as a [`Failure`].
    ///
    /// # Panics
    ///
    /// Panics when called on a `Success`; that is a logic error in the
    /// calling code, not a test outcome, and is not softened.
    pub fn as_failure(&self) -> &Failure {
        match self {
            TestResult::Failure(failure) => failure,
            TestResult::Success => panic!("cannot view a passing test result as a Failure"),
        }
    }

    /// Owned counterpart of [`as_failure`](Self::as_failure), with the same
    /// panic policy.
    pub fn into_failure(self) -> Failure {
        match self {
            TestResult::Failure(failure) => failure,
            TestResult::Success => panic!("cannot turn a passing test result into a Failure"),
        }
    }
}

impl Failure {
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Failure {
            message: Some(message.into()),
            input: self.input,
        }
    }

    pub fn with_input(self, input: impl Into<String>) -> Self {
        Failure {
            message: self.message,
            input: Some(input.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl From<Failure> for TestResult {
    fn from(failure: Failure) -> Self {
        TestResult::Failure(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_passes_and_failure_does_not() {
        assert!(TestResult::success().did_pass());
        assert!(!TestResult::from(TestResult::failure()).did_pass());
    }

    #[test]
    fn derivation_preserves_the_other_field() {
        let failure = TestResult::failure()
            .with_message("went wrong")
            .with_input("x = 3");
        assert_eq!(failure.message(), Some("went wrong"));
        assert_eq!(failure.input(), Some("x = 3"));

        let rederived = failure.clone().with_message("went wrong");
        assert_eq!(rederived, failure);
    }

    #[test]
    fn bare_failure_has_no_fields() {
        let failure = TestResult::failure();
        assert_eq!(failure.message(), None);
        assert_eq!(failure.input(), None);
    }

    #[test]
    fn as_failure_exposes_the_payload() {
        let result: TestResult = TestResult::failure().with_message("m").into();
        assert_eq!(result.as_failure().message(), Some("m"));
    }

    #[test]
    #[should_panic(expected = "passing test result")]
    fn as_failure_on_success_is_a_logic_error() {
        let _ = TestResult::success().as_failure();
    }

    #[test]
    #[should_panic(expected = "passing test result")]
    fn into_failure_on_success_is_a_logic_error() {
        let _ = TestResult::success().into_failure();
    }
}
