//! Fluent test-case builders.
//!
//! A [`TestCaseBuilder`] assembles an assertion step by step: the subject
//! computation, how values are rendered in failure messages, and an optional
//! description of the input under test. Builders are immutable configuration
//! records: every `with_*`/`expect` call returns a new builder and shares
//! the untouched pieces with the receiver, so a partially-configured builder
//! can seed any number of test cases. Terminal operations (`to_equal`,
//! `to_satisfy`, `to_throw`, ...) consume the builder and produce a
//! [`TestResult`] through the engine's single fault-conversion path.
//!
//! [`TestCaseBuilder1`] and [`TestCaseBuilder2`] curry a one- or
//! two-argument function so the same function can be exercised against many
//! inputs, with per-argument input formatters filling in the failure
//! report's input description automatically.

use std::any::{type_name, Any};
use std::fmt::Debug;
use std::rc::Rc;

use crate::engine;
use crate::result::TestResult;

type Supplier<R> = Rc<dyn Fn() -> R>;
type ValueFormatter<T> = Rc<dyn Fn(&T) -> String>;
type InputDescription = Rc<dyn Fn() -> String>;

/// An incrementally-assembled assertion over a computation producing `R`.
pub struct TestCaseBuilder<R> {
    supplier: Option<Supplier<R>>,
    formatter: ValueFormatter<R>,
    input: Option<InputDescription>,
}

impl<R> Clone for TestCaseBuilder<R> {
    fn clone(&self) -> Self {
        TestCaseBuilder {
            supplier: self.supplier.clone(),
            formatter: self.formatter.clone(),
            input: self.input.clone(),
        }
    }
}

impl<R: Debug + 'static> TestCaseBuilder<R> {
    /// An empty builder rendering values with their `Debug` representation.
    pub fn new() -> Self {
        TestCaseBuilder::formatted(|value: &R| format!("{:?}", value))
    }
}

impl<R: Debug + 'static> Default for TestCaseBuilder<R> {
    fn default() -> Self {
        TestCaseBuilder::new()
    }
}

impl<R: 'static> TestCaseBuilder<R> {
    /// An empty builder with an explicit formatter; the starting point for
    /// subject types without a `Debug` representation.
    pub fn formatted(formatter: impl Fn(&R) -> String + 'static) -> Self {
        TestCaseBuilder {
            supplier: None,
            formatter: Rc::new(formatter),
            input: None,
        }
    }

    /// Sets the subject computation.
    pub fn expect(&self, supplier: impl Fn() -> R + 'static) -> Self {
        TestCaseBuilder {
            supplier: Some(Rc::new(supplier)),
            formatter: self.formatter.clone(),
            input: self.input.clone(),
        }
    }

    /// Sets the subject to an already-computed value.
    pub fn expect_value(&self, value: R) -> Self
    where
        R: Clone,
    {
        self.expect(move || value.clone())
    }

    /// Replaces how values are rendered in failure messages.
    pub fn with_formatter(&self, formatter: impl Fn(&R) -> String + 'static) -> Self {
        TestCaseBuilder {
            supplier: self.supplier.clone(),
            formatter: Rc::new(formatter),
            input: self.input.clone(),
        }
    }

    /// Describes the input under test, shown when the case fails.
    pub fn with_input_string(&self, input: impl Into<String>) -> Self {
        let input = input.into();
        self.with_input_fn(move || input.clone())
    }

    /// Deferred form of [`with_input_string`](Self::with_input_string); the
    /// closure is only invoked when a failure is actually reported.
    pub fn with_input_fn(&self, input: impl Fn() -> String + 'static) -> Self {
        TestCaseBuilder {
            supplier: self.supplier.clone(),
            formatter: self.formatter.clone(),
            input: Some(Rc::new(input)),
        }
    }

    /// Curries a one-argument function; bind the argument later with
    /// [`TestCaseBuilder1::with_input`]. An input description already
    /// configured here carries over.
    pub fn testing<T: 'static>(&self, function: impl Fn(&T) -> R + 'static) -> TestCaseBuilder1<T, R> {
        TestCaseBuilder1 {
            function: Rc::new(function),
            input_formatter: self.input.clone().map(|input| {
                Rc::new(move |_: &T| input()) as ValueFormatter<T>
            }),
            output_formatter: self.formatter.clone(),
        }
    }

    /// Curries a two-argument function; bind the arguments later with
    /// [`TestCaseBuilder2::expect_call`].
    pub fn testing2<T1: 'static, T2: 'static>(
        &self,
        function: impl Fn(&T1, &T2) -> R + 'static,
    ) -> TestCaseBuilder2<T1, T2, R> {
        TestCaseBuilder2 {
            function: Rc::new(function),
            input1_formatter: self.input.clone().map(|input| {
                Rc::new(move |_: &T1| input()) as ValueFormatter<T1>
            }),
            input2_formatter: None,
            output_formatter: self.formatter.clone(),
        }
    }

    /// Asserts that the subject equals `expected` under `==`.
    pub fn to_equal(self, expected: R) -> TestResult
    where
        R: PartialEq,
    {
        self.to_equal_by(expected, |actual, expected| actual == expected)
    }

    /// Asserts equality under a caller-supplied comparator.
    pub fn to_equal_by(self, expected: R, equals: impl Fn(&R, &R) -> bool + 'static) -> TestResult {
        let formatter = self.formatter.clone();
        let expected = Rc::new(expected);
        let compared = expected.clone();
        self.to_satisfy(
            move |actual| equals(actual, &compared),
            move |actual| {
                format!(
                    "Expected {}, instead got {}",
                    formatter(&expected),
                    formatter(actual)
                )
            },
        )
    }

    /// Asserts that the subject satisfies `predicate`, reporting
    /// `message(actual)` otherwise. This is the generic terminal the other
    /// assertions are built on.
    ///
    /// # Panics
    ///
    /// Panics if no subject computation was configured. That is a malformed test
    /// definition, not a test outcome, so it is not softened into a
    /// `Failure`.
    pub fn to_satisfy(
        self,
        predicate: impl FnOnce(&R) -> bool,
        message: impl FnOnce(&R) -> String,
    ) -> TestResult {
        let TestCaseBuilder {
            supplier, input, ..
        } = self;
        let supplier = match supplier {
            Some(supplier) => supplier,
            None => panic!(
                "test case has no computation: call expect() or bind an input before asserting"
            ),
        };
        engine::evaluate_lazy(
            move || supplier(),
            predicate,
            message,
            move || input.map(|describe| describe()),
        )
    }

    /// Asserts that the subject panics with a payload of type `E`.
    ///
    /// Completing normally is itself a failure; panicking with a different
    /// payload type fails with that fault's message. Note that `panic!` with
    /// a format string carries a `String` payload; to throw a typed fault,
    /// use `std::panic::panic_any`.
    ///
    /// # Panics
    ///
    /// Panics if no subject computation was configured, like
    /// [`to_satisfy`](Self::to_satisfy).
    pub fn to_throw<E: Any>(self) -> TestResult {
        let TestCaseBuilder {
            supplier,
            formatter,
            input,
        } = self;
        let supplier = match supplier {
            Some(supplier) => supplier,
            None => panic!(
                "test case has no computation: call expect() or bind an input before asserting"
            ),
        };

        let failure = match engine::capture(move || supplier()) {
            Ok(value) => TestResult::failure().with_message(format!(
                "Expected to throw {}, instead got {}",
                short_type_name::<E>(),
                formatter(&value)
            )),
            Err(payload) if payload.downcast_ref::<E>().is_some() => {
                return TestResult::Success;
            }
            Err(payload) => match engine::fault_message(payload.as_ref()) {
                Some(message) => TestResult::failure().with_message(message),
                None => TestResult::failure(),
            },
        };

        match input {
            Some(describe) => failure.with_input(describe()).into(),
            None => failure.into(),
        }
    }
}

impl TestCaseBuilder<bool> {
    /// Asserts that the subject is `true`.
    pub fn to_be_true(self) -> TestResult {
        self.to_satisfy(|actual| *actual, |_| "Expected true".to_string())
    }

    /// Asserts that the subject is `false`.
    pub fn to_be_false(self) -> TestResult {
        self.to_satisfy(|actual| !*actual, |_| "Expected false".to_string())
    }
}

/// A curried one-argument test case; [`with_input`](Self::with_input) binds
/// the argument and yields a plain [`TestCaseBuilder`].
pub struct TestCaseBuilder1<T, R> {
    function: Rc<dyn Fn(&T) -> R>,
    input_formatter: Option<ValueFormatter<T>>,
    output_formatter: ValueFormatter<R>,
}

impl<T, R> Clone for TestCaseBuilder1<T, R> {
    fn clone(&self) -> Self {
        TestCaseBuilder1 {
            function: self.function.clone(),
            input_formatter: self.input_formatter.clone(),
            output_formatter: self.output_formatter.clone(),
        }
    }
}

impl<T: 'static, R: 'static> TestCaseBuilder1<T, R> {
    /// Sets how the bound argument is rendered in the input description.
    pub fn with_input_formatter(&self, formatter: impl Fn(&T) -> String + 'static) -> Self {
        TestCaseBuilder1 {
            function: self.function.clone(),
            input_formatter: Some(Rc::new(formatter)),
            output_formatter: self.output_formatter.clone(),
        }
    }

    /// Sets how results are rendered in failure messages.
    pub fn with_output_formatter(&self, formatter: impl Fn(&R) -> String + 'static) -> Self {
        TestCaseBuilder1 {
            function: self.function.clone(),
            input_formatter: self.input_formatter.clone(),
            output_formatter: Rc::new(formatter),
        }
    }

    /// Binds the argument, closing the curried function into a plain
    /// builder whose subject is the bound invocation.
    pub fn with_input(&self, input: T) -> TestCaseBuilder<R> {
        let function = self.function.clone();
        let argument = Rc::new(input);

        let bound = argument.clone();
        let supplier = move || function(&bound);

        let describe = self.input_formatter.clone().map(|formatter| {
            Rc::new(move || formatter(&argument)) as InputDescription
        });

        TestCaseBuilder {
            supplier: Some(Rc::new(supplier)),
            formatter: self.output_formatter.clone(),
            input: describe,
        }
    }
}

/// A curried two-argument test case; [`expect_call`](Self::expect_call)
/// binds both arguments and yields a plain [`TestCaseBuilder`].
pub struct TestCaseBuilder2<T1, T2, R> {
    function: Rc<dyn Fn(&T1, &T2) -> R>,
    input1_formatter: Option<ValueFormatter<T1>>,
    input2_formatter: Option<ValueFormatter<T2>>,
    output_formatter: ValueFormatter<R>,
}

impl<T1, T2, R> Clone for TestCaseBuilder2<T1, T2, R> {
    fn clone(&self) -> Self {
        TestCaseBuilder2 {
            function: self.function.clone(),
            input1_formatter: self.input1_formatter.clone(),
            input2_formatter: self.input2_formatter.clone(),
            output_formatter: self.output_formatter.clone(),
        }
    }
}

impl<T1: 'static, T2: 'static, R: 'static> TestCaseBuilder2<T1, T2, R> {
    /// Sets how the bound arguments are rendered in the input description.
    pub fn with_input_formatters(
        &self,
        first: impl Fn(&T1) -> String + 'static,
        second: impl Fn(&T2) -> String + 'static,
    ) -> Self {
        TestCaseBuilder2 {
            function: self.function.clone(),
            input1_formatter: Some(Rc::new(first)),
            input2_formatter: Some(Rc::new(second)),
            output_formatter: self.output_formatter.clone(),
        }
    }

    /// Sets how results are rendered in failure messages.
    pub fn with_output_formatter(&self, formatter: impl Fn(&R) -> String + 'static) -> Self {
        TestCaseBuilder2 {
            function: self.function.clone(),
            input1_formatter: self.input1_formatter.clone(),
            input2_formatter: self.input2_formatter.clone(),
            output_formatter: Rc::new(formatter),
        }
    }

    /// Binds both arguments. The input description applies each configured
    /// argument formatter and joins the results with `", "`, skipping any
    /// argument whose formatter is unset.
    pub fn expect_call(&self, first: T1, second: T2) -> TestCaseBuilder<R> {
        let function = self.function.clone();
        let first = Rc::new(first);
        let second = Rc::new(second);

        let (bound1, bound2) = (first.clone(), second.clone());
        let supplier = move || function(&bound1, &bound2);

        let describe = if self.input1_formatter.is_some() || self.input2_formatter.is_some() {
            let format_first = self.input1_formatter.clone();
            let format_second = self.input2_formatter.clone();
            Some(Rc::new(move || {
                let first = format_first.as_ref().map(|formatter| formatter(&first));
                let second = format_second.as_ref().map(|formatter| formatter(&second));
                match (first, second) {
                    (Some(first), Some(second)) => format!("{}, {}", first, second),
                    (Some(first), None) => first,
                    (None, Some(second)) => second,
                    (None, None) => String::new(),
                }
            }) as InputDescription)
        } else {
            None
        };

        TestCaseBuilder {
            supplier: Some(Rc::new(supplier)),
            formatter: self.output_formatter.clone(),
            input: describe,
        }
    }
}

fn short_type_name<E>() -> &'static str {
    let full = type_name::<E>();
    full.rsplit("::").next().unwrap_or(full)
}
