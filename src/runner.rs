//! Test execution and report rendering.
//!
//! A [`Runner`] executes a named test (any closure producing a
//! [`TestResult`]) a given number of times, sequentially on the calling
//! thread, and prints one bounded report: a pass line, or a failure summary
//! with at most [`MAX_FAILURES_PRINTED`] individual failures and a
//! truncation marker for the rest. The palette and output sink are supplied
//! at construction, never read from hidden global state.

use std::fmt::Debug;
use std::time::{Duration, Instant};

use crate::engine;
use crate::output::{OutputSink, StdoutSink};
use crate::result::{Failure, TestResult};
use crate::style::{Palette, Style};

/// Cap on individually printed failures per report.
pub const MAX_FAILURES_PRINTED: usize = 3;

pub struct Runner {
    palette: Palette,
    sink: Box<dyn OutputSink>,
}

impl Runner {
    /// Stdout reporting, colors decided by terminal detection.
    pub fn new() -> Self {
        Runner::with_palette(Palette::auto())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Runner::with_sink(palette, Box::new(StdoutSink))
    }

    pub fn with_sink(palette: Palette, sink: Box<dyn OutputSink>) -> Self {
        Runner { palette, sink }
    }

    /// Runs `test` once and reports.
    pub fn run(&mut self, name: &str, test: impl Fn() -> TestResult) {
        self.run_repeated(name, 1, test);
    }

    /// Runs `test` exactly `num_runs` times, collecting every failure in
    /// execution order, and reports pass/fail with the total duration and,
    /// for more than one run, the per-run average.
    pub fn run_repeated(&mut self, name: &str, num_runs: usize, test: impl Fn() -> TestResult) {
        let start = Instant::now();
        let mut failures: Vec<Failure> = Vec::new();
        for _ in 0..num_runs {
            let result = test();
            if !result.did_pass() {
                failures.push(result.into_failure());
            }
        }
        let elapsed = start.elapsed();

        self.report(name, num_runs, &failures, elapsed);
    }

    fn report(&mut self, name: &str, num_runs: usize, failures: &[Failure], elapsed: Duration) {
        let palette = self.palette;

        let mut time_info = palette.paint(Style::Magenta, &format_duration(elapsed));
        if num_runs > 1 {
            let per_run = elapsed / num_runs as u32;
            time_info.push_str(&format!(
                " ({} per run * {} runs)",
                palette.paint(Style::Magenta, &format_duration(per_run)),
                palette.paint(Style::Magenta, &num_runs.to_string()),
            ));
        }

        if failures.is_empty() {
            self.sink.emit(&format!(
                "{} {} in {}",
                palette.paint(Style::Green, "Passed test"),
                name,
                time_info
            ));
            return;
        }

        let verdict = if num_runs == 1 {
            palette.paint(Style::Red, "Failed test")
        } else {
            palette.paint(
                Style::Red,
                &format!("Failed {}/{} runs for test", failures.len(), num_runs),
            )
        };
        self.sink
            .emit(&format!("{} {} in {}:", verdict, name, time_info));

        for failure in failures.iter().take(MAX_FAILURES_PRINTED) {
            let input_info = match failure.input() {
                Some(input) => palette.paint(
                    Style::Red,
                    &format!("With input {}: ", palette.paint(Style::Cyan, input)),
                ),
                None => String::new(),
            };
            let message = failure.message().unwrap_or("");
            self.sink.emit(&format!(
                "    {}{}",
                input_info,
                palette.paint(Style::Red, message)
            ));
        }
        if failures.len() > MAX_FAILURES_PRINTED {
            self.sink.emit(&palette.paint(Style::Red, "    etc."));
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Runner::new()
    }
}

/// Renders a duration in the unit fitting its magnitude: nanoseconds below
/// a microsecond, milliseconds below a millisecond, seconds otherwise.
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    if seconds < 1e-6 {
        format!("{}ns", duration.as_nanos())
    } else if seconds < 1e-3 {
        format!("{:.3}ms", seconds * 1e3)
    } else {
        format!("{:.3}s", seconds)
    }
}

/// Runs a named test once with a default stdout [`Runner`].
pub fn run_test(name: &str, test: impl Fn() -> TestResult) {
    Runner::new().run(name, test);
}

/// Runs a named test `num_runs` times with a default stdout [`Runner`].
pub fn run_test_repeated(name: &str, num_runs: usize, test: impl Fn() -> TestResult) {
    Runner::new().run_repeated(name, num_runs, test);
}

/// Runs a single equality check against a zero-argument function.
pub fn run_equality_test<R>(function: impl Fn() -> R, expected: R, name: &str)
where
    R: PartialEq + Debug + Clone,
{
    run_test(name, move || {
        engine::assert_equals(&function, expected.clone())
    });
}

/// Runs a single equality check against a one-argument function.
pub fn run_equality_test1<T, R>(function: impl Fn(&T) -> R, argument: T, expected: R, name: &str)
where
    R: PartialEq + Debug + Clone,
{
    run_test(name, move || {
        engine::assert_equals(|| function(&argument), expected.clone())
    });
}

/// Runs a single equality check against a two-argument function.
pub fn run_equality_test2<T1, T2, R>(
    function: impl Fn(&T1, &T2) -> R,
    first: T1,
    second: T2,
    expected: R,
    name: &str,
) where
    R: PartialEq + Debug + Clone,
{
    run_test(name, move || {
        engine::assert_equals(|| function(&first, &second), expected.clone())
    });
}
