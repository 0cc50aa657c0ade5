//! Stateful pass/fail recorder and the assertion operations built on it.

use crate::console::ConsoleRenderer;
use crate::report::RunSummary;
use crate::sink::{ConsoleLog, LogSink, RenderSink};
use crate::value::Value;
use std::fmt;

/// Accumulates assertion outcomes for one test session.
///
/// One instance per session, explicitly constructed and owned by the caller.
/// Counters and message logs only grow between calls to [`reset`], and
/// `pass_count` / `fail_count` always equal the lengths of their logs.
///
/// Each recorded outcome is forwarded to the injected [`LogSink`] as it
/// happens; [`report`] hands the aggregated [`RunSummary`] to the injected
/// [`RenderSink`].
///
/// [`reset`]: ResultRecorder::reset
/// [`report`]: ResultRecorder::report
///
/// ```
/// use rustic_test::ResultRecorder;
///
/// let mut tests = ResultRecorder::new();
/// tests.assert_equal("addition", 2, 1 + 1, "");
/// tests.assert_true("nonempty", "hello", "greeting exists");
/// tests.report(true);
/// ```
pub struct ResultRecorder {
    pass_count: usize,
    fail_count: usize,
    pass_log: Vec<String>,
    fail_log: Vec<String>,
    log: Box<dyn LogSink>,
    render: Box<dyn RenderSink>,
}

impl Default for ResultRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResultRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultRecorder")
            .field("pass_count", &self.pass_count)
            .field("fail_count", &self.fail_count)
            .field("pass_log", &self.pass_log)
            .field("fail_log", &self.fail_log)
            .finish_non_exhaustive()
    }
}

impl ResultRecorder {
    /// Create a recorder with empty state and the default console sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sinks(
            Box::new(ConsoleLog::default()),
            Box::new(ConsoleRenderer::default()),
        )
    }

    /// Create a recorder with empty state and the given sinks.
    #[must_use]
    pub fn with_sinks(log: Box<dyn LogSink>, render: Box<dyn RenderSink>) -> Self {
        Self {
            pass_count: 0,
            fail_count: 0,
            pass_log: Vec::new(),
            fail_log: Vec::new(),
            log,
            render,
        }
    }

    /// Number of recorded successes.
    #[must_use]
    pub const fn pass_count(&self) -> usize {
        self.pass_count
    }

    /// Number of recorded failures.
    #[must_use]
    pub const fn fail_count(&self) -> usize {
        self.fail_count
    }

    /// Recorded success messages, in insertion order.
    #[must_use]
    pub fn pass_log(&self) -> &[String] {
        &self.pass_log
    }

    /// Recorded failure messages, in insertion order.
    #[must_use]
    pub fn fail_log(&self) -> &[String] {
        &self.fail_log
    }

    /// Discard all recorded outcomes, returning to the freshly constructed
    /// state. Sinks are retained.
    pub fn reset(&mut self) {
        self.pass_count = 0;
        self.fail_count = 0;
        self.pass_log.clear();
        self.fail_log.clear();
    }

    /// Record a failure directly, without going through an assertion.
    ///
    /// The formatted line is appended to the failure log and forwarded to
    /// the logging sink at error severity.
    pub fn record_fail(&mut self, test_name: &str, test_type: &str, message: &str) {
        self.fail_count += 1;
        let line = format!("FAIL {test_name} - {test_type}: {message}");
        self.fail_log.push(line.clone());
        self.log.error(&line);
    }

    /// Record a success directly, without going through an assertion.
    pub fn record_pass(&mut self, test_name: &str, test_type: &str, message: &str) {
        self.pass_count += 1;
        let line = format!("PASS {test_name} - {test_type}: {message}");
        self.pass_log.push(line.clone());
        self.log.info(&line);
    }

    /// Assert that `value` is truthy (see [`Value::is_truthy`] for the
    /// truthiness table).
    pub fn assert_true(&mut self, test_name: &str, value: impl Into<Value>, info: &str) {
        if value.into().is_truthy() {
            self.record_pass(test_name, "assert", info);
        } else {
            self.record_fail(test_name, "assert", info);
        }
    }

    /// Assert loose equality, converting across types per
    /// [`Value::loose_eq`], so `assert_equal("t", 7, "7", "")` passes.
    pub fn assert_equal(
        &mut self,
        test_name: &str,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        info: &str,
    ) {
        let expected = expected.into();
        let actual = actual.into();
        if expected.loose_eq(&actual) {
            let message = format!("{expected} == {actual} {info}");
            self.record_pass(test_name, "assert_equal", &message);
        } else {
            let message = format!("{expected} != {actual} {info}");
            self.record_fail(test_name, "assert_equal", &message);
        }
    }

    /// Assert strict equality: same type and same value, no conversion.
    pub fn assert_strict_equal(
        &mut self,
        test_name: &str,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        info: &str,
    ) {
        let expected = expected.into();
        let actual = actual.into();
        if expected.strict_eq(&actual) {
            let message = format!("{expected} === {actual} {info}");
            self.record_pass(test_name, "assert_strict_equal", &message);
        } else {
            let message = format!("{expected} !== {actual} {info}");
            self.record_fail(test_name, "assert_strict_equal", &message);
        }
    }

    /// Snapshot of the current aggregated state.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            pass_count: self.pass_count,
            fail_count: self.fail_count,
            total_count: self.pass_count + self.fail_count,
            pass_messages: self.pass_log.clone(),
            fail_messages: self.fail_log.clone(),
        }
    }

    /// Report the aggregated results.
    ///
    /// When `silent` is true, emits exactly three lines (passed, failed,
    /// total counts) through the logging sink and leaves the rendering sink
    /// untouched. Otherwise hands the full [`RunSummary`] to the rendering
    /// sink, exactly once.
    ///
    /// Reporting with no recorded assertions reports zero counts.
    pub fn report(&mut self, silent: bool) {
        if silent {
            let total = self.pass_count + self.fail_count;
            self.log.info(&format!("Passed tests: {}", self.pass_count));
            self.log.info(&format!("Failed tests: {}", self.fail_count));
            self.log.info(&format!("Total tests: {total}"));
        } else {
            let summary = self.summary();
            self.render.render(&summary);
        }
    }
}
