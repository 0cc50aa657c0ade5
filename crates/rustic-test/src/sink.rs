//! Output sinks consumed by the recorder.
//!
//! Both sinks are fire-and-forget: the recorder never inspects a return
//! value, so a sink that fails internally must swallow the failure.

use crate::report::RunSummary;

/// Receives one formatted line per recorded pass or fail, and the three-line
/// silent summary.
pub trait LogSink {
    /// An informational line (recorded passes, silent summary).
    fn info(&mut self, line: &str);

    /// An error line (recorded failures).
    fn error(&mut self, line: &str);
}

/// Receives the aggregated summary and is responsible for presenting it.
pub trait RenderSink {
    fn render(&mut self, summary: &RunSummary);
}

/// Default logging sink: info lines to stdout, error lines to stderr, with
/// the PASS/FAIL prefix colored when color is enabled.
#[derive(Debug, Clone)]
pub struct ConsoleLog {
    color: bool,
}

impl Default for ConsoleLog {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ConsoleLog {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

impl LogSink for ConsoleLog {
    fn info(&mut self, line: &str) {
        match line.strip_prefix("PASS ") {
            Some(rest) if self.color => println!("\x1b[32mPASS\x1b[0m {rest}"),
            _ => println!("{line}"),
        }
    }

    fn error(&mut self, line: &str) {
        match line.strip_prefix("FAIL ") {
            Some(rest) if self.color => eprintln!("\x1b[31mFAIL\x1b[0m {rest}"),
            _ => eprintln!("{line}"),
        }
    }
}
