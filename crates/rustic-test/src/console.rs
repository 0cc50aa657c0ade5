//! Console rendering sink.

use crate::report::RunSummary;
use crate::sink::RenderSink;
use comfy_table::{Cell, Color, Table};

/// Default rendering sink: a counts table followed by the recorded
/// messages, failures in red.
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    color: bool,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ConsoleRenderer {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn counts_table(&self, summary: &RunSummary) -> Table {
        let mut passed = Cell::new(summary.pass_count);
        let mut failed = Cell::new(summary.fail_count);
        if self.color {
            passed = passed.fg(Color::Green);
            failed = failed.fg(Color::Red);
        }

        let mut table = Table::new();
        table.set_header(vec!["Outcome", "Count"]);
        table.add_row(vec![Cell::new("Passed tests"), passed]);
        table.add_row(vec![Cell::new("Failed tests"), failed]);
        table.add_row(vec![
            Cell::new("Total tests"),
            Cell::new(summary.total_count),
        ]);
        table
    }
}

impl RenderSink for ConsoleRenderer {
    fn render(&mut self, summary: &RunSummary) {
        println!("{}", self.counts_table(summary));

        for message in &summary.pass_messages {
            println!("{message}");
        }
        for message in &summary.fail_messages {
            if self.color {
                println!("\x1b[31m{message}\x1b[0m");
            } else {
                println!("{message}");
            }
        }
    }
}
