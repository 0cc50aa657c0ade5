//! In-process assertion recording and result aggregation.
//!
//! This crate provides a small stateful recorder for automated checks:
//! - Pass/fail recording with counters and ordered message logs
//! - Truthiness, coercive-equality, and strict-equality assertions over a
//!   closed value type
//! - Summary reporting through injected logging and rendering sinks
//! - Console (table) and HTML renderers for the aggregated summary

pub mod console;
pub mod html;
pub mod recorder;
pub mod report;
pub mod sink;
pub mod value;

pub use console::ConsoleRenderer;
pub use html::{HtmlRenderer, RenderError, html_document, html_fragment, write_report_file};
pub use recorder::ResultRecorder;
pub use report::{RunSummary, format_summary_json, utc_timestamp};
pub use sink::{ConsoleLog, LogSink, RenderSink};
pub use value::Value;
