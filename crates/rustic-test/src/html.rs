//! HTML rendering sink.
//!
//! Produces the browser-style summary: green/red count lines (bold when the
//! count is non-zero), a rule, then one `<div>` per recorded message with
//! failures in bold red. Message text is escaped before interpolation.

use crate::report::{RunSummary, utc_timestamp};
use crate::sink::RenderSink;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Errors from explicit report writing.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Summary rendered as an HTML fragment, suitable for embedding.
#[must_use]
pub fn html_fragment(summary: &RunSummary) -> String {
    let pass_bold = if summary.pass_count > 0 {
        "font-weight:bold;"
    } else {
        ""
    };
    let fail_bold = if summary.fail_count > 0 {
        "font-weight:bold;"
    } else {
        ""
    };

    let mut html = String::new();
    html.push_str(&format!(
        "<div style=\"color:green;{pass_bold}\">Passed tests: {}</div>\n",
        summary.pass_count
    ));
    html.push_str(&format!(
        "<div style=\"color:red;{fail_bold}\">Failed tests: {}</div>\n",
        summary.fail_count
    ));
    html.push_str(&format!(
        "<div style=\"color:black;font-weight:bold;\">Total tests: {}</div>\n",
        summary.total_count
    ));
    html.push_str("<hr />\n");
    for message in &summary.pass_messages {
        html.push_str(&format!("<div>{}</div>\n", escape(message)));
    }
    for message in &summary.fail_messages {
        html.push_str(&format!(
            "<div style=\"color:red;font-weight:bold;\">{}</div>\n",
            escape(message)
        ));
    }
    html
}

/// Summary rendered as a standalone HTML document, stamped with the
/// render time.
#[must_use]
pub fn html_document(summary: &RunSummary) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\" /><title>Test results</title></head>\n<body>\n{}<div style=\"color:gray;\">Generated at {}</div>\n</body>\n</html>\n",
        html_fragment(summary),
        utc_timestamp()
    )
}

/// Write the document form of `summary` to a file.
///
/// # Errors
/// Returns `RenderError::Io` if the file cannot be created or written.
pub fn write_report_file(path: &Path, summary: &RunSummary) -> Result<(), RenderError> {
    let mut file = File::create(path)?;
    file.write_all(html_document(summary).as_bytes())?;
    Ok(())
}

/// Rendering sink that writes the HTML document to a writer.
///
/// The [`RenderSink`] impl is fire-and-forget; use [`write_document`] or
/// [`write_fragment`] to observe write failures.
///
/// [`write_document`]: HtmlRenderer::write_document
/// [`write_fragment`]: HtmlRenderer::write_fragment
#[derive(Debug)]
pub struct HtmlRenderer<W: Write> {
    out: W,
}

impl<W: Write> HtmlRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the fragment form of `summary`.
    ///
    /// # Errors
    /// Returns `RenderError::Io` on write failure.
    pub fn write_fragment(&mut self, summary: &RunSummary) -> Result<(), RenderError> {
        self.out.write_all(html_fragment(summary).as_bytes())?;
        Ok(())
    }

    /// Write the document form of `summary`.
    ///
    /// # Errors
    /// Returns `RenderError::Io` on write failure.
    pub fn write_document(&mut self, summary: &RunSummary) -> Result<(), RenderError> {
        self.out.write_all(html_document(summary).as_bytes())?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for HtmlRenderer<W> {
    fn render(&mut self, summary: &RunSummary) {
        let _ = self.write_document(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> RunSummary {
        RunSummary {
            pass_count: 2,
            fail_count: 1,
            total_count: 3,
            pass_messages: vec![
                "PASS add - assert_equal: 2 == 2 ".to_string(),
                "PASS flag - assert: ".to_string(),
            ],
            fail_messages: vec!["FAIL mul - assert_equal: 7 != 6 ".to_string()],
        }
    }

    #[test]
    fn test_fragment_contains_counts() {
        let html = html_fragment(&sample_summary());
        assert!(html.contains("Passed tests: 2"));
        assert!(html.contains("Failed tests: 1"));
        assert!(html.contains("Total tests: 3"));
        assert!(html.contains("<hr />"));
    }

    #[test]
    fn test_fragment_bolds_only_nonzero_counts() {
        let html = html_fragment(&sample_summary());
        assert!(html.contains("color:green;font-weight:bold;"));
        assert!(html.contains("color:red;font-weight:bold;"));

        let empty = html_fragment(&RunSummary::default());
        assert!(empty.contains("<div style=\"color:green;\">Passed tests: 0</div>"));
        assert!(empty.contains("<div style=\"color:red;\">Failed tests: 0</div>"));
        // The total line is always bold.
        assert!(empty.contains("color:black;font-weight:bold;"));
    }

    #[test]
    fn test_fragment_lists_messages_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let html = html_fragment(&sample_summary());
        let add = html.find("2 == 2").ok_or("missing first pass message")?;
        let flag = html.find("PASS flag").ok_or("missing second pass message")?;
        let mul = html.find("7 != 6").ok_or("missing fail message")?;
        assert!(add < flag);
        assert!(flag < mul);
        assert!(html.contains("<div style=\"color:red;font-weight:bold;\">FAIL mul"));
        Ok(())
    }

    #[test]
    fn test_fragment_escapes_message_text() {
        let summary = RunSummary {
            pass_count: 1,
            fail_count: 0,
            total_count: 1,
            pass_messages: vec!["PASS markup - assert: <b>&\"quoted\"</b>".to_string()],
            fail_messages: vec![],
        };
        let html = html_fragment(&summary);
        assert!(html.contains("&lt;b&gt;&amp;&quot;quoted&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_document_wraps_fragment() {
        let html = html_document(&sample_summary());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Passed tests: 2"));
        assert!(html.contains("Generated at "));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_renderer_writes_document() -> Result<(), RenderError> {
        let mut renderer = HtmlRenderer::new(Vec::new());
        renderer.write_document(&sample_summary())?;
        let written = String::from_utf8_lossy(&renderer.into_inner()).into_owned();
        assert!(written.contains("Total tests: 3"));
        Ok(())
    }

    #[test]
    fn test_render_sink_impl_writes() {
        let mut renderer = HtmlRenderer::new(Vec::new());
        renderer.render(&sample_summary());
        let written = String::from_utf8_lossy(&renderer.into_inner()).into_owned();
        assert!(written.contains("Failed tests: 1"));
    }
}
