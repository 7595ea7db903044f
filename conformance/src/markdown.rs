//! Markdown and HTML renderings of a [`ValidationResult`].

use std::fmt::Write as _;

use pulldown_cmark::{html, Event, Options, Parser};

use crate::report::ValidationResult;

/// Title line of every validation report.
pub const REPORT_TITLE: &str = "# Fractal Field Validation Report";

/// Renders `result` as a markdown document.
///
/// Layout: the title, a blank line, the summary, a blank line, then one
/// block per field result in order (`## ✅|❌ <name>`, a petal count bullet,
/// an optional `- Issues:` bullet with one nested bullet per detail) each
/// followed by a blank line.
pub fn generate_validation_report(result: &ValidationResult) -> String {
    let mut report = String::new();
    let _ = write!(report, "{}\n\n{}\n\n", REPORT_TITLE, result.summary);

    for field in &result.field_results {
        let status = if field.is_complete { "✅" } else { "❌" };
        let _ = writeln!(report, "## {} {}", status, field.field_name);
        let _ = writeln!(
            report,
            "- Petals: {}/{}",
            field.petal_count, field.expected_petal_count
        );

        if !field.incomplete_details.is_empty() {
            report.push_str("- Issues:\n");
            for detail in &field.incomplete_details {
                let _ = writeln!(report, "  - {}", detail);
            }
        }

        report.push('\n');
    }

    report
}

/// Renders `result` as an HTML fragment via its markdown report.
///
/// Names come from untrusted input, so raw HTML in the report (including
/// the `<unnamed>` placeholder) is emitted as escaped text.
pub fn render_report_html(result: &ValidationResult) -> String {
    markdown_to_html(&generate_validation_report(result))
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}
