//! Markdown output formatter

use super::Report;
use netpilot_core::ScoredSnippet;

pub fn format_report(report: &Report<'_>) -> String {
    let mut output = String::from("## Configuration Output\n\n");
    output.push_str(&format!("- **Intent**: {}\n", report.intent));
    output.push_str(&format!("- **Model**: `{}`\n", report.model));
    output.push_str("- **Context**:\n");
    if report.context.is_empty() {
        output.push_str("  - *none*\n");
    }
    for s in &report.context {
        output.push_str(&format!("  - {}\n", s.text));
    }
    output.push_str("\n---\n\n");
    output.push_str(&report.outcome.display_text());
    output.push('\n');
    output
}

pub fn format_snippets(snippets: &[ScoredSnippet<'_>]) -> String {
    let mut output = String::from("# Knowledge Snippets\n\n");

    for (i, s) in snippets.iter().enumerate() {
        output.push_str(&format!("{}. {} (Score: {})\n", i + 1, s.text, s.score));
    }

    if snippets.is_empty() {
        output.push_str("*No matching snippets*\n");
    }

    output
}
