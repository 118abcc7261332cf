//! Terminal output formatter

use super::Report;
use netpilot_core::ScoredSnippet;

pub fn format_report(report: &Report<'_>) -> String {
    format!(
        "📝 Configuration Output\n\n{}\n",
        report.outcome.display_text()
    )
}

pub fn format_snippets(snippets: &[ScoredSnippet<'_>]) -> String {
    if snippets.is_empty() {
        return "No matching snippets\n".to_string();
    }

    let mut output = String::new();
    for (i, s) in snippets.iter().enumerate() {
        output.push_str(&format!("{}. [score {}] {}\n", i + 1, s.score, s.text));
    }
    output
}
