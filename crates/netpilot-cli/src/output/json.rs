//! JSON output formatter

use super::Report;
use netpilot_core::ScoredSnippet;

pub fn format_report(report: &Report<'_>) -> String {
    let output = serde_json::json!({
        "intent": report.intent,
        "model": report.model,
        "context": report.context.iter().map(|s| s.text).collect::<Vec<_>>(),
        "outcome": report.outcome,
        "report": report.outcome.display_text(),
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_snippets(snippets: &[ScoredSnippet<'_>]) -> String {
    let output: Vec<serde_json::Value> = snippets
        .iter()
        .enumerate()
        .map(|(i, s)| {
            serde_json::json!({
                "rank": i + 1,
                "score": s.score,
                "text": s.text,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}
