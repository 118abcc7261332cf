//! Output formatters

pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use netpilot_core::{GenerationOutcome, ScoredSnippet};

/// Everything rendered for one generate call
pub struct Report<'a> {
    pub intent: &'a str,
    pub model: &'a str,
    pub context: Vec<ScoredSnippet<'a>>,
    pub outcome: &'a GenerationOutcome,
}

/// Format a configuration report
pub fn format_report(report: &Report<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Md => markdown::format_report(report),
        OutputFormat::Cli => terminal::format_report(report),
    }
}

/// Format ranked snippets
pub fn format_snippets(snippets: &[ScoredSnippet<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_snippets(snippets),
        OutputFormat::Md => markdown::format_snippets(snippets),
        OutputFormat::Cli => terminal::format_snippets(snippets),
    }
}
