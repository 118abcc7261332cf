//! Keyword-overlap retrieval
//!
//! Scores each snippet by how many query tokens occur inside it as plain
//! substrings. Matching is containment, not whole-word: "vpn" hits "vpning"
//! and a short token such as "on" hits many words.

use super::KnowledgeBase;

/// Default number of snippets returned by [`KnowledgeBase::retrieve`]
pub const DEFAULT_TOP_K: usize = 3;

/// A snippet paired with its overlap score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSnippet<'a> {
    pub score: usize,
    pub text: &'a str,
}

/// Lowercase, whitespace-delimited query tokens (duplicates preserved)
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Number of tokens contained in the lowercased snippet; repeats count each time
pub fn score(tokens: &[String], snippet: &str) -> usize {
    let haystack = snippet.to_lowercase();
    tokens
        .iter()
        .filter(|token| haystack.contains(token.as_str()))
        .count()
}

impl KnowledgeBase {
    /// All snippets with a positive score, best first.
    ///
    /// Ties keep collection order.
    pub fn rank(&self, query: &str) -> Vec<ScoredSnippet<'_>> {
        let tokens = tokenize(query);

        let mut scored: Vec<ScoredSnippet<'_>> = self
            .snippets()
            .iter()
            .map(|snippet| ScoredSnippet {
                score: score(&tokens, snippet),
                text: snippet.as_str(),
            })
            .filter(|s| s.score > 0)
            .collect();

        // Vec::sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Ranked {} of {} snippets for {} query tokens",
            scored.len(),
            self.len(),
            tokens.len()
        );

        scored
    }

    /// Top `k` snippet texts for a query
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<&str> {
        self.rank(query)
            .into_iter()
            .take(k)
            .map(|s| s.text)
            .collect()
    }
}
