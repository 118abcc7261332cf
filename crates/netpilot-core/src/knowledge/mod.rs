//! Network knowledge base
//!
//! A fixed, ordered set of short facts used to ground generation. The
//! collection is built once and never mutated, so a single instance can be
//! shared across requests without locking.

mod retriever;

pub use retriever::{score, tokenize, ScoredSnippet, DEFAULT_TOP_K};

/// Built-in snippets, in retrieval tie-break order
pub const NETWORK_SNIPPETS: &[&str] = &[
    "VPN setup requires defining tunnel interfaces, encryption, and peer IPs.",
    "ACLs should be applied carefully to avoid blocking legitimate traffic.",
    "Routing updates need proper redistribution to prevent loops.",
    "Device commands must match OS syntax (Cisco IOS, Juniper Junos, etc.).",
];

/// Immutable, ordered collection of knowledge snippets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    snippets: Vec<String>,
}

impl KnowledgeBase {
    /// Create a knowledge base from custom snippets (may be empty)
    pub fn new<I, S>(snippets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            snippets: snippets.into_iter().map(Into::into).collect(),
        }
    }

    /// The four built-in networking snippets
    pub fn network_defaults() -> Self {
        Self::new(NETWORK_SNIPPETS.iter().copied())
    }

    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::network_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.len(), 4);
        assert!(kb.snippets()[0].starts_with("VPN setup"));
        assert!(kb.snippets()[3].starts_with("Device commands"));
    }

    #[test]
    fn test_empty_knowledge_base() {
        let kb = KnowledgeBase::new(Vec::<String>::new());
        assert!(kb.is_empty());
        assert!(kb.retrieve("vpn", DEFAULT_TOP_K).is_empty());
    }
}
