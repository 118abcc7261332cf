//! Netpilot Core Library
//!
//! Core functionality for the netpilot network configuration co-pilot.
//!
//! # Features
//! - Keyword-overlap retrieval over a small network knowledge base
//! - Gemini `generateContent` client with tolerant response decoding
//! - Prompt assembly that grounds a natural-language intent in retrieved context

pub mod config;
pub mod error;
pub mod knowledge;
pub mod llm;
pub mod pipeline;

pub use config::{Config, GeminiConfig};
pub use error::{Error, NetpilotError, Result};
pub use knowledge::{KnowledgeBase, ScoredSnippet, DEFAULT_TOP_K};
pub use llm::{
    parse_generation_response, GeminiClient, GenerationOutcome, TextGenerator,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
pub use pipeline::{configure, NetworkConfigurator, REPORT_MAX_TOKENS};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "netpilot";

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
