//! LLM integration
//!
//! Provides:
//! - The [`TextGenerator`] trait used by the configuration pipeline
//! - A Gemini `generateContent` client
//! - A closed [`GenerationOutcome`] type in place of sentinel strings

mod gemini;
mod outcome;
mod traits;

pub use gemini::{parse_generation_response, GeminiClient};
pub use outcome::{GenerationOutcome, EMPTY_RESPONSE_TEXT, WARNING_GLYPH};
pub use traits::TextGenerator;

/// Default output token cap for a single generation
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Sampling temperature sent with every request
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
