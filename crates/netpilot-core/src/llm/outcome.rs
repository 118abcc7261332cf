//! Generation outcomes

use crate::error::{NetpilotError, Result};
use serde::{Deserialize, Serialize};

/// Prefix used for every user-facing failure message
pub const WARNING_GLYPH: &str = "⚠️";

/// Display text for a response without usable text
pub const EMPTY_RESPONSE_TEXT: &str = "⚠️ Gemini API returned no usable text.";

/// Result of one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Generated text, trimmed
    Success(String),
    /// Response decoded but carried no non-empty text part
    EmptyResponse,
    /// Connection failure, timeout, or undecodable body
    TransportError(String),
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Text shown to the user
    pub fn display_text(&self) -> String {
        match self {
            Self::Success(text) => text.clone(),
            Self::EmptyResponse => EMPTY_RESPONSE_TEXT.to_string(),
            Self::TransportError(message) => {
                format!("{} Network/Request error: {}", WARNING_GLYPH, message)
            }
        }
    }

    /// Convert into a `Result`, for callers that want failures as errors
    pub fn into_result(self) -> Result<String> {
        match self {
            Self::Success(text) => Ok(text),
            Self::EmptyResponse => Err(NetpilotError::Llm(
                "Gemini API returned no usable text".to_string(),
            )),
            Self::TransportError(message) => Err(NetpilotError::ExternalError(message)),
        }
    }
}
