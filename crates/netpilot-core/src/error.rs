//! Error types for netpilot

use thiserror::Error;

/// Result type alias using NetpilotError
pub type Result<T> = std::result::Result<T, NetpilotError>;

/// Error type alias for convenience
pub type Error = NetpilotError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for netpilot
#[derive(Debug, Error)]
pub enum NetpilotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} not found. Set environment variable or add api_key to the config file.")]
    MissingApiKey(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("External service error: {0}")]
    ExternalError(String),
}

impl NetpilotError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingApiKey(_) | Self::InvalidInput(_) | Self::Config(_) | Self::Yaml(_) => {
                exit_codes::INVALID_INPUT
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
