//! LLM trait definitions

use super::GenerationOutcome;
use async_trait::async_trait;

/// Single-shot text generation
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt, capped at `max_tokens` output tokens
    async fn generate(&self, prompt: &str, max_tokens: u32) -> GenerationOutcome;

    /// Get model name
    fn model_name(&self) -> &str;
}
