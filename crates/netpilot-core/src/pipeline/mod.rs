//! Intent-to-configuration pipeline
//!
//! Retrieves grounding snippets for an intent, assembles the report prompt,
//! and delegates to a [`TextGenerator`]. Stateless apart from the read-only
//! knowledge base, so one configurator can serve many requests.

mod prompt;

pub use prompt::build_prompt;

use crate::config::{Config, GeminiConfig};
use crate::error::{NetpilotError, Result};
use crate::knowledge::{KnowledgeBase, DEFAULT_TOP_K};
use crate::llm::{GeminiClient, GenerationOutcome, TextGenerator};
use std::sync::Arc;

/// Output token cap for configuration reports
pub const REPORT_MAX_TOKENS: u32 = 350;

/// Turns network intents into generated configuration reports
pub struct NetworkConfigurator {
    generator: Arc<dyn TextGenerator>,
    knowledge: KnowledgeBase,
}

impl NetworkConfigurator {
    /// Create from a generator and knowledge base
    pub fn new(generator: Arc<dyn TextGenerator>, knowledge: KnowledgeBase) -> Self {
        Self {
            generator,
            knowledge,
        }
    }

    /// Create from configuration, resolving the API key from env or file
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .resolve_api_key()
            .ok_or(NetpilotError::MissingApiKey(crate::API_KEY_ENV))?;
        let client = GeminiClient::new(config.gemini.clone().with_api_key(api_key))?;
        Ok(Self::new(Arc::new(client), config.knowledge_base()))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    /// Retrieved snippets joined by single spaces (empty when nothing matches)
    pub fn build_context(&self, intent: &str) -> String {
        self.knowledge.retrieve(intent, DEFAULT_TOP_K).join(" ")
    }

    /// Full prompt for an intent
    pub fn prompt_for(&self, intent: &str) -> String {
        build_prompt(intent, &self.build_context(intent))
    }

    /// Generate a configuration report for an intent
    pub async fn run(&self, intent: &str) -> GenerationOutcome {
        self.run_with_max_tokens(intent, REPORT_MAX_TOKENS).await
    }

    /// Generate a configuration report with an explicit output token cap
    pub async fn run_with_max_tokens(&self, intent: &str, max_tokens: u32) -> GenerationOutcome {
        let prompt = self.prompt_for(intent);
        tracing::debug!("Assembled prompt of {} chars", prompt.len());
        self.generator.generate(&prompt, max_tokens).await
    }

    /// Generate a report and render the outcome as display text
    pub async fn run_to_text(&self, intent: &str) -> String {
        self.run(intent).await.display_text()
    }
}

/// One-shot helper: configure an intent against the default Gemini endpoint.
///
/// Construction failures are rendered the same way as transport failures.
pub async fn configure(api_key: &str, intent: &str, knowledge: &KnowledgeBase) -> String {
    match GeminiClient::new(GeminiConfig::default().with_api_key(api_key)) {
        Ok(client) => NetworkConfigurator::new(Arc::new(client), knowledge.clone())
            .run_to_text(intent)
            .await,
        Err(e) => GenerationOutcome::TransportError(e.to_string()).display_text(),
    }
}
