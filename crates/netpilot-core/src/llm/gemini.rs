//! HTTP client for the Gemini `generateContent` API

use super::{GenerationOutcome, TextGenerator};
use crate::config::GeminiConfig;
use crate::error::{NetpilotError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

// Every level is optional: a missing or null field means "no usable text",
// never a decode failure. Candidates and parts stay raw so that only the
// first candidate, and parts up to the first usable one, are decoded.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini client
pub struct GeminiClient {
    http_client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create new Gemini client from configuration; the API key is required
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(NetpilotError::MissingApiKey(crate::API_KEY_ENV))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(NetpilotError::Http)?;

        Ok(Self {
            http_client,
            url: config.generate_content_url(),
            api_key,
            model: config.model,
        })
    }

    /// Create a client for the default endpoint and model with an explicit key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(GeminiConfig::default().with_api_key(api_key))
    }

    /// Endpoint URL (without the key query parameter)
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, prompt: &str, max_tokens: u32) -> std::result::Result<String, String> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: super::DEFAULT_TEMPERATURE,
                max_output_tokens: max_tokens,
            },
        };

        // The key travels in the query string; strip URLs from errors so it
        // never reaches logs or display text.
        let response = self
            .http_client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| e.without_url().to_string())?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Gemini responded with HTTP {}", status);
        }

        response
            .text()
            .await
            .map_err(|e| e.without_url().to_string())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> GenerationOutcome {
        let start = Instant::now();
        tracing::info!(
            "Requesting generation from {} ({} prompt chars, max {} tokens)",
            self.model,
            prompt.len(),
            max_tokens
        );

        let outcome = match self.post(prompt, max_tokens).await {
            Ok(body) => parse_generation_response(&body),
            Err(message) => GenerationOutcome::TransportError(message),
        };

        let elapsed = start.elapsed().as_millis() as u64;
        match &outcome {
            GenerationOutcome::Success(text) => {
                tracing::debug!("Generated {} chars in {}ms", text.len(), elapsed)
            }
            GenerationOutcome::EmptyResponse => {
                tracing::warn!("Gemini returned no usable text after {}ms", elapsed)
            }
            GenerationOutcome::TransportError(e) => {
                tracing::warn!("Gemini request failed after {}ms: {}", elapsed, e)
            }
        }

        outcome
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Decode a `generateContent` response body.
///
/// A body that is not JSON is a transport failure. Any JSON that lacks a
/// non-empty text part in the first candidate is an empty response. The
/// first such part wins and is returned trimmed.
pub fn parse_generation_response(body: &str) -> GenerationOutcome {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return GenerationOutcome::TransportError(e.to_string()),
    };

    let response: GenerateContentResponse = match serde_json::from_value(value) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Unexpected response shape: {}", e);
            return GenerationOutcome::EmptyResponse;
        }
    };

    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| serde_json::from_value::<Candidate>(candidate).ok())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| {
            parts.into_iter().find_map(|part| {
                serde_json::from_value::<CandidatePart>(part)
                    .ok()
                    .and_then(|part| part.text)
                    .filter(|text| !text.is_empty())
            })
        })
        .map(|text| GenerationOutcome::Success(text.trim().to_string()))
        .unwrap_or(GenerationOutcome::EmptyResponse)
}
