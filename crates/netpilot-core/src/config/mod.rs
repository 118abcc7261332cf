//! Configuration management

use crate::error::{NetpilotError, Result};
use crate::knowledge::KnowledgeBase;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Gemini service configuration
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Replacement knowledge snippets (built-in network snippets when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<Vec<String>>,
}

/// Gemini generateContent service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key stored in the config file; `GEMINI_API_KEY` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the generative language service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name used in the request path
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Full URL of the `generateContent` method for the configured model
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Copy of this config carrying an explicit API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    std::env::var("NETPILOT_GEMINI_ENDPOINT")
        .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string())
}

fn default_model() -> String {
    std::env::var("NETPILOT_GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash-lite".to_string())
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load config from a specific path, falling back to defaults when missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            config.validate()?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path (`NETPILOT_CONFIG` overrides the platform location)
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("NETPILOT_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Resolve the API key: environment first, then the config file
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(crate::API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.gemini
                    .api_key
                    .clone()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    /// Knowledge base described by this config
    pub fn knowledge_base(&self) -> KnowledgeBase {
        match &self.knowledge {
            Some(snippets) => KnowledgeBase::new(snippets.clone()),
            None => KnowledgeBase::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.gemini.model.trim().is_empty() {
            return Err(NetpilotError::Config("gemini.model must not be empty".into()));
        }
        if self.gemini.timeout_secs == 0 {
            return Err(NetpilotError::Config(
                "gemini.timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_content_url() {
        let config = GeminiConfig {
            endpoint: "https://example.test/".to_string(),
            model: "gemini-2.0-flash-lite".to_string(),
            ..GeminiConfig::default()
        };
        assert_eq!(
            config.generate_content_url(),
            "https://example.test/v1beta/models/gemini-2.0-flash-lite:generateContent"
        );
    }

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.yml")).unwrap();
        assert!(config.knowledge.is_none());
        assert_eq!(config.knowledge_base().len(), 4);
    }

    #[test]
    fn test_save_and_load_roundtrip_keeps_knowledge() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yml");

        let config = Config {
            gemini: GeminiConfig::default().with_api_key("secret"),
            knowledge: Some(vec!["BGP peers need explicit neighbor statements.".into()]),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(loaded.knowledge_base().len(), 1);
    }

    #[test]
    fn test_partial_yaml_uses_field_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "gemini:\n  model: gemini-2.5-flash\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.gemini.model, "gemini-2.5-flash");
        assert_eq!(loaded.gemini.timeout_secs, 30);
    }

    #[test]
    fn test_temperature_key_is_not_configurable() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "gemini:\n  temperature: 0.9\n  timeout_secs: 5\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.gemini.timeout_secs, 5);
        let yaml = serde_yaml::to_string(&loaded).unwrap();
        assert!(!yaml.contains("temperature"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "gemini:\n  timeout_secs: 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, NetpilotError::Config(_)));
    }

    #[test]
    fn test_empty_knowledge_list_is_kept() {
        let config = Config {
            knowledge: Some(vec![]),
            ..Config::default()
        };
        assert!(config.knowledge_base().is_empty());
    }
}
