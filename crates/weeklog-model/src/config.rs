//! Model provider configuration and selection.
//!
//! Built once at startup from the environment and passed into the server
//! state explicitly; nothing downstream reads env vars on its own.

use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Keys shipped in sample env files; never a real credential.
const PLACEHOLDER_KEY: &str = "your_real_key_here";

/// Model provider identifier. Both speak the OpenAI chat-completions
/// wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    OpenAI,
    Groq,
}

impl std::fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelProvider::OpenAI => write!(f, "openai"),
            ModelProvider::Groq => write!(f, "groq"),
        }
    }
}

/// Resolved external-model configuration.
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    pub preferred_provider: String,
    pub openai_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub openai_model: String,
    pub groq_model: String,
}

fn usable_key(var: &str) -> Option<String> {
    let key = std::env::var(var).ok()?;
    let trimmed = key.trim();
    if trimmed.is_empty() || trimmed.to_lowercase().contains(PLACEHOLDER_KEY) {
        return None;
    }
    Some(trimmed.to_string())
}

impl ModelConfig {
    /// Read provider keys and model overrides from the environment.
    pub fn from_env() -> Self {
        let config = Self {
            preferred_provider: std::env::var("WEEKLOG_MODEL_PROVIDER")
                .unwrap_or_else(|_| "auto".into()),
            openai_api_key: usable_key("OPENAI_API_KEY"),
            groq_api_key: usable_key("GROQ_API_KEY"),
            openai_model: std::env::var("WEEKLOG_OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.into()),
            groq_model: std::env::var("WEEKLOG_GROQ_MODEL")
                .unwrap_or_else(|_| DEFAULT_GROQ_MODEL.into()),
        };

        match config.resolve() {
            Some((provider, model, _)) => {
                info!("Model provider: {} ({})", provider, model);
            }
            None => info!("No model provider configured, summaries are heuristic-only"),
        }

        config
    }

    /// Resolve which provider, model, and key to use, if any.
    pub fn resolve(&self) -> Option<(ModelProvider, String, String)> {
        if self.preferred_provider != "auto" {
            return match self.preferred_provider.as_str() {
                "openai" => self
                    .openai_api_key
                    .as_ref()
                    .map(|k| (ModelProvider::OpenAI, self.openai_model.clone(), k.clone())),
                "groq" => self
                    .groq_api_key
                    .as_ref()
                    .map(|k| (ModelProvider::Groq, self.groq_model.clone(), k.clone())),
                _ => None,
            };
        }

        // Auto mode: OpenAI > Groq
        if let Some(k) = &self.openai_api_key {
            return Some((ModelProvider::OpenAI, self.openai_model.clone(), k.clone()));
        }
        if let Some(k) = &self.groq_api_key {
            return Some((ModelProvider::Groq, self.groq_model.clone(), k.clone()));
        }

        None
    }

    pub fn is_configured(&self) -> bool {
        self.resolve().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_keys(openai: Option<&str>, groq: Option<&str>) -> ModelConfig {
        ModelConfig {
            preferred_provider: "auto".into(),
            openai_api_key: openai.map(str::to_string),
            groq_api_key: groq.map(str::to_string),
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            groq_model: DEFAULT_GROQ_MODEL.into(),
        }
    }

    #[test]
    fn test_auto_prefers_openai() {
        let config = config_with_keys(Some("sk-abc"), Some("gsk-xyz"));
        let (provider, model, key) = config.resolve().unwrap();
        assert_eq!(provider, ModelProvider::OpenAI);
        assert_eq!(model, DEFAULT_OPENAI_MODEL);
        assert_eq!(key, "sk-abc");
    }

    #[test]
    fn test_explicit_preference_without_key_is_unconfigured() {
        let mut config = config_with_keys(Some("sk-abc"), None);
        config.preferred_provider = "groq".into();
        assert!(config.resolve().is_none());
        assert!(!config.is_configured());
    }

    #[test]
    fn test_no_keys_means_unconfigured() {
        assert!(!config_with_keys(None, None).is_configured());
    }
}
