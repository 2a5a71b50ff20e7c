pub mod openai_provider;
pub mod types;

pub use openai_provider::OpenAiProvider;
pub use types::*;

use crate::shared::config::{resolve_api_key, LlmConfig};
use std::sync::Arc;

/// Build the configured provider. `Ok(None)` when no API key is available.
pub fn build_provider(config: &LlmConfig) -> Result<Option<Arc<dyn LlmProvider>>, LlmError> {
    let Some(api_key) = resolve_api_key(config) else {
        tracing::warn!("LLM API key is missing, AI summaries are disabled");
        return Ok(None);
    };

    match config.provider.as_str() {
        "openai" => {
            let provider = if config.endpoint.trim().is_empty() {
                OpenAiProvider::new(
                    api_key,
                    config.model.clone(),
                    config.temperature,
                    config.max_tokens,
                )
            } else {
                OpenAiProvider::new_with_endpoint(
                    config.endpoint.clone(),
                    api_key,
                    config.model.clone(),
                    config.temperature,
                    config.max_tokens,
                )
            };
            tracing::info!("LLM provider: {} ({})", provider.provider_name(), config.model);
            Ok(Some(Arc::new(provider)))
        }
        other => Err(LlmError::UnsupportedProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_provider_with_key() {
        let config = LlmConfig {
            api_key: "sk-test".into(),
            ..Default::default()
        };
        let provider = build_provider(&config).unwrap().unwrap();
        assert_eq!(provider.provider_name(), "OpenAI");

        let config = LlmConfig {
            api_key: "sk-test".into(),
            endpoint: "http://localhost:11434/v1".into(),
            ..Default::default()
        };
        assert!(build_provider(&config).unwrap().is_some());
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let config = LlmConfig {
            provider: "gemini".into(),
            api_key: "key".into(),
            ..Default::default()
        };
        assert!(matches!(
            build_provider(&config),
            Err(LlmError::UnsupportedProvider(p)) if p == "gemini"
        ));
    }
}
