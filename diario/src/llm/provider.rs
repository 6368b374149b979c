use std::sync::Arc;

use crate::config::{parse_llm_provider_model, LlmConfig};
use crate::error::{DiarioError, Result};
use crate::llm::api::LlmApiClient;
use crate::models::ConversationTurn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmBackend {
    Perplexity,
    OpenAI,
    OpenRouter,
    Ollama,
    LmStudio,
    OpenAICompatible { base_url: String },
    Unavailable { reason: String },
}

impl LlmBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Perplexity => "perplexity",
            Self::OpenAI => "openai",
            Self::OpenRouter => "openrouter",
            Self::Ollama => "ollama",
            Self::LmStudio => "lmstudio",
            Self::OpenAICompatible { .. } => "openai-compatible",
            Self::Unavailable { .. } => "unavailable",
        }
    }
}

#[derive(Clone)]
pub struct LlmProvider {
    backend: LlmBackend,
    config: Option<Arc<LlmConfig>>,
    client: Option<LlmApiClient>,
}

impl LlmProvider {
    pub fn new(config: Option<&LlmConfig>) -> Self {
        let Some(config) = config else {
            return Self::unavailable("No LLM configuration provided");
        };

        let (provider, _model) = parse_llm_provider_model(&config.model);

        let backend = match provider.to_lowercase().as_str() {
            "perplexity" => LlmBackend::Perplexity,
            "openai" => LlmBackend::OpenAI,
            "openrouter" => LlmBackend::OpenRouter,
            "ollama" => LlmBackend::Ollama,
            "lmstudio" => LlmBackend::LmStudio,
            _ => {
                if let Some(base_url) = &config.base_url {
                    LlmBackend::OpenAICompatible {
                        base_url: base_url.clone(),
                    }
                } else {
                    return Self::unavailable(&format!(
                        "Unknown provider in model: {}",
                        config.model
                    ));
                }
            }
        };

        match LlmApiClient::new(config) {
            Ok(client) => Self {
                backend,
                config: Some(Arc::new(config.clone())),
                client: Some(client),
            },
            Err(e) => {
                tracing::warn!(model = %config.model, error = %e, "LLM client could not be created");
                Self::unavailable(&e.to_string())
            }
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            backend: LlmBackend::Unavailable {
                reason: reason.to_string(),
            },
            config: None,
            client: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some() && !matches!(self.backend, LlmBackend::Unavailable { .. })
    }

    pub fn backend(&self) -> &LlmBackend {
        &self.backend
    }

    pub fn config(&self) -> Option<&LlmConfig> {
        self.config.as_deref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.client.as_ref().map(LlmApiClient::base_url)
    }

    /// Ask the model for the next assistant turn.
    pub async fn chat(&self, system_prompt: &str, history: &[ConversationTurn]) -> Result<String> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| DiarioError::LlmUnavailable(self.unavailable_reason()))?;

        client.chat(system_prompt, history).await
    }

    /// Like [`chat`](Self::chat), but any failure is logged and collapsed to `None`.
    pub async fn respond(&self, system_prompt: &str, history: &[ConversationTurn]) -> Option<String> {
        match self.chat(system_prompt, history).await {
            Ok(answer) => Some(answer),
            Err(e) => {
                tracing::error!(error = %e, backend = self.backend.name(), "LLM call failed");
                None
            }
        }
    }

    fn unavailable_reason(&self) -> String {
        match &self.backend {
            LlmBackend::Unavailable { reason } => reason.clone(),
            _ => "LLM client is not initialized".to_string(),
        }
    }
}
