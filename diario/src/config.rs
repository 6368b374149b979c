use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

/// Non-empty env var, so `FOO=` behaves like an unset variable.
fn env_non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub conversations: ConversationStoreConfig,
    pub llm: Option<LlmConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Document store holding diary entries and user records.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub local_path: Option<String>,
}

/// Key-value store holding per-user conversation lists.
///
/// When `url` is `None` the conversation lists share the document store.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationStoreConfig {
    pub url: Option<String>,
    pub auth_token: Option<String>,
}

impl ConversationStoreConfig {
    /// Resolve into a full database config, falling back to the document store.
    pub fn resolve(&self, documents: &DatabaseConfig) -> Option<DatabaseConfig> {
        let url = self.url.as_ref()?;
        if *url == documents.url {
            return None;
        }
        Some(DatabaseConfig {
            url: url.clone(),
            auth_token: self.auth_token.clone(),
            local_path: None,
        })
    }
}

/// LLM configuration for the chat-completion endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

pub const DEFAULT_LLM_MODEL: &str = "perplexity/r1-1776";

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("DIARIO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("DIARIO_PORT", 8000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:diario.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                local_path: env::var("DATABASE_LOCAL_PATH").ok(),
            },
            conversations: ConversationStoreConfig {
                url: env_non_empty("CONVERSATION_STORE_URL"),
                auth_token: env::var("CONVERSATION_STORE_AUTH_TOKEN").ok(),
            },
            llm: llm_config_from_env(),
        }
    }
}

fn llm_config_from_env() -> Option<LlmConfig> {
    if parse_env_opt::<bool>("LLM_DISABLED").unwrap_or(false) {
        return None;
    }

    let model = env_non_empty("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());

    Some(LlmConfig {
        model,
        api_key: env_non_empty("LLM_API_KEY").or_else(|| env_non_empty("PERPLEXITY_API_KEY")),
        base_url: env_non_empty("LLM_BASE_URL"),
        timeout_secs: parse_env_or("LLM_TIMEOUT", 30),
        max_retries: parse_env_or("LLM_MAX_RETRIES", 0),
    })
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Known LLM providers that use OpenAI-compatible APIs
pub const KNOWN_LLM_PROVIDERS: &[&str] =
    &["perplexity", "openai", "openrouter", "ollama", "lmstudio"];

/// Parse an LLM model name into (provider, model) tuple.
pub fn parse_llm_provider_model(model: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = model.split_once('/') {
        let prefix_lower = prefix.to_lowercase();
        if KNOWN_LLM_PROVIDERS.contains(&prefix_lower.as_str()) {
            return (prefix, rest);
        }
    }
    // Default to treating the whole string as a local model
    ("local", model)
}
