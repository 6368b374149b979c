// Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Once};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use diario::api::{create_router, AppState};
use diario::config::{Config, ConversationStoreConfig, DatabaseConfig, LlmConfig, ServerConfig};
use diario::db::{ConversationStore, Database, DatabaseBackend, LibSqlBackend};
use diario::llm::LlmProvider;

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "r1-1776",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }]
    })
}

pub fn api_error_body(message: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "type": "invalid_request_error",
            "param": serde_json::Value::Null,
            "code": "invalid_request"
        }
    })
}

/// Mount a chat-completion mock answering every request with `content`.
pub async fn mock_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

/// Mount a chat-completion mock that always fails without retrying.
pub async fn mock_completion_failure(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(api_error_body("Invalid model")))
        .mount(server)
        .await;
}

pub fn llm_config(base_url: String) -> LlmConfig {
    LlmConfig {
        model: "perplexity/r1-1776".to_string(),
        api_key: Some("test-key".to_string()),
        base_url: Some(base_url),
        timeout_secs: 5,
        max_retries: 0,
    }
}

pub struct TestApp {
    pub router: Router,
    pub db: Arc<dyn DatabaseBackend>,
    pub conversations: Arc<dyn ConversationStore>,
    _dir: TempDir,
}

impl TestApp {
    /// App backed by a fresh on-disk database. Conversations get their own
    /// file when `separate_conversations` is set.
    pub async fn new(llm: Option<LlmConfig>, separate_conversations: bool) -> Self {
        init_test_logger();
        let dir = tempfile::tempdir().expect("tempdir");

        let database = DatabaseConfig {
            url: format!("file:{}", dir.path().join("documents.db").display()),
            auth_token: None,
            local_path: None,
        };
        let conversations = ConversationStoreConfig {
            url: separate_conversations
                .then(|| format!("file:{}", dir.path().join("conversations.db").display())),
            auth_token: None,
        };
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: database.clone(),
            conversations,
            llm,
        };

        let documents = Arc::new(LibSqlBackend::new(
            Database::new(&database).await.expect("document store"),
        ));
        let db: Arc<dyn DatabaseBackend> = documents.clone();
        let conversations: Arc<dyn ConversationStore> =
            match config.conversations.resolve(&config.database) {
                Some(store) => Arc::new(LibSqlBackend::new(
                    Database::new_conversation_store(&store)
                        .await
                        .expect("conversation store"),
                )),
                None => documents,
            };

        let llm = LlmProvider::new(config.llm.as_ref());
        let state = AppState::new(config, db.clone(), conversations.clone(), llm);

        Self {
            router: create_router(state),
            db,
            conversations,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
    }
}
