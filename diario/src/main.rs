use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diario::api::{create_router, AppState};
use diario::config::Config;
use diario::db::{ConversationStore, Database, DatabaseBackend, LibSqlBackend};
use diario::llm::LlmProvider;

#[derive(Parser)]
#[command(name = "diario")]
#[command(about = "Diary and chat backend with LLM personality analysis")]
struct Args {
    /// Listen on this port instead of DIARIO_PORT
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diario=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Initializing document store...");
    let documents = Arc::new(LibSqlBackend::new(Database::new(&config.database).await?));
    let db: Arc<dyn DatabaseBackend> = documents.clone();

    let conversations: Arc<dyn ConversationStore> =
        match config.conversations.resolve(&config.database) {
            Some(store_config) => {
                tracing::info!("Initializing conversation store: {}...", store_config.url);
                Arc::new(LibSqlBackend::new(
                    Database::new_conversation_store(&store_config).await?,
                ))
            }
            None => documents,
        };

    if let Some(llm_config) = &config.llm {
        tracing::info!("Initializing LLM provider: {}...", llm_config.model);
    }
    let llm = LlmProvider::new(config.llm.as_ref());
    if !llm.is_available() {
        tracing::warn!("LLM unavailable - chat, analysis and advice requests will fail");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, db, conversations, llm);
    let app = create_router(state);

    tracing::info!("Diario starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
