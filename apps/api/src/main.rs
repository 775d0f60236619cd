mod analysis;
mod config;
mod credentials;
mod errors;
mod llm_client;
mod metadata;
mod rewrite;
mod routes;
mod state;
mod suggest;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting prompt coach v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(
        &config.anthropic_base_url,
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );
    if config.anthropic_api_key.is_none() {
        info!("No ANTHROPIC_API_KEY set; requests without api_key use heuristic fallbacks");
    }

    let state = AppState {
        llm: Arc::new(llm),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
