use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Provider used by every orchestrator. `LlmClient` in production.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}

impl AppState {
    /// The process-wide default credential, if configured.
    pub fn default_api_key(&self) -> Option<&str> {
        self.config.anthropic_api_key.as_deref()
    }
}
