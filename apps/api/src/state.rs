use std::sync::Arc;

use crate::config::Config;
use crate::interview::session::SessionStore;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: `LlmClient` against Groq; tests use a scripted client.
    pub llm: Arc<dyn CompletionClient>,
    /// Interview progress, one record per session id.
    pub sessions: SessionStore,
    pub config: Config,
}
