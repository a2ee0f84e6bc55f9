use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream model. `GeminiClient` in production, a stub in tests.
    pub llm: Arc<dyn LanguageModel>,
    pub config: Config,
}
