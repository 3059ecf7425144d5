use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one upstream client. Default: `LlmClient` (Gemini). Tests swap in stubs.
    pub llm: Arc<dyn TextGenerator>,
}
