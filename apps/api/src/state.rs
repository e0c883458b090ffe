use std::sync::Arc;

use crate::career::recommender::JobRecommender;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Arc<Config>,
    /// Job sourcing strategy. Chosen once at startup via JOB_SOURCE.
    pub recommender: Arc<dyn JobRecommender>,
}
