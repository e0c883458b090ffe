mod career;
mod config;
mod errors;
mod job_search;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::career::recommender::{JobRecommender, LiveJobRecommender, LlmJobRecommender};
use crate::config::{Config, JobSource};
use crate::job_search::JSearchClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Bot v{}", env!("CARGO_PKG_VERSION"));

    for key in config.missing_keys() {
        warn!("{key} is not set; calls needing it will fail at request time");
    }

    let timeout = Duration::from_secs(config.http_timeout_secs);

    // Initialize LLM client
    let llm = LlmClient::new(
        config.chat_api_url.clone(),
        config.openrouter_api_key.clone(),
        config.chat_model.clone(),
        timeout,
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize job sourcing strategy
    let recommender: Arc<dyn JobRecommender> = match config.job_source {
        JobSource::Llm => Arc::new(LlmJobRecommender::new(
            llm.clone(),
            config.job_location.clone(),
        )),
        JobSource::Live => {
            let search = JSearchClient::new(
                config.jsearch_base_url.clone(),
                config.jsearch_api_key.clone(),
                config.jsearch_host.clone(),
                config.job_country.clone(),
                config.job_search_mode,
                timeout,
            )?;
            info!("Job search initialized (mode: {:?})", config.job_search_mode);
            Arc::new(LiveJobRecommender::new(
                Arc::new(search),
                config.job_location.clone(),
            ))
        }
    };
    info!(
        "Job recommender: {} (location: {})",
        recommender.backend(),
        config.job_location
    );

    let port = config.port;

    // Build app state
    let state = AppState {
        llm,
        config: Arc::new(config),
        recommender,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
