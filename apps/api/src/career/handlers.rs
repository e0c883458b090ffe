//! Axum route handlers for the career assistant.

use std::io::ErrorKind;
use std::path::Path;


use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use tracing::info;

use crate::career::pipeline::{CareerAdvice, CareerPipeline};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    pub user_input: String,
}

/// POST /career-bot
///
/// Runs the full pipeline. Always 200: failed stages show up as degraded
/// fields in the body, not as an error status.
pub async fn handle_career_bot(
    State(state): State<AppState>,
    Json(request): Json<CareerRequest>,
) -> Json<CareerAdvice> {
    info!(chars = request.user_input.len(), "Career advice requested");

    let pipeline = CareerPipeline {
        llm: &state.llm,
        recommender: state.recommender.as_ref(),
        strict_category: state.config.strict_category,
    };

    Json(pipeline.run(&request.user_input).await)
}

/// GET /
///
/// Serves the static homepage from the templates directory.
/// A missing file is a 404; any other read failure is a 500.
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = Path::new(&state.config.templates_dir).join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::NotFound(format!(
            "Homepage {} missing",
            path.display()
        ))),
        Err(e) => Err(AppError::Internal(anyhow::Error::new(e).context(format!(
            "Failed to read homepage {}",
            path.display()
        )))),
    }
}
