pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::career::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::handle_home))
        .route("/health", get(health::health_handler))
        .route("/career-bot", post(handlers::handle_career_bot))
        .nest_service("/static", static_files)
        .with_state(state)
}
