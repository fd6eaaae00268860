// HTTP adapter over the orchestration engine

pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use self::handlers::SharedOrchestrator;

/// Build the API router over a shared orchestrator
pub fn router(orchestrator: SharedOrchestrator) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/task", post(handlers::run_task))
        .route("/api/status", get(handlers::get_status))
        .route("/api/messages", get(handlers::get_messages))
        .route("/api/clear", post(handlers::clear_history))
        .fallback(handlers::not_found)
        .with_state(orchestrator)
}
