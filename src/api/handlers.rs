use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::agents::{Message, Orchestrator, SubtaskResult, Task, WorkerReport};
use crate::api::errors::ApiError;

/// Shared handle to the single orchestrator instance
///
/// One run executes at a time; the mutex serializes concurrent requests.
pub type SharedOrchestrator = Arc<Mutex<Orchestrator>>;

/// Response from a task run
#[derive(Debug, Serialize)]
pub struct TaskRunResponse {
    pub success: bool,
    pub results: Vec<SubtaskResult>,
}

/// Response wrapping the worker status snapshot
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: BTreeMap<String, WorkerReport>,
}

/// Response wrapping the full message history
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

/// Response from clearing the history
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
}

/// Submit a task for coordination
///
/// POST /api/task
pub async fn run_task(
    State(orchestrator): State<SharedOrchestrator>,
    Json(task): Json<Task>,
) -> Json<TaskRunResponse> {
    let results = orchestrator.lock().await.run_task(task, "system").await;
    Json(TaskRunResponse {
        success: true,
        results,
    })
}

/// Current status of all workers
///
/// GET /api/status
pub async fn get_status(State(orchestrator): State<SharedOrchestrator>) -> Json<StatusResponse> {
    let status = orchestrator.lock().await.status();
    Json(StatusResponse { status })
}

/// Full inter-worker message history
///
/// GET /api/messages
pub async fn get_messages(
    State(orchestrator): State<SharedOrchestrator>,
) -> Json<MessagesResponse> {
    let messages = orchestrator.lock().await.message_history().to_vec();
    Json(MessagesResponse { messages })
}

/// Truncate the message history
///
/// POST /api/clear
pub async fn clear_history(State(orchestrator): State<SharedOrchestrator>) -> Json<ClearResponse> {
    orchestrator.lock().await.clear_history();
    Json(ClearResponse { success: true })
}

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// JSON 404 for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
