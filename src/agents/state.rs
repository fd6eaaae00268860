use serde::Serialize;

use super::messages::Message;
use super::types::WorkerStatus;

/// Per-worker bookkeeping maintained by the orchestrator
///
/// Exactly one `WorkerState` exists per registered worker, keyed by worker
/// name. Status transitions are driven solely by the orchestrator and
/// return to `Idle` after every subtask attempt, success or failure.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerState {
    pub status: WorkerStatus,
    /// Most recent message delivered to this worker's inbox
    pub last_message: Option<Message>,
    pub tasks_completed: u32,
    pub errors: Vec<String>,
}

impl Default for WorkerState {
    fn default() -> Self {
        Self {
            status: WorkerStatus::Idle,
            last_message: None,
            tasks_completed: 0,
            errors: Vec::new(),
        }
    }
}

/// One row of the status snapshot: the worker's state joined with its
/// static capability list
#[derive(Debug, Clone, Serialize)]
pub struct WorkerReport {
    pub status: WorkerStatus,
    pub last_message: Option<Message>,
    pub tasks_completed: u32,
    pub errors: Vec<String>,
    pub capabilities: Vec<String>,
}

impl WorkerReport {
    pub fn new(state: &WorkerState, capabilities: Vec<String>) -> Self {
        Self {
            status: state.status,
            last_message: state.last_message.clone(),
            tasks_completed: state.tasks_completed,
            errors: state.errors.clone(),
            capabilities,
        }
    }
}
