use thiserror::Error;

/// Errors that can occur inside the agent system
#[derive(Debug, Error)]
pub enum AgentError {
    /// A worker's execute call failed; renders as the bare message so the
    /// failure text surfaces verbatim in the subtask result
    #[error("{0}")]
    ExecutionFailed(String),

    #[error("failed to write document {path}: {source}")]
    DocumentWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
