// Agent orchestration engine
//
// Decomposes incoming tasks into ordered subtasks, routes each subtask to
// the best-suited worker by capability score, and records all cross-worker
// communication in an append-only log.

pub mod crew;
pub mod decompose;
pub mod errors;
pub mod messages;
pub mod orchestrator;
pub mod scoring;
pub mod state;
pub mod types;
pub mod worker;

// Re-export main types
pub use errors::{AgentError, AgentResult};
pub use messages::{Message, MessageKind};
pub use orchestrator::Orchestrator;
pub use state::{WorkerReport, WorkerState};
pub use types::{Subtask, SubtaskCategory, SubtaskResult, Task, TaskKind, WorkerStatus};
pub use worker::{ExecutionReport, Worker, WorkerProfile};
