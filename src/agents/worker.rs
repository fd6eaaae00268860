use std::path::Path;

use async_trait::async_trait;

use super::errors::{AgentError, AgentResult};
use super::messages::Message;
use super::scoring;
use super::types::{Subtask, SubtaskCategory, Task};

/// What a worker hands back after executing a subtask
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    /// One-line summary, recorded as the subtask outcome
    pub summary: String,
    /// Relative paths of documents the worker produced
    pub documents: Vec<String>,
}

impl ExecutionReport {
    pub fn new(summary: impl Into<String>, documents: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            documents,
        }
    }
}

/// A specialized worker coordinated by the orchestrator
///
/// Concrete workers differ only in their generated artifacts; all
/// coordination logic lives in the orchestrator. Workers never execute
/// concurrently, so implementations are free to hold mutable state across
/// await points.
#[async_trait]
pub trait Worker: Send {
    fn name(&self) -> &str;

    /// Free-text role label, matched against category keywords
    fn role(&self) -> &str;

    fn capabilities(&self) -> &[String];

    /// Suitability score for a subtask category, 0 or 10
    fn can_handle(&self, category: SubtaskCategory) -> u8 {
        scoring::score(self.role(), self.capabilities(), category)
    }

    /// Task-announcement hook, invoked once per run before any delegation
    ///
    /// Returns an announcement for the orchestrator to broadcast on the
    /// worker's behalf, or `None` to stay quiet. The default announces the
    /// worker's expertise when the task's own kind is a category it can
    /// handle, so composite tasks produce no announcements.
    async fn evaluate_task(&mut self, task: &Task) -> Option<String> {
        let category = task.kind.as_category()?;
        if self.can_handle(category) > 0 {
            Some(format!(
                "I can help with this task! My expertise: {}",
                self.capabilities().join(", ")
            ))
        } else {
            None
        }
    }

    /// Execute one subtask; failures are isolated to that subtask
    async fn execute(&mut self, subtask: &Subtask) -> AgentResult<ExecutionReport>;

    /// Deliver a broadcast message to this worker's inbox
    fn receive_message(&mut self, message: Message);
}

/// Identity and inbox fields shared by concrete workers
#[derive(Debug, Clone)]
pub struct WorkerProfile {
    pub name: String,
    pub role: String,
    pub capabilities: Vec<String>,
    pub inbox: Vec<Message>,
}

impl WorkerProfile {
    pub fn new(name: &str, role: &str, capabilities: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            inbox: Vec::new(),
        }
    }
}

/// Write a generated document under the output root, creating parent
/// directories as needed
pub async fn write_document(root: &Path, relative: &str, content: &str) -> AgentResult<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| AgentError::DocumentWrite {
                path: relative.to_string(),
                source,
            })?;
    }
    tokio::fs::write(&path, content)
        .await
        .map_err(|source| AgentError::DocumentWrite {
            path: relative.to_string(),
            source,
        })
}
