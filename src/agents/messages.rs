use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::Task;

/// What a log entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// An inter-worker broadcast
    #[serde(rename = "message")]
    Broadcast,
    /// A task announcement recorded at the start of a run
    #[serde(rename = "task")]
    TaskAssignment,
}

/// An immutable entry in the orchestrator's communication log
///
/// Messages are appended to the log and delivered to worker inboxes; they
/// are never mutated or removed except by `clear_history`, which truncates
/// the whole log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Present only on task announcements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl Message {
    /// Build a broadcast message from a worker or the system
    pub fn broadcast(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            sender: sender.into(),
            body: body.into(),
            kind: MessageKind::Broadcast,
            task: None,
        }
    }

    /// Build the task announcement recorded at the start of a run
    pub fn task_assignment(initiator: impl Into<String>, task: &Task) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            sender: initiator.into(),
            body: format!("TASK ASSIGNED: {}", task.description),
            kind: MessageKind::TaskAssignment,
            task: Some(task.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::types::TaskKind;

    #[test]
    fn task_assignment_carries_the_task() {
        let task = Task::new(TaskKind::Design, "Refresh the landing page");
        let message = Message::task_assignment("system", &task);

        assert_eq!(message.kind, MessageKind::TaskAssignment);
        assert_eq!(message.body, "TASK ASSIGNED: Refresh the landing page");
        assert!(message.task.is_some());
    }

    #[test]
    fn broadcast_serializes_without_task_field() {
        let message = Message::broadcast("Designer", "done");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["type"], "message");
        assert!(json.get("task").is_none());
    }
}
