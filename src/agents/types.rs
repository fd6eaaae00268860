use serde::{Deserialize, Serialize};

/// The category of work a subtask belongs to
///
/// Every subtask is scoped to exactly one category, and worker routing
/// happens per category via the capability scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtaskCategory {
    Architecture,
    Design,
    Content,
    Development,
    Seo,
}

impl std::fmt::Display for SubtaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubtaskCategory::Architecture => write!(f, "architecture"),
            SubtaskCategory::Design => write!(f, "design"),
            SubtaskCategory::Content => write!(f, "content"),
            SubtaskCategory::Development => write!(f, "development"),
            SubtaskCategory::Seo => write!(f, "seo"),
        }
    }
}

/// The type tag of an incoming task
///
/// `WebsiteDevelopment` is the composite kind that fans out into all five
/// categories; the remaining kinds map one-to-one onto a single category.
/// Unknown strings are rejected by serde at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    WebsiteDevelopment,
    Architecture,
    Design,
    Content,
    Development,
    Seo,
}

impl TaskKind {
    /// The single category this kind maps to, or `None` for the composite kind
    pub fn as_category(self) -> Option<SubtaskCategory> {
        match self {
            TaskKind::WebsiteDevelopment => None,
            TaskKind::Architecture => Some(SubtaskCategory::Architecture),
            TaskKind::Design => Some(SubtaskCategory::Design),
            TaskKind::Content => Some(SubtaskCategory::Content),
            TaskKind::Development => Some(SubtaskCategory::Development),
            TaskKind::Seo => Some(SubtaskCategory::Seo),
        }
    }
}

/// A top-level task submitted to the orchestrator
///
/// Immutable after creation and discarded once coordination completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub description: String,
    /// Free-text priority hint from the caller, not used for routing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl Task {
    /// Create a task of the given kind
    pub fn new(kind: TaskKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            priority: None,
        }
    }
}

/// One category-scoped unit of work derived from a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub category: SubtaskCategory,
    pub description: String,
    /// Queue-ordering priority; lower runs first
    pub priority: u8,
}

/// Outcome of delegating one subtask to a worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskResult {
    /// Name of the worker that handled the subtask
    pub worker: String,
    pub subtask: Subtask,
    /// Worker summary on success, the error text on failure
    pub outcome: String,
    pub success: bool,
}

/// Worker availability as tracked by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    Idle,
    Evaluating,
    Working,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_kind_maps_to_category() {
        assert_eq!(TaskKind::WebsiteDevelopment.as_category(), None);
        assert_eq!(
            TaskKind::Design.as_category(),
            Some(SubtaskCategory::Design)
        );
        assert_eq!(TaskKind::Seo.as_category(), Some(SubtaskCategory::Seo));
    }

    #[test]
    fn task_deserializes_from_wire_shape() {
        let task: Task = serde_json::from_str(
            r#"{"type":"website_development","description":"Build the site","priority":"high"}"#,
        )
        .unwrap();

        assert_eq!(task.kind, TaskKind::WebsiteDevelopment);
        assert_eq!(task.priority.as_deref(), Some("high"));
    }

    #[test]
    fn unknown_task_kind_is_rejected() {
        let result: Result<Task, _> =
            serde_json::from_str(r#"{"type":"billing","description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn category_display_matches_wire_form() {
        assert_eq!(SubtaskCategory::Architecture.to_string(), "architecture");
        assert_eq!(SubtaskCategory::Seo.to_string(), "seo");
    }
}
