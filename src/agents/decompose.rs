//! Task decomposition into an ordered subtask queue

use super::types::{Subtask, SubtaskCategory, Task, TaskKind};

/// The fixed subtask plan: category, description, queue priority
///
/// Design and content share priority 2; the stable sort in [`decompose`]
/// keeps them in this emission order.
const SUBTASK_PLAN: &[(SubtaskCategory, &str, u8)] = &[
    (
        SubtaskCategory::Architecture,
        "Design website architecture and structure",
        1,
    ),
    (SubtaskCategory::Design, "Create visual design and UI/UX", 2),
    (
        SubtaskCategory::Content,
        "Develop content strategy and copy",
        2,
    ),
    (SubtaskCategory::Development, "Implement website features", 3),
    (SubtaskCategory::Seo, "Optimize for search engines", 4),
];

/// Expand a task into its ordered subtask queue
///
/// A composite task emits one subtask per known category; a
/// single-category task emits exactly one subtask. The result is sorted
/// ascending by priority, preserving emission order within equal
/// priorities.
pub fn decompose(task: &Task) -> Vec<Subtask> {
    let mut subtasks: Vec<Subtask> = SUBTASK_PLAN
        .iter()
        .filter(|(category, _, _)| {
            task.kind == TaskKind::WebsiteDevelopment || task.kind.as_category() == Some(*category)
        })
        .map(|(category, description, priority)| Subtask {
            category: *category,
            description: (*description).to_string(),
            priority: *priority,
        })
        .collect();

    // Vec::sort_by_key is stable, which the priority-2 ordering relies on
    subtasks.sort_by_key(|subtask| subtask.priority);
    subtasks
}
