use chrono::{DateTime, Local};

/// Stable identifier for a task, assigned at creation and never reused
/// within a session. Operations target tasks by id so they stay correct
/// under any active sort/filter view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u64);

/// Display ordering for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Insertion order (the underlying storage order)
    #[default]
    Insertion,
    /// Ascending by task text, case-folded; ties keep insertion order
    ByName,
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: TaskId,
    /// Display text. Empty is rejected at creation but can exist after an edit.
    pub text: String,
    pub completed: bool,
    /// When the task was added (display only)
    pub created: DateTime<Local>,
}

impl TaskItem {
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        TaskItem {
            id,
            text,
            completed: false,
            created: Local::now(),
        }
    }
}
