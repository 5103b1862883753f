use crate::model::input::InputBuffer;
use crate::model::task::{SortMode, TaskId, TaskItem};

/// In-progress edit of a single task's text
#[derive(Debug, Clone)]
pub struct EditState {
    /// The task being edited
    pub target: TaskId,
    /// Draft text, seeded from the task's current text
    pub draft: InputBuffer,
}

/// The task collection plus its view settings.
///
/// Holds the insertion-ordered task storage, the pending-input buffer, the
/// optional edit state, and the sort/filter settings. Mutations and the
/// display projection live in [`crate::ops::list_ops`]; nothing here
/// survives the process.
#[derive(Debug, Clone)]
pub struct TaskList {
    pub(crate) items: Vec<TaskItem>,
    next_id: u64,
    /// Buffer for the next task to add
    pub pending: InputBuffer,
    pub(crate) editing: Option<EditState>,
    pub(crate) show_completed: bool,
    pub(crate) sort_mode: SortMode,
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList {
            items: Vec::new(),
            next_id: 0,
            pending: InputBuffer::new(),
            editing: None,
            show_completed: true,
            sort_mode: SortMode::Insertion,
        }
    }
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Tasks in underlying (insertion) order
    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// The current edit state, if a task is being edited
    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditState> {
        self.editing.as_mut()
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskItem> {
        self.items.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut TaskItem> {
        self.items.iter_mut().find(|t| t.id == id)
    }

    pub(crate) fn position_of(&self, id: TaskId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    pub(crate) fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Count of tasks not yet completed
    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Count of completed tasks
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }
}
