use crate::model::input::InputBuffer;
use crate::model::list::{EditState, TaskList};
use crate::model::task::{SortMode, TaskId, TaskItem};

//---------------------------------------------------------------------------
// Mutations
//---------------------------------------------------------------------------

/// Append a new task to the end of the underlying order.
///
/// The exact empty string is rejected (silent no-op returning None).
/// Whitespace is not trimmed, so a whitespace-only text is accepted.
pub fn add_task(list: &mut TaskList, text: impl Into<String>) -> Option<TaskId> {
    let text = text.into();
    if text.is_empty() {
        return None;
    }
    let id = list.allocate_id();
    list.items.push(TaskItem::new(id, text));
    Some(id)
}

/// Add the pending buffer's text as a new task, clearing the buffer on
/// success. An empty buffer is a no-op and stays as it is.
pub fn commit_pending(list: &mut TaskList) -> Option<TaskId> {
    if list.pending.is_empty() {
        return None;
    }
    let text = list.pending.take();
    add_task(list, text)
}

/// Flip `completed` on the task with the given id. Returns false if the
/// id no longer exists.
pub fn toggle_completed(list: &mut TaskList, id: TaskId) -> bool {
    match list.get_mut(id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Remove exactly one task; all other tasks keep their relative order.
/// Clears edit state if the removed task was being edited. Returns false
/// if the id no longer exists.
pub fn delete_task(list: &mut TaskList, id: TaskId) -> bool {
    let Some(pos) = list.position_of(id) else {
        return false;
    };
    list.items.remove(pos);
    if list.editing.as_ref().is_some_and(|e| e.target == id) {
        list.editing = None;
    }
    true
}

//---------------------------------------------------------------------------
// Edit mode: {idle, editing(id)}
//---------------------------------------------------------------------------

/// Enter edit mode for a task, seeding the draft from its current text.
/// Beginning an edit while another is active moves the single edit
/// pointer. Returns false (staying idle) if the id no longer exists.
pub fn begin_edit(list: &mut TaskList, id: TaskId) -> bool {
    let Some(task) = list.get(id) else {
        return false;
    };
    let draft = InputBuffer::from_text(task.text.clone());
    list.editing = Some(EditState { target: id, draft });
    true
}

/// Replace the edited task's text with the draft and leave edit mode.
///
/// An empty draft is accepted: the original allows clearing a task's text
/// via edit even though add rejects empty input.
pub fn commit_edit(list: &mut TaskList) -> Option<TaskId> {
    let EditState { target, mut draft } = list.editing.take()?;
    let task = list.get_mut(target)?;
    task.text = draft.take();
    Some(target)
}

/// Leave edit mode, discarding the draft.
pub fn cancel_edit(list: &mut TaskList) {
    list.editing = None;
}

//---------------------------------------------------------------------------
// View settings
//---------------------------------------------------------------------------

pub fn toggle_show_completed(list: &mut TaskList) {
    list.show_completed = !list.show_completed;
}

/// Set the sort mode. Switching back from ByName to Insertion is a silent
/// no-op: once the list is sorted by name there is no way back within a
/// session, matching the original behavior.
pub fn set_sort_mode(list: &mut TaskList, mode: SortMode) {
    if list.sort_mode == SortMode::ByName && mode == SortMode::Insertion {
        return;
    }
    list.sort_mode = mode;
}

//---------------------------------------------------------------------------
// Display projection
//---------------------------------------------------------------------------

/// The displayed list: underlying order, stable-sorted by case-folded
/// text when ByName is active, then filtered by completed-visibility.
/// Never mutates storage; deterministic for a given state snapshot.
pub fn display_rows(list: &TaskList) -> Vec<&TaskItem> {
    let mut rows: Vec<&TaskItem> = list.items.iter().collect();
    if list.sort_mode == SortMode::ByName {
        rows.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()));
    }
    if !list.show_completed {
        rows.retain(|t| !t.completed);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(list: &TaskList) -> Vec<&str> {
        list.items().iter().map(|t| t.text.as_str()).collect()
    }

    fn displayed_texts(list: &TaskList) -> Vec<&str> {
        display_rows(list).iter().map(|t| t.text.as_str()).collect()
    }

    // --- add ---

    #[test]
    fn add_appends_uncompleted() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "Buy milk").unwrap();
        assert_eq!(list.len(), 1);
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn add_empty_is_noop() {
        let mut list = TaskList::new();
        assert_eq!(add_task(&mut list, ""), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn add_does_not_trim_whitespace() {
        let mut list = TaskList::new();
        assert!(add_task(&mut list, "   ").is_some());
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "   ");
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut list = TaskList::new();
        add_task(&mut list, "one");
        add_task(&mut list, "two");
        add_task(&mut list, "three");
        assert_eq!(texts(&list), vec!["one", "two", "three"]);
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let mut list = TaskList::new();
        let a = add_task(&mut list, "a").unwrap();
        let b = add_task(&mut list, "b").unwrap();
        assert_ne!(a, b);
        delete_task(&mut list, a);
        let c = add_task(&mut list, "c").unwrap();
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn commit_pending_adds_and_clears_buffer() {
        let mut list = TaskList::new();
        for c in "Call Bob".chars() {
            list.pending.insert_char(c);
        }
        let id = commit_pending(&mut list).unwrap();
        assert_eq!(list.get(id).unwrap().text, "Call Bob");
        assert!(list.pending.is_empty());
    }

    #[test]
    fn commit_pending_empty_is_noop() {
        let mut list = TaskList::new();
        assert_eq!(commit_pending(&mut list), None);
        assert_eq!(list.len(), 0);
    }

    // --- toggle ---

    #[test]
    fn toggle_twice_restores_state() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "task").unwrap();
        assert!(toggle_completed(&mut list, id));
        assert!(list.get(id).unwrap().completed);
        assert!(toggle_completed(&mut list, id));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "task").unwrap();
        delete_task(&mut list, id);
        assert!(!toggle_completed(&mut list, id));
    }

    // --- delete ---

    #[test]
    fn delete_removes_exactly_one() {
        let mut list = TaskList::new();
        add_task(&mut list, "one");
        let two = add_task(&mut list, "two").unwrap();
        add_task(&mut list, "three");
        assert!(delete_task(&mut list, two));
        assert_eq!(texts(&list), vec!["one", "three"]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "one").unwrap();
        delete_task(&mut list, id);
        assert!(!delete_task(&mut list, id));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn delete_clears_edit_state_for_target() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "one").unwrap();
        begin_edit(&mut list, id);
        delete_task(&mut list, id);
        assert!(list.editing().is_none());
    }

    #[test]
    fn delete_keeps_edit_state_for_other_task() {
        let mut list = TaskList::new();
        let a = add_task(&mut list, "a").unwrap();
        let b = add_task(&mut list, "b").unwrap();
        begin_edit(&mut list, a);
        delete_task(&mut list, b);
        assert_eq!(list.editing().unwrap().target, a);
    }

    // --- edit mode ---

    #[test]
    fn begin_edit_seeds_draft_from_text() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "Buy milk").unwrap();
        assert!(begin_edit(&mut list, id));
        let editing = list.editing().unwrap();
        assert_eq!(editing.target, id);
        assert_eq!(editing.draft.text(), "Buy milk");
    }

    #[test]
    fn begin_edit_switches_the_single_pointer() {
        let mut list = TaskList::new();
        let a = add_task(&mut list, "a").unwrap();
        let b = add_task(&mut list, "b").unwrap();
        begin_edit(&mut list, a);
        begin_edit(&mut list, b);
        let editing = list.editing().unwrap();
        assert_eq!(editing.target, b);
        assert_eq!(editing.draft.text(), "b");
    }

    #[test]
    fn begin_edit_unknown_id_stays_idle() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "a").unwrap();
        delete_task(&mut list, id);
        assert!(!begin_edit(&mut list, id));
        assert!(list.editing().is_none());
    }

    #[test]
    fn commit_edit_replaces_text_and_exits() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "old").unwrap();
        begin_edit(&mut list, id);
        list.editing_mut().unwrap().draft.insert_str(" text");
        assert_eq!(commit_edit(&mut list), Some(id));
        assert_eq!(list.get(id).unwrap().text, "old text");
        assert!(list.editing().is_none());
    }

    #[test]
    fn commit_edit_accepts_empty_text() {
        // Add rejects empty but edit does not; the inconsistency is the
        // original behavior, kept deliberately.
        let mut list = TaskList::new();
        let id = add_task(&mut list, "something").unwrap();
        begin_edit(&mut list, id);
        list.editing_mut().unwrap().draft.clear();
        assert_eq!(commit_edit(&mut list), Some(id));
        assert_eq!(list.get(id).unwrap().text, "");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn commit_edit_while_idle_is_noop() {
        let mut list = TaskList::new();
        add_task(&mut list, "a");
        assert_eq!(commit_edit(&mut list), None);
    }

    #[test]
    fn cancel_edit_discards_draft() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "keep").unwrap();
        begin_edit(&mut list, id);
        list.editing_mut().unwrap().draft.insert_str(" me not");
        cancel_edit(&mut list);
        assert!(list.editing().is_none());
        assert_eq!(list.get(id).unwrap().text, "keep");
    }

    // --- sort / filter ---

    #[test]
    fn sort_by_name_reorders_display_only() {
        let mut list = TaskList::new();
        add_task(&mut list, "Zebra");
        add_task(&mut list, "Apple");
        set_sort_mode(&mut list, SortMode::ByName);
        assert_eq!(displayed_texts(&list), vec!["Apple", "Zebra"]);
        // underlying order unchanged
        assert_eq!(texts(&list), vec!["Zebra", "Apple"]);
    }

    #[test]
    fn sort_is_case_insensitive() {
        let mut list = TaskList::new();
        add_task(&mut list, "banana");
        add_task(&mut list, "Apple");
        set_sort_mode(&mut list, SortMode::ByName);
        assert_eq!(displayed_texts(&list), vec!["Apple", "banana"]);
    }

    #[test]
    fn sort_is_stable_for_equal_text() {
        let mut list = TaskList::new();
        let first = add_task(&mut list, "same").unwrap();
        add_task(&mut list, "aardvark");
        let second = add_task(&mut list, "same").unwrap();
        set_sort_mode(&mut list, SortMode::ByName);
        let rows = display_rows(&list);
        assert_eq!(rows[0].text, "aardvark");
        assert_eq!(rows[1].id, first);
        assert_eq!(rows[2].id, second);
    }

    #[test]
    fn sort_mode_is_one_way() {
        let mut list = TaskList::new();
        add_task(&mut list, "b");
        add_task(&mut list, "a");
        set_sort_mode(&mut list, SortMode::ByName);
        set_sort_mode(&mut list, SortMode::Insertion);
        assert_eq!(list.sort_mode(), SortMode::ByName);
        assert_eq!(displayed_texts(&list), vec!["a", "b"]);
    }

    #[test]
    fn filter_hides_completed() {
        let mut list = TaskList::new();
        let a = add_task(&mut list, "a").unwrap();
        add_task(&mut list, "b");
        toggle_completed(&mut list, a);
        toggle_show_completed(&mut list);
        assert!(!list.show_completed());
        assert_eq!(displayed_texts(&list), vec!["b"]);
    }

    #[test]
    fn filter_off_shows_everything() {
        let mut list = TaskList::new();
        let a = add_task(&mut list, "a").unwrap();
        add_task(&mut list, "b");
        toggle_completed(&mut list, a);
        assert_eq!(display_rows(&list).len(), list.len());
    }

    #[test]
    fn display_is_idempotent() {
        let mut list = TaskList::new();
        add_task(&mut list, "Zebra");
        let a = add_task(&mut list, "Apple").unwrap();
        toggle_completed(&mut list, a);
        set_sort_mode(&mut list, SortMode::ByName);
        toggle_show_completed(&mut list);
        let first: Vec<TaskId> = display_rows(&list).iter().map(|t| t.id).collect();
        let second: Vec<TaskId> = display_rows(&list).iter().map(|t| t.id).collect();
        assert_eq!(first, second);
        // and deriving the view never touched storage
        assert_eq!(texts(&list), vec!["Zebra", "Apple"]);
    }

    // --- displayed-index resolution under active views ---

    #[test]
    fn toggle_by_displayed_row_with_sort_active() {
        let mut list = TaskList::new();
        add_task(&mut list, "Zebra");
        add_task(&mut list, "Apple");
        set_sort_mode(&mut list, SortMode::ByName);
        // displayed row 0 is "Apple", which lives at underlying index 1
        let id = display_rows(&list)[0].id;
        toggle_completed(&mut list, id);
        assert!(!list.items()[0].completed);
        assert!(list.items()[1].completed);
    }

    #[test]
    fn edit_by_displayed_row_with_sort_active() {
        let mut list = TaskList::new();
        add_task(&mut list, "Zebra");
        add_task(&mut list, "Apple");
        set_sort_mode(&mut list, SortMode::ByName);
        let id = display_rows(&list)[0].id;
        begin_edit(&mut list, id);
        list.editing_mut().unwrap().draft.insert_str(" pie");
        commit_edit(&mut list);
        assert_eq!(texts(&list), vec!["Zebra", "Apple pie"]);
    }

    #[test]
    fn delete_by_displayed_row_with_sort_and_filter() {
        let mut list = TaskList::new();
        let zebra = add_task(&mut list, "Zebra").unwrap();
        add_task(&mut list, "Apple");
        add_task(&mut list, "Mango");
        toggle_completed(&mut list, zebra);
        set_sort_mode(&mut list, SortMode::ByName);
        toggle_show_completed(&mut list);
        // displayed = [Apple, Mango]; delete displayed row 1
        let id = display_rows(&list)[1].id;
        delete_task(&mut list, id);
        assert_eq!(texts(&list), vec!["Zebra", "Apple"]);
    }

    // --- full scenario ---

    #[test]
    fn scenario_buy_milk_call_bob() {
        let mut list = TaskList::new();
        add_task(&mut list, "Buy milk");
        add_task(&mut list, "Call Bob");
        assert_eq!(texts(&list), vec!["Buy milk", "Call Bob"]);

        let id = display_rows(&list)[0].id;
        toggle_completed(&mut list, id);
        assert!(list.items()[0].completed);

        toggle_show_completed(&mut list);
        assert_eq!(displayed_texts(&list), vec!["Call Bob"]);

        toggle_show_completed(&mut list);
        set_sort_mode(&mut list, SortMode::ByName);
        assert_eq!(displayed_texts(&list), vec!["Buy milk", "Call Bob"]);
    }
}
