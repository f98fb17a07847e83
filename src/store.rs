//! Global Application State Store
//!
//! `TaskStore` owns the canonical task list and the search-filtered view of it.
//! Every mutator funnels through `refilter`, so the filtered list can never go
//! stale against the current search term.
//!
//! `AppState` wraps it with the UI-only state (error banner, loading flags,
//! dialog) in a Leptos `reactive_stores` store for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::form::ModalState;
use crate::models::{Column, Task, TaskId};

/// Tasks matching `term` (case-insensitive, title or description), in list order
pub fn filter_tasks(tasks: &[Task], term: &str) -> Vec<Task> {
    let needle = term.to_lowercase();
    tasks.iter().filter(|task| task.matches(&needle)).cloned().collect()
}

/// A store change produced by a resolved repository call
#[derive(Debug, Clone, PartialEq)]
pub enum TaskMutation {
    SetAll(Vec<Task>),
    Add(Task),
    Update(Task),
    Remove(TaskId),
    Move { id: TaskId, column: Column },
}

/// Canonical task list plus its search-filtered view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    search_term: String,
    filtered: Vec<Task>,
}

impl TaskStore {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filtered(&self) -> &[Task] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn refilter(&mut self) {
        self.filtered = filter_tasks(&self.tasks, &self.search_term);
    }

    /// Replace the whole list (initial fetch)
    pub fn set_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.refilter();
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
        self.refilter();
    }

    /// Replace the task with the same id; unknown ids are ignored
    pub fn update(&mut self, updated: Task) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
            *task = updated;
            self.refilter();
        }
    }

    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
        self.filtered.retain(|task| task.id != id);
    }

    /// Rewrite only the column of task `id`, in place in both lists.
    ///
    /// Search matching does not depend on the column, so no refilter is needed.
    pub fn move_task(&mut self, id: TaskId, column: Column) {
        for list in [&mut self.tasks, &mut self.filtered] {
            if let Some(task) = list.iter_mut().find(|task| task.id == id) {
                task.column = column;
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    pub fn apply(&mut self, mutation: TaskMutation) {
        debug!(?mutation, "[STORE] apply");
        match mutation {
            TaskMutation::SetAll(tasks) => self.set_all(tasks),
            TaskMutation::Add(task) => self.add(task),
            TaskMutation::Update(task) => self.update(task),
            TaskMutation::Remove(id) => self.remove(id),
            TaskMutation::Move { id, column } => self.move_task(id, column),
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks and the search-filtered view
    pub tasks: TaskStore,
    /// Last repository failure, shown as a banner
    pub error: Option<String>,
    /// Initial list fetch in flight
    pub loading: bool,
    /// Drag-triggered column patch in flight
    pub moving: bool,
    /// Create/edit dialog
    pub modal: ModalState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a repository outcome into the state: apply on success, banner on failure
    pub fn apply_result(&mut self, result: Result<TaskMutation, ApiError>) {
        match result {
            Ok(mutation) => {
                self.error = None;
                self.tasks.apply(mutation);
            }
            Err(err) => {
                error!(%err, "[STORE] repository call failed");
                self.error = Some(err.to_string());
            }
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a repository outcome to the store
pub fn store_apply(store: &AppStore, result: Result<TaskMutation, ApiError>) {
    store.write().apply_result(result);
}

/// Update the search term (refilters)
pub fn store_set_search(store: &AppStore, term: String) {
    store.tasks().write().set_search_term(term);
}

/// Dismiss the error banner
pub fn store_clear_error(store: &AppStore) {
    store.error().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: TaskId, title: &str, description: &str, column: Column) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            column,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, "Fix bug", "urgent", Column::Backlog),
            make_task(2, "Write docs", "later", Column::Done),
            make_task(3, "Review PR", "Bug bash follow-up", Column::Review),
        ]
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_subset_and_exact() {
        let tasks = sample();
        for term in ["", "bug", "BUG", "later", "zzz", "o"] {
            let filtered = filter_tasks(&tasks, term);
            let needle = term.to_lowercase();
            let expected: Vec<TaskId> = tasks
                .iter()
                .filter(|t| {
                    t.title.to_lowercase().contains(&needle)
                        || t.description.to_lowercase().contains(&needle)
                })
                .map(|t| t.id)
                .collect();
            assert_eq!(ids(&filtered), expected, "term {:?}", term);
            assert!(filtered.iter().all(|t| tasks.contains(t)));
        }
        assert_eq!(filter_tasks(&tasks, ""), tasks);
    }

    #[test]
    fn test_search_scenario() {
        let mut store = TaskStore::default();
        store.set_all(sample()[..2].to_vec());
        store.set_search_term("bug");
        assert_eq!(ids(store.filtered()), vec![1]);
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn test_set_all_uses_current_term() {
        let mut store = TaskStore::default();
        store.set_search_term("docs");
        store.set_all(sample());
        assert_eq!(ids(store.filtered()), vec![2]);
    }

    #[test]
    fn test_add_refilters_with_current_term() {
        let mut store = TaskStore::default();
        store.set_all(sample());
        store.set_search_term("bug");
        store.add(make_task(4, "Another bug", "x", Column::Backlog));
        store.add(make_task(5, "Unrelated", "y", Column::Backlog));
        assert_eq!(ids(store.tasks()), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(store.filtered()), vec![1, 3, 4]);
    }

    #[test]
    fn test_update_can_leave_search_match() {
        let mut store = TaskStore::default();
        store.set_all(sample());
        store.set_search_term("bug");
        store.update(make_task(1, "Fix crash", "urgent", Column::Backlog));
        assert_eq!(ids(store.filtered()), vec![3]);
        assert_eq!(store.get(1).unwrap().title, "Fix crash");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = TaskStore::default();
        store.set_all(sample());
        let before = store.clone();
        store.update(make_task(99, "Ghost", "none", Column::Done));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove() {
        let mut store = TaskStore::default();
        store.set_all(sample());
        store.set_search_term("bug");
        store.remove(1);
        assert_eq!(ids(store.tasks()), vec![2, 3]);
        assert_eq!(ids(store.filtered()), vec![3]);
    }

    #[test]
    fn test_move_changes_only_column() {
        let mut store = TaskStore::default();
        store.set_all(sample());
        store.set_search_term("bug");
        store.move_task(1, Column::Review);

        assert_eq!(store.tasks().len(), 3);
        let moved = store.get(1).unwrap();
        assert_eq!(moved, &make_task(1, "Fix bug", "urgent", Column::Review));
        assert_eq!(store.filtered()[0].column, Column::Review);
        assert_eq!(store.get(2), Some(&sample()[1]));
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let mut store = TaskStore::default();
        store.set_all(sample());
        let before = store.clone();
        store.move_task(42, Column::Done);
        assert_eq!(store, before);
    }

    #[test]
    fn test_apply_result_error_keeps_tasks() {
        let mut state = AppState::new();
        state.apply_result(Ok(TaskMutation::SetAll(sample())));
        state.apply_result(Err(ApiError::Transport("offline".into())));
        assert_eq!(state.tasks.tasks().len(), 3);
        assert_eq!(state.error.as_deref(), Some("network error: offline"));

        state.apply_result(Ok(TaskMutation::Remove(2)));
        assert!(state.error.is_none());
        assert_eq!(ids(state.tasks.tasks()), vec![1, 3]);
    }
}
