//! Task Dialog State
//!
//! Transient create/edit form held while the dialog is open. Validation runs on
//! submit only; nothing here touches the task store.

use crate::models::{Column, Task, TaskDraft, TaskId};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TaskId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// What a valid submit asks the repository to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSubmission {
    Create(TaskDraft),
    Update(TaskId, TaskDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    pub column: Column,
    pub errors: FieldErrors,
}

impl TaskForm {
    fn blank(column: Column) -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            column,
            errors: FieldErrors::default(),
        }
    }

    fn from_task(task: &Task) -> Self {
        Self {
            mode: FormMode::Edit(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            column: task.column,
            errors: FieldErrors::default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Check required fields; on success return the trimmed draft
    pub fn validate(&mut self) -> Option<TaskDraft> {
        let title = self.title.trim();
        let description = self.description.trim();
        self.errors = FieldErrors {
            title: title.is_empty().then(|| TITLE_REQUIRED.to_string()),
            description: description.is_empty().then(|| DESCRIPTION_REQUIRED.to_string()),
        };
        self.errors.is_empty().then(|| TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            column: self.column,
        })
    }
}

/// Dialog lifecycle: closed, or open on a create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(TaskForm),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn form(&self) -> Option<&TaskForm> {
        match self {
            ModalState::Open(form) => Some(form),
            ModalState::Closed => None,
        }
    }

    /// Blank form, column prefilled
    pub fn open_create(&mut self, column: Column) {
        *self = ModalState::Open(TaskForm::blank(column));
    }

    pub fn open_edit(&mut self, task: &Task) {
        *self = ModalState::Open(TaskForm::from_task(task));
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Edit the title; clears its error
    pub fn set_title(&mut self, value: String) {
        if let ModalState::Open(form) = self {
            form.title = value;
            form.errors.title = None;
        }
    }

    /// Edit the description; clears its error
    pub fn set_description(&mut self, value: String) {
        if let ModalState::Open(form) = self {
            form.description = value;
            form.errors.description = None;
        }
    }

    pub fn set_column(&mut self, column: Column) {
        if let ModalState::Open(form) = self {
            form.column = column;
        }
    }

    /// Validate and, if valid, hand the submission to `dispatch` and close.
    /// Returns whether the form was submitted.
    pub fn submit<F>(&mut self, dispatch: F) -> bool
    where
        F: FnOnce(TaskSubmission),
    {
        let ModalState::Open(form) = self else {
            return false;
        };
        let Some(draft) = form.validate() else {
            return false;
        };
        let submission = match form.mode {
            FormMode::Create => TaskSubmission::Create(draft),
            FormMode::Edit(id) => TaskSubmission::Update(id, draft),
        };
        dispatch(submission);
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 5,
            title: "Write docs".to_string(),
            description: "later".to_string(),
            column: Column::Done,
        }
    }

    #[test]
    fn test_open_create_prefills_column() {
        let mut modal = ModalState::default();
        modal.open_create(Column::Review);
        let form = modal.form().unwrap();
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.column, Column::Review);
        assert!(form.title.is_empty() && form.description.is_empty());
    }

    #[test]
    fn test_open_edit_copies_task() {
        let mut modal = ModalState::default();
        modal.open_edit(&sample_task());
        let form = modal.form().unwrap();
        assert!(form.is_edit());
        assert_eq!(form.title, "Write docs");
        assert_eq!(form.column, Column::Done);
    }

    #[test]
    fn test_blank_title_blocks_submit() {
        let mut modal = ModalState::default();
        modal.open_create(Column::Backlog);
        modal.set_title("   ".to_string());
        modal.set_description("something".to_string());

        let mut dispatched = Vec::new();
        assert!(!modal.submit(|s| dispatched.push(s)));

        assert!(dispatched.is_empty());
        assert!(modal.is_open());
        let errors = &modal.form().unwrap().errors;
        assert_eq!(errors.title.as_deref(), Some(TITLE_REQUIRED));
        assert!(errors.description.is_none());
    }

    #[test]
    fn test_both_fields_required() {
        let mut modal = ModalState::default();
        modal.open_create(Column::Backlog);
        assert!(!modal.submit(|_| panic!("must not dispatch")));
        let errors = &modal.form().unwrap().errors;
        assert_eq!(errors.title.as_deref(), Some(TITLE_REQUIRED));
        assert_eq!(errors.description.as_deref(), Some(DESCRIPTION_REQUIRED));
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut modal = ModalState::default();
        modal.open_create(Column::Backlog);
        modal.submit(|_| {});
        modal.set_title("T".to_string());
        let errors = &modal.form().unwrap().errors;
        assert!(errors.title.is_none());
        assert!(errors.description.is_some());
    }

    #[test]
    fn test_create_submit_trims_and_closes() {
        let mut modal = ModalState::default();
        modal.open_create(Column::InProgress);
        modal.set_title("  Ship it ".to_string());
        modal.set_description("\tnow\n".to_string());

        let mut dispatched = None;
        assert!(modal.submit(|s| dispatched = Some(s)));
        assert_eq!(
            dispatched,
            Some(TaskSubmission::Create(TaskDraft {
                title: "Ship it".to_string(),
                description: "now".to_string(),
                column: Column::InProgress,
            }))
        );
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn test_edit_submit_targets_task() {
        let mut modal = ModalState::default();
        modal.open_edit(&sample_task());
        modal.set_column(Column::Review);

        let mut dispatched = None;
        modal.submit(|s| dispatched = Some(s));
        match dispatched {
            Some(TaskSubmission::Update(id, draft)) => {
                assert_eq!(id, 5);
                assert_eq!(draft.column, Column::Review);
                assert_eq!(draft.title, "Write docs");
            }
            other => panic!("unexpected submission {:?}", other),
        }
    }

    #[test]
    fn test_closed_modal_ignores_edits() {
        let mut modal = ModalState::default();
        modal.set_title("x".to_string());
        assert_eq!(modal, ModalState::Closed);
        assert!(!modal.submit(|_| {}));
    }
}
