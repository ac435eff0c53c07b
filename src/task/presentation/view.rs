//! Presentation-neutral description of a task card.

use crate::task::domain::{TaskId, TaskType};
use serde::Serialize;

/// One displayable element of a task card, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskField {
    /// Task title, struck through once the task is complete.
    Title {
        /// Title text.
        text: String,
        /// Whether the title is shown struck through.
        struck: bool,
    },
    /// Task description.
    Description {
        /// Description text.
        text: String,
    },
    /// Formatted due date.
    DueDate {
        /// Due date rendered with the configured format.
        text: String,
    },
    /// Checklist item with its own toggle.
    SubTask {
        /// Position in the checklist.
        index: usize,
        /// Item text.
        text: String,
        /// Whether the item is checked.
        is_done: bool,
    },
    /// Checkbox bound to the task's completion flag.
    CompletionCheckbox {
        /// Current completion flag.
        checked: bool,
    },
    /// Marker shown on completed tasks.
    CompletedIndicator,
}

/// User action offered on a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskAction {
    /// Toggle the completion flag.
    Complete,
    /// Delete the task.
    Delete,
    /// Toggle one checklist item.
    ToggleSubTask {
        /// Position in the checklist.
        index: usize,
    },
}

/// Callback hooks a presentation collaborator wires to task actions.
pub trait TaskEventHandler {
    /// Error returned by the hooks.
    type Error;

    /// Called when the user completes (or un-completes) a task.
    ///
    /// # Errors
    ///
    /// Returns the handler's error when the completion cannot be applied.
    fn on_complete(&mut self, task_id: &TaskId) -> Result<(), Self::Error>;

    /// Called when the user deletes a task.
    ///
    /// # Errors
    ///
    /// Returns the handler's error when the deletion cannot be applied.
    fn on_delete(&mut self, task_id: &TaskId) -> Result<(), Self::Error>;

    /// Called when the user toggles a checklist item.
    ///
    /// # Errors
    ///
    /// Returns the handler's error when the toggle cannot be applied.
    fn on_toggle_sub_task(&mut self, task_id: &TaskId, index: usize) -> Result<(), Self::Error>;
}

impl TaskAction {
    /// Routes this action to the matching hook of `handler`.
    ///
    /// # Errors
    ///
    /// Propagates the hook's error.
    pub fn dispatch<H>(self, task_id: &TaskId, handler: &mut H) -> Result<(), H::Error>
    where
        H: TaskEventHandler + ?Sized,
    {
        match self {
            Self::Complete => handler.on_complete(task_id),
            Self::Delete => handler.on_delete(task_id),
            Self::ToggleSubTask { index } => handler.on_toggle_sub_task(task_id, index),
        }
    }
}

/// Fields and actions for one task, as chosen by its variant presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Presented task.
    pub task_id: TaskId,
    /// Variant that selected the presenter.
    pub task_type: TaskType,
    /// Display elements in order.
    pub fields: Vec<TaskField>,
    /// Offered actions in order.
    pub actions: Vec<TaskAction>,
}

impl TaskView {
    /// Returns true when the view offers `action`.
    #[must_use]
    pub fn offers(&self, action: TaskAction) -> bool {
        self.actions.contains(&action)
    }
}
