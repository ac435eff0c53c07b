//! Task record and the value types used to create and change it.

use super::{TaskDomainError, TaskId, TaskType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Checklist item owned by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    text: String,
    #[serde(default)]
    is_done: bool,
}

impl SubTask {
    /// Creates an unchecked subtask.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_done: false,
        }
    }

    /// Returns the subtask text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the subtask has been checked off.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    const fn toggle(&mut self) {
        self.is_done = !self.is_done;
    }
}

/// Task record.
///
/// Field names serialize in camel case (`dueDate`, `isCompleted`,
/// `subTasks`) so a snapshot reads the same as the browser-local format the
/// to-do page stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "type", default)]
    task_type: TaskType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub_tasks: Option<Vec<SubTask>>,
}

/// Parameter object for building a task with a known identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Task variant.
    pub task_type: TaskType,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Completion flag.
    pub is_completed: bool,
    /// Optional checklist items.
    pub sub_tasks: Option<Vec<SubTask>>,
}

impl Task {
    /// Creates an incomplete task with a fresh identifier.
    #[must_use]
    pub fn create(draft: TaskDraft) -> Self {
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            task_type: draft.task_type,
            due_date: draft.due_date,
            is_completed: false,
            sub_tasks: draft.sub_tasks,
        }
    }

    /// Builds a task from fully specified data.
    #[must_use]
    pub fn from_data(data: TaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            task_type: data.task_type,
            due_date: data.due_date,
            is_completed: data.is_completed,
            sub_tasks: data.sub_tasks,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task variant.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the checklist items, if the task carries any.
    #[must_use]
    pub fn sub_tasks(&self) -> Option<&[SubTask]> {
        self.sub_tasks.as_deref()
    }

    /// Returns true when the title or description contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_ref()
                .is_some_and(|description| description.to_lowercase().contains(needle))
    }

    /// Flips the completion flag.
    pub const fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Flips the `is_done` flag of one subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SubTaskOutOfRange`] when the task has no
    /// subtask at `index`.
    pub fn toggle_sub_task(&mut self, index: usize) -> Result<(), TaskDomainError> {
        let sub_task = self
            .sub_tasks
            .as_mut()
            .and_then(|items| items.get_mut(index))
            .ok_or_else(|| TaskDomainError::SubTaskOutOfRange {
                task_id: self.id.clone(),
                index,
            })?;
        sub_task.toggle();
        Ok(())
    }

    /// Merges the fields present in `update` into this task.
    pub fn apply(&mut self, update: TaskUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(is_completed) = update.is_completed {
            self.is_completed = is_completed;
        }
        if let Some(sub_tasks) = update.sub_tasks {
            self.sub_tasks = Some(sub_tasks);
        }
    }
}

/// Caller-supplied fields for a new task.
///
/// No combination is rejected: a timed draft without a due date is accepted,
/// as is a checklist with no items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    task_type: TaskType,
    due_date: Option<DateTime<Utc>>,
    sub_tasks: Option<Vec<SubTask>>,
}

impl TaskDraft {
    /// Creates a basic draft with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task variant.
    #[must_use]
    pub const fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets unchecked subtasks from their texts.
    #[must_use]
    pub fn with_sub_tasks<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_tasks = Some(texts.into_iter().map(SubTask::new).collect());
        self
    }
}

/// Partial set of task fields to merge into an existing task.
///
/// Identifier and variant are not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    is_completed: Option<bool>,
    sub_tasks: Option<Vec<SubTask>>,
}

impl TaskUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }

    /// Replaces the subtask list.
    #[must_use]
    pub fn with_sub_tasks(mut self, sub_tasks: Vec<SubTask>) -> Self {
        self.sub_tasks = Some(sub_tasks);
        self
    }

    /// Returns true when the update names no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.is_completed.is_none()
            && self.sub_tasks.is_none()
    }
}
