//! Task store service: the single logical owner of the task collection.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task store operations.
///
/// A missing task is never an error; lookups and mutations addressed by id
/// report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskStoreError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::Rejected(domain) => Self::Domain(domain),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store orchestration service.
///
/// The store is constructed explicitly and shared by cloning; every clone
/// addresses the same repository.
#[derive(Clone)]
pub struct TaskStore<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskStore<R>
where
    R: TaskRepository,
{
    /// Creates a store over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a task from `draft` and appends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository rejects the
    /// insert.
    pub fn add_task(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        let task = Task::create(draft);
        self.repository.insert(task.clone())?;
        tracing::debug!(task_id = %task.id(), task_type = %task.task_type(), "task added");
        Ok(task)
    }

    /// Appends tasks produced elsewhere, such as adapted foreign records.
    ///
    /// Returns the number of tasks inserted. Insertion stops at the first
    /// task whose identifier is already stored; tasks before it remain.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] (wrapped in
    /// [`TaskStoreError::Repository`]) for a reused identifier.
    pub fn import_tasks(&self, tasks: Vec<Task>) -> TaskStoreResult<usize> {
        let mut inserted = 0;
        for task in tasks {
            self.repository.insert(task)?;
            inserted += 1;
        }
        tracing::debug!(count = inserted, "tasks imported");
        Ok(inserted)
    }

    /// Replaces the whole collection, e.g. with a restored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when `tasks` repeats an
    /// identifier.
    pub fn replace_tasks(&self, tasks: Vec<Task>) -> TaskStoreResult<()> {
        let count = tasks.len();
        self.repository.replace_all(tasks)?;
        tracing::debug!(count, "task collection replaced");
        Ok(())
    }

    /// Removes a task, returning it when it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when repository access fails.
    pub fn remove_task(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let removed = self.repository.remove(id)?;
        if removed.is_some() {
            tracing::debug!(task_id = %id, "task removed");
        }
        Ok(removed)
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when repository access fails.
    pub fn get_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list()?)
    }

    /// Finds a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when repository access fails.
    pub fn find_task(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Returns tasks whose title or description contains `query`, ignoring
    /// case, in insertion order.
    ///
    /// An empty query matches every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when repository access fails.
    pub fn search_task(&self, query: &str) -> TaskStoreResult<Vec<Task>> {
        let needle = query.to_lowercase();
        let mut tasks = self.repository.list()?;
        tasks.retain(|task| task.matches_lowercase(&needle));
        Ok(tasks)
    }

    /// Merges `update` into the task and returns the result.
    ///
    /// Returns `Ok(None)` and changes nothing when the task does not exist.
    /// An empty update returns the stored task without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when repository access fails.
    pub fn update_task(&self, id: &TaskId, update: TaskUpdate) -> TaskStoreResult<Option<Task>> {
        if update.is_empty() {
            return self.find_task(id);
        }
        let mut pending = Some(update);
        let updated = self.repository.modify(id, &mut |task| {
            if let Some(fields) = pending.take() {
                task.apply(fields);
            }
            Ok(())
        })?;
        log_outcome("task updated", id, updated.as_ref());
        Ok(updated)
    }

    /// Flips the completion flag of a task.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when repository access fails.
    pub fn toggle_task_completion(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let updated = self.repository.modify(id, &mut |task| {
            task.toggle_completion();
            Ok(())
        })?;
        log_outcome("task completion toggled", id, updated.as_ref());
        Ok(updated)
    }

    /// Flips the `is_done` flag of one subtask, leaving the task's own
    /// completion flag and the other subtasks unchanged.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] with
    /// [`TaskDomainError::SubTaskOutOfRange`] when the task has no subtask
    /// at `index`, or [`TaskStoreError::Repository`] when repository access
    /// fails.
    pub fn toggle_sub_task(&self, id: &TaskId, index: usize) -> TaskStoreResult<Option<Task>> {
        let updated = self.repository.modify(id, &mut |task| {
            task.toggle_sub_task(index)?;
            Ok(())
        })?;
        log_outcome("subtask toggled", id, updated.as_ref());
        Ok(updated)
    }
}

fn log_outcome(action: &str, id: &TaskId, outcome: Option<&Task>) {
    if outcome.is_some() {
        tracing::debug!(task_id = %id, "{action}");
    } else {
        tracing::debug!(task_id = %id, "{action}: no such task");
    }
}
