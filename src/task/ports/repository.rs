//! Repository port owning the live task collection.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Ordered task collection contract.
///
/// Implementations keep tasks in insertion order and hand out owned copies;
/// callers never observe the stored records directly.
pub trait TaskRepository: Send + Sync {
    /// Appends a task to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when a task with the
    /// same identifier is already stored.
    fn insert(&self, task: Task) -> TaskRepositoryResult<()>;

    /// Removes the task with the given identifier, returning it.
    ///
    /// Returns `None` when no task matches.
    fn remove(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task in insertion order.
    fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Applies `change` to the stored task in place and returns the result.
    ///
    /// Returns `Ok(None)` without calling `change` when no task matches.
    /// When `change` fails the stored task is left untouched.
    fn modify(
        &self,
        id: &TaskId,
        change: &mut dyn FnMut(&mut Task) -> TaskRepositoryResult<()>,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Replaces the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when `tasks` repeats an
    /// identifier; the previous collection is kept in that case.
    fn replace_all(&self, tasks: Vec<Task>) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A change applied through [`TaskRepository::modify`] was rejected by
    /// the domain.
    #[error(transparent)]
    Rejected(#[from] crate::task::domain::TaskDomainError),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
