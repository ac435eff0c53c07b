//! Saving and restoring the store's collection through a snapshot port.

use crate::task::{
    ports::{TaskRepository, TaskSnapshotError, TaskSnapshotStore},
    services::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while moving tasks between the store and a snapshot.
#[derive(Debug, Error)]
pub enum TaskSnapshotServiceError {
    /// The store could not be read or replaced.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// The snapshot could not be saved or loaded.
    #[error(transparent)]
    Snapshot(#[from] TaskSnapshotError),
}

/// Snapshot synchronisation service.
///
/// Saving is a caller decision, typically after each mutation; the store
/// itself never touches the snapshot.
#[derive(Clone)]
pub struct TaskSnapshotService<R, S>
where
    R: TaskRepository,
    S: TaskSnapshotStore,
{
    store: TaskStore<R>,
    snapshot: Arc<S>,
}

impl<R, S> TaskSnapshotService<R, S>
where
    R: TaskRepository,
    S: TaskSnapshotStore,
{
    /// Creates a service over a store and a snapshot port.
    #[must_use]
    pub const fn new(store: TaskStore<R>, snapshot: Arc<S>) -> Self {
        Self { store, snapshot }
    }

    /// Saves the store's current tasks, returning how many were written.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotServiceError`] when the store cannot be read or
    /// the snapshot cannot be written.
    pub async fn persist(&self) -> Result<usize, TaskSnapshotServiceError> {
        let tasks = self.store.get_tasks()?;
        self.snapshot.save(&tasks).await?;
        Ok(tasks.len())
    }

    /// Replaces the store's tasks with the saved snapshot, returning how
    /// many were restored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotServiceError`] when the snapshot cannot be
    /// loaded or contains repeated identifiers.
    pub async fn restore(&self) -> Result<usize, TaskSnapshotServiceError> {
        let tasks = self.snapshot.load().await?;
        let count = tasks.len();
        self.store.replace_tasks(tasks)?;
        tracing::info!(count, "task snapshot restored");
        Ok(count)
    }
}
