//! Event handler that applies card actions to a task store.

use super::TaskEventHandler;
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{TaskStore, TaskStoreError},
};

/// Wires presentation hooks to [`TaskStore`] operations.
///
/// Actions on tasks that no longer exist are ignored, matching the store's
/// not-found semantics.
pub struct StoreEventHandler<'a, R>
where
    R: TaskRepository,
{
    store: &'a TaskStore<R>,
}

impl<'a, R> StoreEventHandler<'a, R>
where
    R: TaskRepository,
{
    /// Creates a handler over `store`.
    #[must_use]
    pub const fn new(store: &'a TaskStore<R>) -> Self {
        Self { store }
    }
}

impl<R> TaskEventHandler for StoreEventHandler<'_, R>
where
    R: TaskRepository,
{
    type Error = TaskStoreError;

    fn on_complete(&mut self, task_id: &TaskId) -> Result<(), Self::Error> {
        self.store.toggle_task_completion(task_id).map(drop)
    }

    fn on_delete(&mut self, task_id: &TaskId) -> Result<(), Self::Error> {
        self.store.remove_task(task_id).map(drop)
    }

    fn on_toggle_sub_task(&mut self, task_id: &TaskId, index: usize) -> Result<(), Self::Error> {
        self.store.toggle_sub_task(task_id, index).map(drop)
    }
}
