//! In-memory repository owning the live task collection.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept in a vector so iteration follows insertion order. Clones
/// share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(err: &PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Returns the first identifier that appears twice in `tasks`.
fn first_duplicate(tasks: &[Task]) -> Option<TaskId> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .iter()
        .find(|task| !seen.insert(task.id()))
        .map(|task| task.id().clone())
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert(&self, task: Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(|err| poisoned(&err))?;
        if tasks.iter().any(|stored| stored.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
        }
        tasks.push(task);
        Ok(())
    }

    fn remove(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.state.write().map_err(|err| poisoned(&err))?;
        let removed = tasks
            .iter()
            .position(|task| task.id() == id)
            .map(|position| tasks.remove(position));
        Ok(removed)
    }

    fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(tasks.clone())
    }

    fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    fn modify(
        &self,
        id: &TaskId,
        change: &mut dyn FnMut(&mut Task) -> TaskRepositoryResult<()>,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.state.write().map_err(|err| poisoned(&err))?;
        let Some(stored) = tasks.iter_mut().find(|task| task.id() == id) else {
            return Ok(None);
        };

        // Work on a copy so a rejected change leaves the stored task intact.
        let mut updated = stored.clone();
        change(&mut updated)?;
        *stored = updated.clone();
        Ok(Some(updated))
    }

    fn replace_all(&self, tasks: Vec<Task>) -> TaskRepositoryResult<()> {
        if let Some(duplicate) = first_duplicate(&tasks) {
            return Err(TaskRepositoryError::DuplicateTask(duplicate));
        }
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        *state = tasks;
        Ok(())
    }
}
