//! In-memory snapshot store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskSnapshotError, TaskSnapshotResult, TaskSnapshotStore},
};

/// Snapshot store that keeps the last saved collection in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    saved: Arc<RwLock<Option<Vec<Task>>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty snapshot store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a snapshot has been saved.
    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.saved.read().is_ok_and(|saved| saved.is_some())
    }
}

fn poisoned(reason: &str) -> TaskSnapshotError {
    TaskSnapshotError::from(std::io::Error::other(reason.to_owned()))
}

#[async_trait]
impl TaskSnapshotStore for InMemorySnapshotStore {
    async fn save(&self, tasks: &[Task]) -> TaskSnapshotResult<()> {
        let mut saved = self.saved.write().map_err(|err| poisoned(&err.to_string()))?;
        *saved = Some(tasks.to_vec());
        Ok(())
    }

    async fn load(&self) -> TaskSnapshotResult<Vec<Task>> {
        let saved = self.saved.read().map_err(|err| poisoned(&err.to_string()))?;
        Ok(saved.clone().unwrap_or_default())
    }
}
