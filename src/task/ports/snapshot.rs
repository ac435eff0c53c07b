//! Snapshot port for saving and reloading the task collection.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot operations.
pub type TaskSnapshotResult<T> = Result<T, TaskSnapshotError>;

/// Best-effort storage for whole-collection snapshots.
///
/// A snapshot is the full ordered task list; each save overwrites the
/// previous one.
#[async_trait]
pub trait TaskSnapshotStore: Send + Sync {
    /// Overwrites the stored snapshot with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotError`] when the snapshot cannot be encoded or
    /// written.
    async fn save(&self, tasks: &[Task]) -> TaskSnapshotResult<()>;

    /// Loads the last saved snapshot.
    ///
    /// Returns an empty list when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotError`] when the snapshot exists but cannot be
    /// read or decoded.
    async fn load(&self) -> TaskSnapshotResult<Vec<Task>>;
}

/// Errors returned by snapshot stores.
#[derive(Debug, Clone, Error)]
pub enum TaskSnapshotError {
    /// Filesystem failure.
    #[error("snapshot i/o error: {0}")]
    Io(Arc<std::io::Error>),

    /// The snapshot could not be encoded or decoded.
    #[error("snapshot serialization error: {0}")]
    Serialization(String),

    /// The blocking worker running the operation failed.
    #[error("snapshot worker failed: {0}")]
    Join(String),
}

impl From<std::io::Error> for TaskSnapshotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for TaskSnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
