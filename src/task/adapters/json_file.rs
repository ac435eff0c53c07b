//! JSON file snapshot store.
//!
//! Snapshots are written as a single JSON array inside a capability-scoped
//! directory. Writes go to a sibling temporary file which is then renamed
//! over the snapshot, so readers see either the old or the new array.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;
use uuid::Uuid;

use crate::task::{
    domain::Task,
    ports::{TaskSnapshotError, TaskSnapshotResult, TaskSnapshotStore},
};

/// Default snapshot file name, matching the key the to-do page stores under.
pub const DEFAULT_SNAPSHOT_FILE_NAME: &str = "tasks.json";

/// Snapshot store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
}

impl JsonFileSnapshotStore {
    /// Opens `directory`, creating it when missing, and stores snapshots in
    /// `file_name` inside it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(
        directory: &Utf8Path,
        file_name: impl Into<Utf8PathBuf>,
    ) -> TaskSnapshotResult<Self> {
        Dir::create_ambient_dir_all(directory, ambient_authority())?;
        let dir = Dir::open_ambient_dir(directory, ambient_authority())?;
        Ok(Self::from_dir(dir, file_name))
    }

    /// Wraps an already opened directory handle.
    #[must_use]
    pub fn from_dir(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name: file_name.into(),
        }
    }

    /// Returns the snapshot file name relative to the directory.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }

    /// Sibling name unique to one write, so concurrent saves never share it.
    fn temp_name(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.{}.tmp", self.file_name, Uuid::new_v4()))
    }
}

async fn run_blocking<F, T>(f: F) -> TaskSnapshotResult<T>
where
    F: FnOnce() -> TaskSnapshotResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| TaskSnapshotError::Join(err.to_string()))?
}

#[async_trait]
impl TaskSnapshotStore for JsonFileSnapshotStore {
    async fn save(&self, tasks: &[Task]) -> TaskSnapshotResult<()> {
        let encoded = serde_json::to_vec_pretty(tasks)?;
        let dir = Arc::clone(&self.dir);
        let target = self.file_name.clone();
        let temp = self.temp_name();
        let count = tasks.len();

        run_blocking(move || {
            let written = dir
                .write(&temp, encoded)
                .and_then(|()| dir.rename(&temp, &dir, &target));
            if let Err(err) = written {
                if let Err(cleanup) = dir.remove_file(&temp) {
                    tracing::debug!(file = %temp, error = %cleanup, "temporary snapshot not removed");
                }
                return Err(TaskSnapshotError::from(err));
            }
            Ok(())
        })
        .await?;

        tracing::debug!(file = %self.file_name, count, "saved task snapshot");
        Ok(())
    }

    async fn load(&self) -> TaskSnapshotResult<Vec<Task>> {
        let dir = Arc::clone(&self.dir);
        let target = self.file_name.clone();

        let contents = run_blocking(move || match dir.read_to_string(&target) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TaskSnapshotError::from(err)),
        })
        .await?;

        let Some(contents) = contents else {
            tracing::debug!(file = %self.file_name, "no task snapshot saved yet");
            return Ok(Vec::new());
        };

        serde_json::from_str(&contents).map_err(|err| {
            tracing::warn!(file = %self.file_name, error = %err, "task snapshot is unreadable");
            TaskSnapshotError::from(err)
        })
    }
}
