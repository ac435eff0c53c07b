//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;
pub mod snapshot;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use snapshot::{TaskSnapshotError, TaskSnapshotResult, TaskSnapshotStore};
