//! In-memory adapters for the task board ports.

mod snapshot;
mod task;

pub use snapshot::InMemorySnapshotStore;
pub use task::InMemoryTaskRepository;
