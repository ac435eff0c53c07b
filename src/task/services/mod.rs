//! Application services for the task board.

pub mod notification;
mod snapshot;
pub mod sorting;
mod store;

pub use notification::{
    AlertKind, NotificationConfig, TaskAlert, TaskNotifier, check_overdue_tasks,
    check_upcoming_tasks,
};
pub use snapshot::{TaskSnapshotService, TaskSnapshotServiceError};
pub use sorting::{SortStrategy, sort_by_completion, sort_by_date, sort_by_id, sort_by_name};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
