//! Domain model for the task board.
//!
//! The task domain models task records, their variants, and the value types
//! used to create and change them, keeping storage and presentation concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod kind;
mod task;

pub use error::{ParseSortStrategyError, ParseTaskTypeError, TaskDomainError};
pub use ids::TaskId;
pub use kind::TaskType;
pub use task::{SubTask, Task, TaskData, TaskDraft, TaskUpdate};
