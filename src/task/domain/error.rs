//! Error types for task domain operations and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned by task domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task has no subtask at the requested position.
    #[error("task {task_id} has no subtask at index {index}")]
    SubTaskOutOfRange {
        /// Task whose subtasks were addressed.
        task_id: TaskId,
        /// Requested zero-based subtask index.
        index: usize,
    },
}

/// Error returned while parsing a task type tag strictly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task type: {0}")]
pub struct ParseTaskTypeError(pub String);

/// Error returned while parsing a sort strategy name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort strategy: {0}")]
pub struct ParseSortStrategyError(pub String);
