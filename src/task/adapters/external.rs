//! Mapping from foreign task records into the task domain.
//!
//! Foreign records use the field names of the third-party task API
//! (`_id`, `name`, `desc`, `deadline`, `status`). The mapping is pure: the
//! collaborator that fetches the records owns all I/O.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::domain::{Task, TaskData, TaskId, TaskType};

/// Status value that marks a foreign task as done.
pub const COMPLETED_STATUS: &str = "completed";

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Task record in the foreign API shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalTask {
    /// Foreign identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Task name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional description.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional deadline text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Optional workflow status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ExternalTask {
    /// Creates a record with the two required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the deadline text.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Errors raised for foreign records that cannot be mapped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExternalTaskError {
    /// The record has no `_id`.
    #[error("external task is missing its `_id`")]
    MissingId,

    /// The record has no `name`.
    #[error("external task {0} is missing its `name`")]
    MissingName(String),

    /// The deadline is not a recognised timestamp.
    #[error("external task {id} has an unreadable deadline '{deadline}'")]
    InvalidDeadline {
        /// Foreign identifier of the offending record.
        id: String,
        /// Deadline text as received.
        deadline: String,
    },
}

/// Treats empty strings the same as a missing field.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}

/// Infers the variant: a deadline wins over a status, and neither means basic.
fn infer_type(deadline: Option<&str>, status: Option<&str>) -> TaskType {
    match (deadline, status) {
        (Some(_), _) => TaskType::Timed,
        (None, Some(_)) => TaskType::Checklist,
        (None, None) => TaskType::Basic,
    }
}

/// Parses RFC 3339, or a zone-less date-time or date read as UTC.
fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Maps one foreign record to a task.
///
/// # Errors
///
/// Returns [`ExternalTaskError`] when `_id` or `name` is missing or the
/// deadline cannot be parsed.
pub fn adapt_task(external: &ExternalTask) -> Result<Task, ExternalTaskError> {
    let id = present(external.id.as_ref()).ok_or(ExternalTaskError::MissingId)?;
    let name = present(external.name.as_ref())
        .ok_or_else(|| ExternalTaskError::MissingName(id.to_owned()))?;
    let deadline = present(external.deadline.as_ref());
    let status = present(external.status.as_ref());

    let due_date = deadline
        .map(|raw| {
            parse_deadline(raw).ok_or_else(|| ExternalTaskError::InvalidDeadline {
                id: id.to_owned(),
                deadline: raw.to_owned(),
            })
        })
        .transpose()?;

    Ok(Task::from_data(TaskData {
        id: TaskId::from_raw(id),
        title: name.to_owned(),
        description: present(external.description.as_ref()).map(str::to_owned),
        task_type: infer_type(deadline, status),
        due_date,
        is_completed: status == Some(COMPLETED_STATUS),
        sub_tasks: None,
    }))
}

/// Maps foreign records element-wise, preserving order.
///
/// # Errors
///
/// Returns the error of the first record that cannot be mapped.
pub fn adapt_tasks(externals: &[ExternalTask]) -> Result<Vec<Task>, ExternalTaskError> {
    externals.iter().map(adapt_task).collect()
}
