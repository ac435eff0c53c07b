//! Task variant taxonomy.

use super::ParseTaskTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task variant.
///
/// The variant decides which fields a task carries in practice and how the
/// presentation layer dispatches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TaskType {
    /// Plain task with a title and optional description.
    #[default]
    Basic,
    /// Task with a due date.
    Timed,
    /// Task with an ordered list of subtasks.
    Checklist,
}

impl TaskType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Basic, Self::Timed, Self::Checklist];

    /// Returns the canonical serialized tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Timed => "timed",
            Self::Checklist => "checklist",
        }
    }

    /// Resolves a type tag, falling back to [`TaskType::Basic`] for tags this
    /// build does not know.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::try_from(tag).unwrap_or_else(|err| {
            tracing::warn!(tag = %err.0, "unrecognized task type, presenting as basic");
            Self::Basic
        })
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "basic" => Ok(Self::Basic),
            "timed" => Ok(Self::Timed),
            "checklist" => Ok(Self::Checklist),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}

impl From<String> for TaskType {
    fn from(value: String) -> Self {
        Self::from_tag(&value)
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
