//! Ordering strategies for task views.
//!
//! Every function returns a new vector and leaves its input untouched. All
//! of them use a stable sort, so tasks with equal keys keep their relative
//! input order.

use crate::task::domain::{ParseSortStrategyError, Task};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Orders tasks by ascending due date; undated tasks go last.
#[must_use]
pub fn sort_by_date(tasks: &[Task]) -> Vec<Task> {
    sorted(tasks, |a, b| match (a.due_date(), b.due_date()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

/// Orders tasks by title.
///
/// Titles compare case-insensitively first so `apple` sorts next to
/// `Apple` rather than after `Zebra`; the raw text breaks the remaining ties.
#[must_use]
pub fn sort_by_name(tasks: &[Task]) -> Vec<Task> {
    sorted(tasks, |a, b| compare_titles(a.title(), b.title()))
}

/// Orders tasks by identifier text.
#[must_use]
pub fn sort_by_id(tasks: &[Task]) -> Vec<Task> {
    sorted(tasks, |a, b| a.id().cmp(b.id()))
}

/// Places incomplete tasks before completed ones.
#[must_use]
pub fn sort_by_completion(tasks: &[Task]) -> Vec<Task> {
    sorted(tasks, |a, b| a.is_completed().cmp(&b.is_completed()))
}

fn sorted(tasks: &[Task], compare: impl FnMut(&Task, &Task) -> Ordering) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by(compare);
    ordered
}

fn compare_titles(left: &str, right: &str) -> Ordering {
    let folded = left
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase));
    folded.then_with(|| left.cmp(right))
}

/// Selectable ordering for a task view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortStrategy {
    /// [`sort_by_date`].
    #[default]
    #[serde(rename = "sortByDate")]
    Date,
    /// [`sort_by_name`].
    #[serde(rename = "sortByName")]
    Name,
    /// [`sort_by_id`].
    #[serde(rename = "sortById")]
    Id,
    /// [`sort_by_completion`].
    #[serde(rename = "sortByCompletion")]
    Completion,
}

impl SortStrategy {
    /// Returns the strategy name used by view settings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "sortByDate",
            Self::Name => "sortByName",
            Self::Id => "sortById",
            Self::Completion => "sortByCompletion",
        }
    }

    /// Parses a strategy name, falling back to [`SortStrategy::Date`].
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::try_from(name).unwrap_or_default()
    }

    /// Orders `tasks` with this strategy.
    #[must_use]
    pub fn apply(self, tasks: &[Task]) -> Vec<Task> {
        match self {
            Self::Date => sort_by_date(tasks),
            Self::Name => sort_by_name(tasks),
            Self::Id => sort_by_id(tasks),
            Self::Completion => sort_by_completion(tasks),
        }
    }
}

impl TryFrom<&str> for SortStrategy {
    type Error = ParseSortStrategyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "sortByDate" => Ok(Self::Date),
            "sortByName" => Ok(Self::Name),
            "sortById" => Ok(Self::Id),
            "sortByCompletion" => Ok(Self::Completion),
            _ => Err(ParseSortStrategyError(value.to_owned())),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
