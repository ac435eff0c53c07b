//! Overdue and due-soon alerts derived from the task collection.
//!
//! Alerts are recomputed from scratch on every call; nothing is remembered
//! between evaluations. Callers own deduplication and display lifetime.

use crate::task::domain::{Task, TaskId};
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Kind of task alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// The due date has passed.
    Overdue,
    /// The due date falls inside the look-ahead window.
    DueSoon,
}

/// Human-readable alert about one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAlert {
    task_id: TaskId,
    kind: AlertKind,
    message: String,
}

impl TaskAlert {
    fn for_task(task: &Task, kind: AlertKind) -> Self {
        let message = match kind {
            AlertKind::Overdue => format!("Task \"{}\" is overdue!", task.title()),
            AlertKind::DueSoon => format!("Task \"{}\" is due soon!", task.title()),
        };
        Self {
            task_id: task.id().clone(),
            kind,
            message,
        }
    }

    /// Returns the task the alert refers to.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the alert kind.
    #[must_use]
    pub const fn kind(&self) -> AlertKind {
        self.kind
    }

    /// Returns the display message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TaskAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Returns one alert per incomplete task whose due date is before `now`.
#[must_use]
pub fn check_overdue_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<TaskAlert> {
    tasks
        .iter()
        .filter(|task| !task.is_completed())
        .filter(|task| task.due_date().is_some_and(|due| due < now))
        .map(|task| TaskAlert::for_task(task, AlertKind::Overdue))
        .collect()
}

/// Returns one alert per incomplete task due after `now` and no later than
/// `days_ahead` days from `now`.
///
/// A window reaching past the latest representable date has no upper bound.
#[must_use]
pub fn check_upcoming_tasks(tasks: &[Task], now: DateTime<Utc>, days_ahead: u32) -> Vec<TaskAlert> {
    let horizon = Duration::try_days(i64::from(days_ahead))
        .and_then(|window| now.checked_add_signed(window));
    tasks
        .iter()
        .filter(|task| !task.is_completed())
        .filter(|task| {
            task.due_date().is_some_and(|due| {
                due > now && horizon.is_none_or(|limit| due <= limit)
            })
        })
        .map(|task| TaskAlert::for_task(task, AlertKind::DueSoon))
        .collect()
}

/// Settings for alert evaluation.
///
/// # Examples
///
/// ```
/// use taskboard::task::services::NotificationConfig;
///
/// let config = NotificationConfig::default();
/// assert_eq!(config.upcoming_window_days, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Days ahead of now that count as "due soon".
    pub upcoming_window_days: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: 1,
        }
    }
}

impl NotificationConfig {
    /// Creates a configuration with a custom look-ahead window.
    #[must_use]
    pub const fn with_window_days(upcoming_window_days: u32) -> Self {
        Self {
            upcoming_window_days,
        }
    }
}

/// Evaluates alerts against the current time of an injected clock.
#[derive(Clone)]
pub struct TaskNotifier<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    config: NotificationConfig,
}

impl<C> TaskNotifier<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a notifier with the default configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(clock, NotificationConfig::default())
    }

    /// Creates a notifier with a custom configuration.
    #[must_use]
    pub const fn with_config(clock: Arc<C>, config: NotificationConfig) -> Self {
        Self { clock, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Returns overdue alerts followed by due-soon alerts.
    #[must_use]
    pub fn evaluate(&self, tasks: &[Task]) -> Vec<TaskAlert> {
        let now = self.clock.utc();
        let mut alerts = check_overdue_tasks(tasks, now);
        alerts.extend(check_upcoming_tasks(
            tasks,
            now,
            self.config.upcoming_window_days,
        ));
        alerts
    }
}
