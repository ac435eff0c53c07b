//! Unit tests for the task board.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::task::domain::{Task, TaskData, TaskId, TaskType};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Noon UTC on 1 June 2024.
pub(crate) fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("valid reference timestamp")
}

/// Builds a task with an explicit identifier for ordering tests.
pub(crate) fn task_with(
    id: &str,
    title: &str,
    due_date: Option<DateTime<Utc>>,
    is_completed: bool,
) -> Task {
    Task::from_data(TaskData {
        id: TaskId::from_raw(id),
        title: title.to_owned(),
        description: None,
        task_type: if due_date.is_some() {
            TaskType::Timed
        } else {
            TaskType::Basic
        },
        due_date,
        is_completed,
        sub_tasks: None,
    })
}

/// Returns the identifiers of `tasks` in order.
pub(crate) fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}
