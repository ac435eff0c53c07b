//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskAlert, TaskNotifier, TaskStore, TaskStoreError},
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<InMemoryTaskRepository>;

/// Clock frozen at the scenario's notion of "now".
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub store: TestTaskStore,
    pub notifier: TaskNotifier<FixedClock>,
    pub now: DateTime<Utc>,
    pub alerts: Vec<TaskAlert>,
    pub last_update: Option<Result<Option<Task>, TaskStoreError>>,
}

impl BoardWorld {
    /// Creates a world with an empty store and a frozen clock.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            store: TaskStore::new(Arc::new(InMemoryTaskRepository::new())),
            notifier: TaskNotifier::new(Arc::new(FixedClock(now))),
            now,
            alerts: Vec::new(),
            last_update: None,
        }
    }

    /// Finds the single stored task with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error when listing fails or no task has that title.
    pub fn task_titled(&self, title: &str) -> Result<Task, eyre::Report> {
        self.store
            .get_tasks()
            .map_err(|err| eyre::eyre!("listing failed: {err}"))?
            .into_iter()
            .find(|task| task.title() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
