//! In-memory integration tests for task store operations.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rstest::rstest;
use taskboard::task::{
    adapters::{
        external::{ExternalTask, adapt_tasks},
        memory::InMemoryTaskRepository,
    },
    domain::{SubTask, TaskDomainError, TaskDraft, TaskId, TaskType, TaskUpdate},
    services::{TaskStore, TaskStoreError},
};

use super::helpers::{TestStore, now, store, titles};

#[rstest]
fn stores_sharing_a_repository_see_the_same_tasks(store: TestStore) {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let writer = TaskStore::new(Arc::clone(&repository));
    let reader = TaskStore::new(repository);

    let created = writer
        .add_task(TaskDraft::new("shared"))
        .expect("add succeeds");

    assert_eq!(
        reader.find_task(created.id()).expect("lookup succeeds"),
        Some(created)
    );
    assert!(store.get_tasks().expect("listing succeeds").is_empty());
}

#[rstest]
fn mutating_a_returned_copy_leaves_the_store_untouched(store: TestStore) {
    let created = store
        .add_task(TaskDraft::new("original"))
        .expect("add succeeds");

    let mut copy = store
        .find_task(created.id())
        .expect("lookup succeeds")
        .expect("task exists");
    copy.toggle_completion();
    copy.apply(TaskUpdate::new().with_title("edited"));

    let stored = store
        .find_task(created.id())
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(stored.title(), "original");
    assert!(!stored.is_completed());
}

#[rstest]
fn update_then_toggle_then_remove(store: TestStore, now: DateTime<Utc>) {
    let created = store
        .add_task(TaskDraft::new("Draft").with_type(TaskType::Timed))
        .expect("add succeeds");
    let due = now + Duration::hours(3);

    let updated = store
        .update_task(
            created.id(),
            TaskUpdate::new()
                .with_title("Final")
                .with_description("ship it")
                .with_due_date(due),
        )
        .expect("update succeeds")
        .expect("task exists");
    assert_eq!(updated.title(), "Final");
    assert_eq!(updated.description(), Some("ship it"));
    assert_eq!(updated.due_date(), Some(due));

    let toggled = store
        .toggle_task_completion(created.id())
        .expect("toggle succeeds")
        .expect("task exists");
    assert!(toggled.is_completed());

    let removed = store
        .remove_task(created.id())
        .expect("remove succeeds")
        .expect("task existed");
    assert_eq!(removed, toggled);
    assert!(store.get_tasks().expect("listing succeeds").is_empty());
}

#[rstest]
fn search_covers_titles_and_descriptions(store: TestStore) {
    store
        .add_task(TaskDraft::new("Buy milk"))
        .expect("add succeeds");
    store
        .add_task(TaskDraft::new("Errands").with_description("pick up MILK"))
        .expect("add succeeds");
    store
        .add_task(TaskDraft::new("Gym"))
        .expect("add succeeds");

    let hits = store.search_task("Milk").expect("search succeeds");
    assert_eq!(titles(&hits), ["Buy milk", "Errands"]);

    let everything = store.search_task("").expect("search succeeds");
    assert_eq!(everything.len(), 3);
}

#[rstest]
fn subtask_toggles_reject_bad_indices_without_side_effects(store: TestStore) {
    let created = store
        .add_task(
            TaskDraft::new("Pack")
                .with_type(TaskType::Checklist)
                .with_sub_tasks(["Passport"]),
        )
        .expect("add succeeds");

    let result = store.toggle_sub_task(created.id(), 4);

    assert!(matches!(
        result,
        Err(TaskStoreError::Domain(TaskDomainError::SubTaskOutOfRange { index: 4, .. }))
    ));
    let stored = store
        .find_task(created.id())
        .expect("lookup succeeds")
        .expect("task exists");
    assert_eq!(stored.sub_tasks(), Some(&[SubTask::new("Passport")][..]));
}

#[rstest]
fn imported_external_records_keep_their_ids(store: TestStore) {
    let records = [
        ExternalTask::new("ext-1", "Pay rent").with_deadline("2024-07-01"),
        ExternalTask::new("ext-2", "Stock up").with_status("pending"),
        ExternalTask::new("ext-3", "Call mum"),
    ];
    let tasks = adapt_tasks(&records).expect("records adapt");

    let imported = store.import_tasks(tasks).expect("import succeeds");

    assert_eq!(imported, 3);
    let stored = store.get_tasks().expect("listing succeeds");
    let kinds: Vec<TaskType> = stored.iter().map(|task| task.task_type()).collect();
    assert_eq!(
        kinds,
        [TaskType::Timed, TaskType::Checklist, TaskType::Basic]
    );
    assert!(
        store
            .find_task(&TaskId::from_raw("ext-2"))
            .expect("lookup succeeds")
            .is_some()
    );
}

#[rstest]
fn importing_a_known_id_is_rejected(store: TestStore) {
    let records = [ExternalTask::new("ext-1", "Pay rent")];
    let tasks = adapt_tasks(&records).expect("records adapt");
    store
        .import_tasks(tasks.clone())
        .expect("first import succeeds");

    let result = store.import_tasks(tasks);

    assert!(matches!(result, Err(TaskStoreError::Repository(_))));
    assert_eq!(store.get_tasks().expect("listing succeeds").len(), 1);
}
