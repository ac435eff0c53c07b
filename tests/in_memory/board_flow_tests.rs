//! End-to-end flows across the store, presenters, sorting, and alerts.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rstest::rstest;
use taskboard::{
    config::TaskboardConfig,
    task::{
        domain::{TaskDraft, TaskType},
        presentation::{StoreEventHandler, TaskAction, TaskCardRenderer, TaskPresenters},
        services::{AlertKind, SortStrategy, TaskNotifier},
    },
};

use super::helpers::{FixedClock, TestStore, now, store, titles};

#[rstest]
fn card_actions_drive_the_store(store: TestStore) {
    let presenters =
        TaskPresenters::from_config(&TaskboardConfig::default().presentation).expect("valid");
    let checklist = store
        .add_task(
            TaskDraft::new("Pack")
                .with_type(TaskType::Checklist)
                .with_sub_tasks(["Passport", "Charger"]),
        )
        .expect("add succeeds");
    let chore = store
        .add_task(TaskDraft::new("Dishes"))
        .expect("add succeeds");
    let mut handler = StoreEventHandler::new(&store);

    let view = presenters.present(&checklist);
    let toggle = TaskAction::ToggleSubTask { index: 1 };
    assert!(view.offers(toggle));
    toggle
        .dispatch(&view.task_id, &mut handler)
        .expect("toggle applies");
    TaskAction::Complete
        .dispatch(&view.task_id, &mut handler)
        .expect("completion applies");
    TaskAction::Delete
        .dispatch(chore.id(), &mut handler)
        .expect("delete applies");

    let remaining = store.get_tasks().expect("listing succeeds");
    assert_eq!(titles(&remaining), ["Pack"]);
    let pack = remaining.first().expect("one task remains");
    assert!(pack.is_completed());
    let done: Vec<bool> = pack
        .sub_tasks()
        .unwrap_or_default()
        .iter()
        .map(|item| item.is_done())
        .collect();
    assert_eq!(done, [false, true]);

    let card = TaskCardRenderer::from_config(&TaskboardConfig::default().presentation)
        .expect("template parses")
        .render(&presenters.present(pack))
        .expect("card renders");
    assert!(card.contains("[x] Charger"));
    assert!(card.contains("[x] Mark as Completed"));
}

#[rstest]
fn actions_on_deleted_tasks_are_ignored(store: TestStore) {
    let task = store
        .add_task(TaskDraft::new("Gone soon"))
        .expect("add succeeds");
    store.remove_task(task.id()).expect("remove succeeds");
    let mut handler = StoreEventHandler::new(&store);

    TaskAction::Complete
        .dispatch(task.id(), &mut handler)
        .expect("missing tasks are not an error");

    assert!(store.get_tasks().expect("listing succeeds").is_empty());
}

#[rstest]
fn configured_window_and_sort_order_apply_to_the_board(store: TestStore, now: DateTime<Utc>) {
    let config = TaskboardConfig::from_json_str(r#"{"notification": {"upcoming_window_days": 3}}"#)
        .expect("config parses");
    let notifier = TaskNotifier::with_config(Arc::new(FixedClock(now)), config.notification);

    for (title, offset) in [
        ("in two days", Duration::days(2)),
        ("last week", -Duration::days(7)),
        ("in a fortnight", Duration::days(14)),
    ] {
        store
            .add_task(
                TaskDraft::new(title)
                    .with_type(TaskType::Timed)
                    .with_due_date(now + offset),
            )
            .expect("add succeeds");
    }
    store
        .add_task(TaskDraft::new("someday"))
        .expect("add succeeds");
    let tasks = store.get_tasks().expect("listing succeeds");

    let alerts = notifier.evaluate(&tasks);
    let summary: Vec<(AlertKind, &str)> = alerts
        .iter()
        .map(|alert| (alert.kind(), alert.message()))
        .collect();
    assert_eq!(
        summary,
        [
            (AlertKind::Overdue, "Task \"last week\" is overdue!"),
            (AlertKind::DueSoon, "Task \"in two days\" is due soon!"),
        ]
    );

    let by_date = SortStrategy::from_name_or_default("sortByDate").apply(&tasks);
    assert_eq!(
        titles(&by_date),
        ["last week", "in two days", "in a fortnight", "someday"]
    );
    let by_name = SortStrategy::from_name_or_default("sortByName").apply(&tasks);
    assert_eq!(
        titles(&by_name),
        ["in a fortnight", "in two days", "last week", "someday"]
    );
    assert_eq!(
        titles(&tasks),
        ["in two days", "last week", "in a fortnight", "someday"]
    );
}
