//! When steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{
    adapters::external::{ExternalTask, adapt_task},
    domain::{TaskDraft, TaskId, TaskUpdate},
};

#[when(r#"a basic task "{title}" is added with description "{description}""#)]
fn add_basic_task(
    world: &mut BoardWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    world
        .store
        .add_task(TaskDraft::new(title).with_description(description))
        .wrap_err("add basic task")?;
    Ok(())
}

#[when("alerts are evaluated")]
fn evaluate_alerts(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let tasks = world.store.get_tasks().wrap_err("list tasks")?;
    world.alerts = world.notifier.evaluate(&tasks);
    Ok(())
}

#[when(r#"subtask {index:usize} of "{title}" is toggled"#)]
fn toggle_sub_task(world: &mut BoardWorld, index: usize, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    world
        .store
        .toggle_sub_task(task.id(), index)
        .wrap_err("toggle subtask")?
        .ok_or_else(|| eyre::eyre!("task {title:?} vanished"))?;
    Ok(())
}

#[when(r#"an unknown task is renamed to "{title}""#)]
fn rename_unknown_task(world: &mut BoardWorld, title: String) {
    let result = world.store.update_task(
        &TaskId::from_raw("no-such-task"),
        TaskUpdate::new().with_title(title),
    );
    world.last_update = Some(result);
}

#[when(r#"the external record "{id}" named "{name}" with status "{status}" is imported"#)]
fn import_external_record(
    world: &mut BoardWorld,
    id: String,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task = adapt_task(&ExternalTask::new(id, name).with_status(status))
        .wrap_err("adapt external record")?;
    world
        .store
        .import_tasks(vec![task])
        .wrap_err("import adapted task")?;
    Ok(())
}
