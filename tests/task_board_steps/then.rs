//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::task::{domain::TaskType, services::AlertKind};

#[then("the board holds exactly {count:usize} tasks")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = world.store.get_tasks().wrap_err("list tasks")?;
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}

#[then(r#"the task "{title}" is an open basic task described as "{description}""#)]
fn open_basic_task(
    world: &BoardWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(task.task_type() == TaskType::Basic, "expected a basic task");
    eyre::ensure!(!task.is_completed(), "expected an open task");
    eyre::ensure!(
        task.description() == Some(description.as_str()),
        "unexpected description {:?}",
        task.description()
    );
    Ok(())
}

fn alerts_mentioning(world: &BoardWorld, kind: AlertKind, title: &str) -> usize {
    world
        .alerts
        .iter()
        .filter(|alert| alert.kind() == kind && alert.message().contains(title))
        .count()
}

#[then(r#"exactly {count:usize} overdue alert mentions "{title}""#)]
fn overdue_alerts(world: &BoardWorld, count: usize, title: String) -> Result<(), eyre::Report> {
    let found = alerts_mentioning(world, AlertKind::Overdue, &title);
    eyre::ensure!(found == count, "expected {count} overdue alerts, found {found}");
    Ok(())
}

#[then(r#"no due-soon alert mentions "{title}""#)]
fn no_due_soon_alert(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let found = alerts_mentioning(world, AlertKind::DueSoon, &title);
    eyre::ensure!(found == 0, "expected no due-soon alerts, found {found}");
    Ok(())
}

fn sub_task_done(world: &BoardWorld, index: usize, title: &str) -> Result<bool, eyre::Report> {
    let task = world.task_titled(title)?;
    task.sub_tasks()
        .and_then(|items| items.get(index))
        .map(|item| item.is_done())
        .ok_or_else(|| eyre::eyre!("task {title:?} has no subtask {index}"))
}

#[then(r#"subtask {index:usize} of "{title}" is done"#)]
fn sub_task_is_done(world: &BoardWorld, index: usize, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        sub_task_done(world, index, &title)?,
        "expected subtask {index} to be done"
    );
    Ok(())
}

#[then(r#"subtask {index:usize} of "{title}" is not done"#)]
fn sub_task_is_not_done(
    world: &BoardWorld,
    index: usize,
    title: String,
) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !sub_task_done(world, index, &title)?,
        "expected subtask {index} to be open"
    );
    Ok(())
}

#[then(r#"the task "{title}" is not completed"#)]
fn task_not_completed(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(!task.is_completed(), "expected {title:?} to stay open");
    Ok(())
}

#[then("the update reports that no task matched")]
fn update_reports_absence(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
    let updated = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected update failure: {err}"))?;
    eyre::ensure!(updated.is_none(), "expected no task to be updated");
    Ok(())
}

#[then(r#"the task "{title}" is a completed checklist task with id "{id}""#)]
fn completed_checklist_with_id(
    world: &BoardWorld,
    title: String,
    id: String,
) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    eyre::ensure!(task.id().as_str() == id, "unexpected id {}", task.id());
    eyre::ensure!(
        task.task_type() == TaskType::Checklist,
        "expected a checklist task"
    );
    eyre::ensure!(task.is_completed(), "expected a completed task");
    Ok(())
}
