//! Variant presenters and their dispatch by task type.

use super::{DueDateFormat, PresentationConfig, PresentationError, TaskAction, TaskField, TaskView};
use crate::task::domain::{Task, TaskType};

/// Presentation strategy for one task variant.
pub trait TaskPresenter: Send + Sync {
    /// Returns the display elements for `task`, in order.
    fn fields(&self, task: &Task) -> Vec<TaskField>;

    /// Returns the actions offered on `task`, in order.
    fn actions(&self, task: &Task) -> Vec<TaskAction>;

    /// Builds the full view for `task`.
    fn present(&self, task: &Task) -> TaskView {
        TaskView {
            task_id: task.id().clone(),
            task_type: task.task_type(),
            fields: self.fields(task),
            actions: self.actions(task),
        }
    }
}

fn heading(task: &Task) -> Vec<TaskField> {
    let mut fields = vec![TaskField::Title {
        text: task.title().to_owned(),
        struck: task.is_completed(),
    }];
    if let Some(description) = task.description().filter(|text| !text.is_empty()) {
        fields.push(TaskField::Description {
            text: description.to_owned(),
        });
    }
    fields
}

fn push_indicator(fields: &mut Vec<TaskField>, task: &Task) {
    if task.is_completed() {
        fields.push(TaskField::CompletedIndicator);
    }
}

/// Complete while the task is open, delete always.
fn standard_actions(task: &Task) -> Vec<TaskAction> {
    let mut actions = Vec::with_capacity(2);
    if !task.is_completed() {
        actions.push(TaskAction::Complete);
    }
    actions.push(TaskAction::Delete);
    actions
}

/// Presenter for basic tasks, also used for unrecognised variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPresenter;

impl TaskPresenter for BasicPresenter {
    fn fields(&self, task: &Task) -> Vec<TaskField> {
        let mut fields = heading(task);
        push_indicator(&mut fields, task);
        fields
    }

    fn actions(&self, task: &Task) -> Vec<TaskAction> {
        standard_actions(task)
    }
}

/// Presenter for timed tasks: basic layout plus the formatted due date.
#[derive(Debug, Clone, Default)]
pub struct TimedPresenter {
    due_date_format: DueDateFormat,
}

impl TimedPresenter {
    /// Creates a presenter formatting due dates with `due_date_format`.
    #[must_use]
    pub const fn new(due_date_format: DueDateFormat) -> Self {
        Self { due_date_format }
    }
}

impl TaskPresenter for TimedPresenter {
    fn fields(&self, task: &Task) -> Vec<TaskField> {
        let mut fields = heading(task);
        if let Some(due_date) = task.due_date() {
            fields.push(TaskField::DueDate {
                text: self.due_date_format.format(due_date),
            });
        }
        push_indicator(&mut fields, task);
        fields
    }

    fn actions(&self, task: &Task) -> Vec<TaskAction> {
        standard_actions(task)
    }
}

/// Presenter for checklist tasks.
///
/// Adds one toggle per subtask and a completion checkbox. The checkbox stays
/// available after completion so the task can be reopened.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecklistPresenter;

impl TaskPresenter for ChecklistPresenter {
    fn fields(&self, task: &Task) -> Vec<TaskField> {
        let mut fields = heading(task);
        fields.extend(
            task.sub_tasks()
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(index, sub_task)| TaskField::SubTask {
                    index,
                    text: sub_task.text().to_owned(),
                    is_done: sub_task.is_done(),
                }),
        );
        fields.push(TaskField::CompletionCheckbox {
            checked: task.is_completed(),
        });
        push_indicator(&mut fields, task);
        fields
    }

    fn actions(&self, task: &Task) -> Vec<TaskAction> {
        let sub_task_count = task.sub_tasks().map_or(0, <[_]>::len);
        let mut actions: Vec<TaskAction> = (0..sub_task_count)
            .map(|index| TaskAction::ToggleSubTask { index })
            .collect();
        actions.push(TaskAction::Complete);
        actions.push(TaskAction::Delete);
        actions
    }
}

/// The presenter set, one per variant.
#[derive(Debug, Clone, Default)]
pub struct TaskPresenters {
    basic: BasicPresenter,
    timed: TimedPresenter,
    checklist: ChecklistPresenter,
}

impl TaskPresenters {
    /// Builds the presenter set from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError`] when the due-date settings are invalid.
    pub fn from_config(config: &PresentationConfig) -> Result<Self, PresentationError> {
        Ok(Self {
            basic: BasicPresenter,
            timed: TimedPresenter::new(DueDateFormat::from_config(config)?),
            checklist: ChecklistPresenter,
        })
    }

    /// Selects the presenter for a variant.
    #[must_use]
    pub fn for_type(&self, task_type: TaskType) -> &dyn TaskPresenter {
        match task_type {
            TaskType::Basic => &self.basic,
            TaskType::Timed => &self.timed,
            TaskType::Checklist => &self.checklist,
        }
    }

    /// Selects the presenter for a raw type tag; unknown tags get the basic
    /// presenter.
    #[must_use]
    pub fn for_tag(&self, tag: &str) -> &dyn TaskPresenter {
        self.for_type(TaskType::from_tag(tag))
    }

    /// Presents `task` with the presenter for its variant.
    #[must_use]
    pub fn present(&self, task: &Task) -> TaskView {
        self.for_type(task.task_type()).present(task)
    }
}
