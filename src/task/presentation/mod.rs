//! Variant presenter dispatch.
//!
//! Each task variant has a presenter deciding which fields and actions its
//! card exposes. Drawing the card is left to the presentation collaborator;
//! this module only describes it, and offers a plain-text rendering for
//! terminal front ends.

mod config;
mod handler;
mod presenter;
mod renderer;
mod view;

use thiserror::Error;

pub use config::{
    DEFAULT_CARD_TEMPLATE, DEFAULT_DUE_DATE_FORMAT, DueDateFormat, PresentationConfig,
};
pub use handler::StoreEventHandler;
pub use presenter::{
    BasicPresenter, ChecklistPresenter, TaskPresenter, TaskPresenters, TimedPresenter,
};
pub use renderer::TaskCardRenderer;
pub use view::{TaskAction, TaskEventHandler, TaskField, TaskView};

/// Errors raised while configuring or rendering presentations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PresentationError {
    /// The due-date pattern contains an unknown specifier.
    #[error("invalid due date format: {0}")]
    InvalidDateFormat(String),

    /// The UTC offset is outside a single day.
    #[error("invalid utc offset: {0} minutes")]
    InvalidUtcOffset(i32),

    /// The card template failed to parse or render.
    #[error("card template error: {0}")]
    Template(String),
}
