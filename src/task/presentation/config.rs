//! Presentation settings.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use super::PresentationError;

/// Numeric 12-hour layout, e.g. `3/5/2024, 6:30:00 PM`.
pub const DEFAULT_DUE_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Plain-text card layout rendered by [`super::TaskCardRenderer`].
pub const DEFAULT_CARD_TEMPLATE: &str = "\
{% for field in fields %}\
{% if field.kind == 'title' %}{% if field.struck %}~{{ field.text }}~{% else %}{{ field.text }}{% endif %}\n\
{% elif field.kind == 'description' %}  {{ field.text }}\n\
{% elif field.kind == 'due_date' %}  Due: {{ field.text }}\n\
{% elif field.kind == 'sub_task' %}  [{% if field.is_done %}x{% else %} {% endif %}] {{ field.text }}\n\
{% elif field.kind == 'completion_checkbox' %}  [{% if field.checked %}x{% else %} {% endif %}] Mark as Completed\n\
{% elif field.kind == 'completed_indicator' %}  (completed)\n\
{% endif %}\
{% endfor %}\
{% for action in actions %}<{{ action.kind }}{% if action.index is defined %} {{ action.index }}{% endif %}>{% if not loop.last %} {% endif %}{% endfor %}";

/// Settings for task presentation.
///
/// # Examples
///
/// ```
/// use taskboard::task::presentation::PresentationConfig;
///
/// let config = PresentationConfig::default();
/// assert_eq!(config.utc_offset_minutes, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// `strftime` pattern for due dates.
    pub due_date_format: String,
    /// Offset from UTC, in minutes, applied before formatting due dates.
    pub utc_offset_minutes: i32,
    /// `minijinja` template for plain-text cards.
    pub card_template: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            due_date_format: DEFAULT_DUE_DATE_FORMAT.to_owned(),
            utc_offset_minutes: 0,
            card_template: DEFAULT_CARD_TEMPLATE.to_owned(),
        }
    }
}

/// Validated due-date formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDateFormat {
    pattern: String,
    offset: FixedOffset,
}

impl DueDateFormat {
    /// Builds a formatter from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::InvalidDateFormat`] for an unparseable
    /// pattern and [`PresentationError::InvalidUtcOffset`] for an offset of
    /// a day or more.
    pub fn from_config(config: &PresentationConfig) -> Result<Self, PresentationError> {
        if StrftimeItems::new(&config.due_date_format).any(|item| matches!(item, Item::Error)) {
            return Err(PresentationError::InvalidDateFormat(
                config.due_date_format.clone(),
            ));
        }
        let offset = config
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(PresentationError::InvalidUtcOffset(config.utc_offset_minutes))?;
        Ok(Self {
            pattern: config.due_date_format.clone(),
            offset,
        })
    }

    /// Formats a due date.
    #[must_use]
    pub fn format(&self, due_date: DateTime<Utc>) -> String {
        due_date
            .with_timezone(&self.offset)
            .format(&self.pattern)
            .to_string()
    }
}

impl Default for DueDateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DUE_DATE_FORMAT.to_owned(),
            offset: Utc.fix(),
        }
    }
}
