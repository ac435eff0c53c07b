//! Aggregate configuration for embedding the task board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::{
    adapters::json_file::DEFAULT_SNAPSHOT_FILE_NAME, presentation::PresentationConfig,
    services::NotificationConfig,
};

/// Error returned when configuration text cannot be read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid taskboard configuration: {0}")]
pub struct ConfigError(pub String);

/// Settings for every configurable part of the task board.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use taskboard::config::TaskboardConfig;
///
/// let config = TaskboardConfig::from_json_str(r#"{"notification": {"upcoming_window_days": 3}}"#)
///     .expect("valid configuration");
/// assert_eq!(config.notification.upcoming_window_days, 3);
/// assert_eq!(config.snapshot_file_name, "tasks.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    /// Alert evaluation settings.
    pub notification: NotificationConfig,
    /// Card presentation settings.
    pub presentation: PresentationConfig,
    /// File name used by the JSON snapshot store.
    pub snapshot_file_name: String,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            notification: NotificationConfig::default(),
            presentation: PresentationConfig::default(),
            snapshot_file_name: DEFAULT_SNAPSHOT_FILE_NAME.to_owned(),
        }
    }
}

impl TaskboardConfig {
    /// Parses configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is not a valid configuration
    /// object.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|err| ConfigError(err.to_string()))
    }
}
