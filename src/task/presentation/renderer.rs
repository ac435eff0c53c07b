//! Plain-text card rendering.

use minijinja::Environment;

use super::{PresentationConfig, PresentationError, TaskView};

/// Renders task views into text through a `minijinja` template.
#[derive(Debug, Clone)]
pub struct TaskCardRenderer {
    template: String,
}

impl TaskCardRenderer {
    /// Uses the card template from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when the template does not
    /// parse.
    pub fn from_config(config: &PresentationConfig) -> Result<Self, PresentationError> {
        Self::with_template(config.card_template.clone())
    }

    /// Uses a custom card template.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when the template does not
    /// parse.
    pub fn with_template(template: String) -> Result<Self, PresentationError> {
        Environment::new()
            .template_from_str(&template)
            .map_err(|error| PresentationError::Template(error.to_string()))?;
        Ok(Self { template })
    }

    /// Renders one card.
    ///
    /// # Errors
    ///
    /// Returns [`PresentationError::Template`] when rendering fails.
    pub fn render(&self, view: &TaskView) -> Result<String, PresentationError> {
        Environment::new()
            .render_str(&self.template, view)
            .map_err(|error| PresentationError::Template(error.to_string()))
    }
}
