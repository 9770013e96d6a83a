//! Error types for template rendering

use std::path::PathBuf;

use thiserror::Error;

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while rendering a template
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template file with this name in the template directory
    #[error("Template not found: {name} (looked in {})", .path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    /// The engine rejected the template or failed while rendering it
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<handlebars::RenderError> for TemplateError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Render(err.to_string())
    }
}
