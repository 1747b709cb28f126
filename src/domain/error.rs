use std::io;

use thiserror::Error;

/// Library-wide error type for crudgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Resource name is invalid.
    #[error(
        "Invalid resource name '{0}': must start with a letter and contain only letters, digits, hyphens, or underscores"
    )]
    InvalidResourceName(String),

    /// Action identifier is invalid.
    #[error(
        "Invalid action '{0}': must start with a lowercase letter and contain only lowercase letters, digits, or underscores"
    )]
    InvalidAction(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// No template exists for the requested name.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template failed to render.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Routes file has no `routes.draw do` block to insert into.
    #[error("Routes file '{0}' has no `routes.draw do` block")]
    RoutesAnchorMissing(String),

    /// Lint command could not be started.
    #[error("Lint error running '{command}': {details}")]
    LintCommand { command: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
