//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while preparing or rendering scaffold files
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Command error: {0}")]
    CommandError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
