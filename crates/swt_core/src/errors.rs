//! Error types shared across the workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwtError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SwtError>;
