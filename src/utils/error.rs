// Common error types for mkproj

use std::path::PathBuf;
use thiserror::Error;

use crate::utils::validation::NameViolation;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("no project directory (create the project directory first)")]
    NoProjectDirectory,

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template render failed: {0}")]
    TemplateRender(#[from] handlebars::RenderError),

    #[error("invalid project name: {0}")]
    InvalidName(#[from] NameViolation),

    #[error("no valid project name given after {} attempts", crate::utils::prompt::MAX_NAME_ATTEMPTS)]
    NameAttemptsExhausted,

    #[error("environment tool failed: {0}")]
    EnvironmentTool(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
