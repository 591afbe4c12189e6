use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid project configuration: {0}")]
    Configuration(String),

    #[error("Failed to load generator module {}: {reason}", .path.display())]
    ModuleLoad { path: PathBuf, reason: String },

    #[error("File already exists: {} (re-run with --skip to keep existing files)", .0.display())]
    Conflict(PathBuf),

    #[error("Template directory does not exist: {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("Template rendering failed: {0}")]
    Render(#[from] tera::Error),

    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
