use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Usage: catch2html [benchmark_output_file]")]
    Usage,

    #[error("Error: File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl ReportError {
    /// Errors whose message is part of the tool's regular stdout contract.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Usage | Self::FileNotFound(_))
    }
}
