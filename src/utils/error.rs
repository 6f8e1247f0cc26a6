// Common error types for pybox

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PyboxError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("The directory '{}' already exists.", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to serialize JSON response: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PyboxError>;

/// Error as shown to the user at the process boundary
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_pybox_error(err: &PyboxError) -> Self {
        let hint = match err {
            PyboxError::ValidationError(_) => {
                Some("Values must be non-empty and must not contain spaces; --name must be a plain relative name.".to_string())
            }
            PyboxError::AlreadyExists { .. } => {
                Some("Choose a different --name or --path; existing projects are never overwritten.".to_string())
            }
            PyboxError::ConfigError(_) => {
                Some("Check the file passed to --config.".to_string())
            }
            PyboxError::SerializationError(_) | PyboxError::IoError(_) => None,
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code: 1,
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
