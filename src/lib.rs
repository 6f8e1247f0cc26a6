// pybox - Python Docker project scaffolding
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::*;
pub use utils::error::{PyboxError, Result};
