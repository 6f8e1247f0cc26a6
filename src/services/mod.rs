// Services module for business logic
pub mod project_generator;
pub mod templates;

pub use project_generator::{ProjectGenerator, WriteMode};
