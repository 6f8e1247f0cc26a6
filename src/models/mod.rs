// Models module for data structures
pub mod project_file;
pub mod project_spec;
pub mod template_config;

pub use project_file::{ProjectFile, ProjectFileKind};
pub use project_spec::ProjectSpec;
pub use template_config::TemplateConfig;
