use serde::{Deserialize, Serialize};
use crate::utils::error::Result;
use crate::utils::validation::validate_no_whitespace;

/// Constants substituted into the generated files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Extension of the entry script, without the leading dot
    pub source_extension: String,
    /// Interpreter used by the plain Dockerfile entrypoint
    pub interpreter: String,
    /// Base image for the plain variant
    pub runtime_image: String,
    /// Base image for the handler variant
    pub lambda_image: String,
    /// Function name of the generated handler
    pub handler_name: String,
    /// Platform passed to `docker build`
    pub docker_platform: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            source_extension: "py".to_string(),
            interpreter: "python3".to_string(),
            runtime_image: "public.ecr.aws/docker/library/python:latest".to_string(),
            lambda_image: "public.ecr.aws/lambda/python:latest".to_string(),
            handler_name: "lambda_handler".to_string(),
            docker_platform: "linux/amd64".to_string(),
        }
    }
}

impl TemplateConfig {
    /// Every value ends up inside a generated file, so none may be empty or
    /// contain whitespace.
    pub fn validate(&self) -> Result<()> {
        validate_no_whitespace(&[
            ("source_extension", self.source_extension.as_str()),
            ("interpreter", self.interpreter.as_str()),
            ("runtime_image", self.runtime_image.as_str()),
            ("lambda_image", self.lambda_image.as_str()),
            ("handler_name", self.handler_name.as_str()),
            ("docker_platform", self.docker_platform.as_str()),
        ])
    }

    /// File name of the entry script for a project called `name`
    pub fn entry_file_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.source_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TemplateConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.entry_file_name("demo"), "demo.py");
    }

    #[test]
    fn test_rejects_blank_handler_name() {
        let config = TemplateConfig {
            handler_name: String::new(),
            ..TemplateConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("handler_name"));
    }

    #[test]
    fn test_rejects_image_with_space() {
        let config = TemplateConfig {
            lambda_image: "my image".to_string(),
            ..TemplateConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
