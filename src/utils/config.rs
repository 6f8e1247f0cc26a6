// Configuration utilities and TOML parsing

use std::fs;
use std::path::Path;
use crate::models::TemplateConfig;
use crate::utils::error::{PyboxError, Result};

/// Loads template overrides from a TOML file
pub struct ConfigParser;

impl ConfigParser {
    /// Load and validate a template configuration file
    pub fn load_template_config<P: AsRef<Path>>(path: P) -> Result<TemplateConfig> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(PyboxError::ConfigError(
                format!("Configuration file not found: {}", path.display())
            ));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| PyboxError::ConfigError(
                format!("Failed to read {}: {}", path.display(), e)
            ))?;

        Self::parse_template_config(&content)
    }

    /// Parse a template configuration from a TOML string.
    ///
    /// Keys that are left out keep their default value.
    pub fn parse_template_config(content: &str) -> Result<TemplateConfig> {
        let config: TemplateConfig = toml::from_str(content)
            .map_err(|e| PyboxError::ConfigError(
                format!("Invalid TOML syntax: {e}")
            ))?;

        config.validate()?;

        Ok(config)
    }
}
