use clap::Args;
use std::path::PathBuf;
use serde::Serialize;
use crate::services::{ProjectGenerator, WriteMode};
use crate::utils::config::ConfigParser;
use crate::utils::error::Result;

/// Create a new project directory from the built-in templates
#[derive(Debug, Args)]
pub struct NewCommand {
    /// The name of the project to create. No spaces.
    #[arg(short, long)]
    pub name: String,

    /// The path/to/dir of the project to create. No spaces.
    #[arg(short, long)]
    pub path: String,

    /// Include the AWS Lambda handler method
    #[arg(short = 'l', long)]
    pub awslambda: bool,

    /// TOML file overriding template values (images, interpreter, handler name)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write into a staging directory and move it into place when complete
    #[arg(long)]
    pub staged: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for a successful run
#[derive(Debug, Serialize)]
pub struct NewResponse {
    pub status: String,
    pub project_name: String,
    pub project_path: String,
    pub lambda_handler: bool,
    pub files: Vec<String>,
}

impl NewCommand {
    /// Execute the command
    pub fn run(&self) -> Result<()> {
        // Validation happens before the config file is even read
        let generator = ProjectGenerator::new(self.name.as_str(), self.path.as_str(), self.awslambda)?;

        let generator = match &self.config {
            Some(path) => generator.with_config(ConfigParser::load_template_config(path)?)?,
            None => generator,
        };

        let write_mode = if self.staged { WriteMode::Staged } else { WriteMode::Direct };
        let generator = generator.with_write_mode(write_mode);

        let written = generator.generate()?;
        let project_path = generator.spec().full_path().display().to_string();

        if self.json {
            let response = NewResponse {
                status: "success".to_string(),
                project_name: self.name.clone(),
                project_path,
                lambda_handler: self.awslambda,
                files: written.iter().map(|path| path.display().to_string()).collect(),
            };

            let json_output = serde_json::to_string_pretty(&response)?;

            println!("{json_output}");
        } else {
            println!("Created project '{}' at {}", self.name, project_path);
        }

        Ok(())
    }
}
