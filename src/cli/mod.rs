// CLI module for command-line interface

pub mod new;

use clap::Parser;
use crate::utils::error::Result;

use self::new::NewCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "pybox")]
#[command(about = "Create a template Python Docker project, with optional AWS Lambda handler")]
#[command(long_about = r#"pybox creates a new directory <PATH>/<NAME> containing a minimal
containerised Python project:

  <NAME>.py           Entry script (Lambda handler with --awslambda)
  requirements.txt    Dependency manifest placeholder
  Dockerfile          Generic or Lambda base image
  Makefile            help, build, run and clean targets

The target directory must not exist; pybox never overwrites or merges.

Examples:
  pybox -n demo -p /tmp                 Plain Python project in /tmp/demo
  pybox -n demo -p /tmp --awslambda     Project with a Lambda handler
  pybox -n demo -p . --staged           Write atomically via a staging directory
  pybox -n demo -p . --config box.toml  Override base images or handler name"#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub command: NewCommand,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the parsed command line
    pub fn execute(cli: &Cli) -> Result<()> {
        cli.command.run()
    }
}
