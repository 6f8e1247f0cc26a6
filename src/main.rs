// pybox - Python Docker project scaffolding
// Main CLI entry point

use clap::Parser;
use std::process;
use pybox::cli::{Cli, CliDispatcher};
use pybox::utils::error::UserError;
use pybox::utils::logging;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = CliDispatcher::execute(&cli);

    if let Err(err) = result {
        let user_error = UserError::from_pybox_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
