//! GDP tidy CLI.

use clap::Parser;
use gdp_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{error_category, run_sources, run_tidy};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Tidy(args) => run_tidy(args).map(|result| print_summary(&result)),
        Command::Sources => run_sources(),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error[{}]: {error:#}", error_category(&error));
            1
        }
    };
    std::process::exit(exit_code);
}
