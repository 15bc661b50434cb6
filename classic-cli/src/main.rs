//! `classic` binary: command-line front end for the cipher library.

mod cli;
mod dispatch;

use std::process::ExitCode;

use clap::CommandFactory;

use crate::cli::Cli;

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli = Cli::parse_args();
    let Some(action) = cli.action() else {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    };

    match dispatch::run(cli.cipher, action, cli.json) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
