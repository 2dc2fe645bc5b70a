//! Provides the main entry point to the program.
use ::log::error;
use footprint::cli::run_cli;
use footprint::log::is_logger_initialised;
use human_panic::setup_panic;
use std::process::ExitCode;

fn main() -> ExitCode {
    setup_panic!();

    if let Err(err) = run_cli() {
        if is_logger_initialised() {
            error!("{err:?}");
        } else {
            eprintln!("Error: {err:?}");
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
