#[macro_use]
mod log;

mod cli;
mod config;
mod error;
mod project;
mod resolve;
mod tools;
mod utils;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
