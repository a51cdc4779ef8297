#![allow(dead_code)]

mod rsa;
mod codec;
mod math;
mod cli;
mod constants;
mod error;

use std::io;
use std::process::ExitCode;
use clap::Parser;
use log::error;
use crate::cli::{Cli, APOLOGY};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    match cli.execute(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            if err.is_usage_error() {
                eprintln!("{}", err);
            }
            else {
                eprintln!("{}", APOLOGY);
            }
            ExitCode::FAILURE
        }
    }
}
