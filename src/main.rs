// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use env_logger::Env;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or("LOGGING", "warn")).init();

    match langcount::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
