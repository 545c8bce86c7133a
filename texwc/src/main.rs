// src/main.rs
use clap::Parser as _;
use std::process::ExitCode;

use texwc::cli::{self, Args};
use texwc::logging;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = logging::init(args.debug) {
        eprintln!("Error: {err:#}");
        return ExitCode::from(2);
    }

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
