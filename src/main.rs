// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use string_analyzer::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    app::run(&config)?;
    Ok(())
}
