use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::info;
use tally_backend::Counter;
use tally_frontend::{driver::run_session, logging::setup_logger, ConfigSource, TallyArgs};

const EXIT_ERR: u8 = 1;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("error: {e:#}").red().bold());
            ExitCode::from(EXIT_ERR)
        }
    }
}

fn run() -> Result<()> {
    let args = TallyArgs::parse();
    let (config, source) = args.resolve_config()?;

    if let Err(e) = setup_logger(&config.log_file) {
        eprintln!(
            "{}",
            format!("warning: logging disabled, failed to initialize fern: {e}").yellow()
        );
    }
    match &source {
        ConfigSource::File(path) => info!("loaded configuration from {}", path.display()),
        ConfigSource::Defaults => info!("no configuration file, using defaults"),
    }

    let counter = Counter::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(args.number, stdin.lock(), &mut stdout, &counter)
}
