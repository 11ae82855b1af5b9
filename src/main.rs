mod extractor;
mod manager;
mod report;
mod stats;

use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::Parser;
use std::io;

/// Input file, resolved against the current working directory.
const INPUT_FILE: &str = "result.txt";

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::debug!("{args:#?}");

    let mgr = Manager::new(INPUT_FILE);

    let stdout = io::stdout();
    mgr.run(stdout.lock()).context("failed to run pipeline")?;

    Ok(())
}
