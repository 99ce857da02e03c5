// src/main.rs
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use numerology::args::Args;
use numerology::config::Config;
use numerology::{engine, logging};

fn try_main(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let outcome = engine::run(config, &mut writer);
    // Lines printed before a fatal error are kept.
    let flushed = writer.flush();
    outcome.context("numerology evaluation failed")?;
    flushed.context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    if let Err(e) = logging::init_logging(config.verbosity) {
        eprintln!("Logging disabled: {e}");
    }

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
