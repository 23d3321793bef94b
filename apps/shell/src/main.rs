mod cli;
mod commands;

use crate::cli::Cli;
use crate::commands::Outcome;
use anyhow::Context;
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use tally::domain::config::LoggingConfig;
use tally::kernel::config::load_config;
use tally::lending::policy::check_policy;
use tally_logger::{LevelFilter, Logger};

/// Exit status of a well-formed application that broke a business rule.
/// Usage errors and every other failure exit with 1.
const REJECTED: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            // Help and version go to stdout and are not failures.
            return Ok(if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS });
        },
    };

    let cfg = load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = init_logger(&cfg.logging, cli.verbose)?;
    check_policy(&cfg.lending).context("Lending policy is unusable")?;

    let mut stdout = std::io::stdout().lock();
    match commands::run(cli.command, &cfg.lending, &mut stdout)? {
        Outcome::Done => Ok(ExitCode::SUCCESS),
        Outcome::Rejected(rejection) => {
            tracing::info!(%rejection, "Application rejected");
            writeln!(std::io::stderr().lock(), "rejected: {rejection}")?;
            Ok(ExitCode::from(REJECTED))
        },
    }
}

fn init_logger(cfg: &LoggingConfig, verbose: u8) -> anyhow::Result<Logger> {
    let level = match verbose {
        0 => cfg
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", cfg.level))?,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(level)
        .ansi(std::io::stderr().is_terminal());
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter.as_str());
    }

    let logger = match &cfg.directory {
        Some(directory) => {
            builder.directory(directory).max_files(cfg.max_files).json(cfg.json).init()
        },
        None => builder.init(),
    }?;
    Ok(logger)
}
