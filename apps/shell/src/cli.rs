use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Personal loan calculator: quotes, schedules and application checks.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about, long_about = None)]
pub(crate) struct Cli {
    /// TOML configuration file; `tally.toml` in the working directory is used when present.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Quote the monthly payment, totals and debt-to-income ratio.
    Quote(QuoteArgs),
    /// Print the month-by-month amortization schedule.
    Schedule(ScheduleArgs),
    /// Validate an application and print the request that would be submitted.
    Apply(ApplyArgs),
}

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Loan amount (principal).
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Term in months.
    #[arg(long)]
    pub term: u32,

    /// Net monthly income.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub income: f64,

    /// Annual interest rate in percent; defaults to the configured product rate.
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub(crate) struct ScheduleArgs {
    /// Loan amount (principal).
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Term in months.
    #[arg(long)]
    pub term: u32,

    /// Annual interest rate in percent; defaults to the configured product rate.
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,
}

#[derive(Debug, Args)]
pub(crate) struct ApplyArgs {
    /// Disbursement account id.
    #[arg(long)]
    pub account: Option<String>,

    /// Loan amount (principal).
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Term in months.
    #[arg(long)]
    pub term: u32,

    /// Net monthly income.
    #[arg(long, allow_negative_numbers = true)]
    pub income: f64,

    /// What the loan is for.
    #[arg(long)]
    pub purpose: Option<String>,

    /// Print only the request body as JSON.
    #[arg(long)]
    pub json: bool,
}
