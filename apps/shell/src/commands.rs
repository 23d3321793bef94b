use crate::cli::{ApplyArgs, Command, QuoteArgs, ScheduleArgs};
use anyhow::{Context, Result, bail};
use std::error::Error;
use std::io::Write;
use tally::domain::config::LendingPolicy;
use tally::domain::loans::TermMonths;
use tally::lending::gateway::APPLY_PATH;
use tally::lending::{
    AmortizationSchedule, ApplicationValidator, DtiBand, LoanApplication, LoanApplyRequest,
    LoanGateway, LoanRecord, QuoteSummary, Rejection, RepayRequest, compute_loan_quote, submit,
};

type BoxError = Box<dyn Error + Send + Sync>;

/// How a command ended when it did not fail outright.
#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    Done,
    /// The application broke a business rule.
    Rejected(Rejection),
}

/// Runs `command` against `policy`, writing its report to `out`.
pub(crate) fn run(
    command: Command,
    policy: &LendingPolicy,
    out: &mut impl Write,
) -> Result<Outcome> {
    match command {
        Command::Quote(args) => quote(&args, policy, out),
        Command::Schedule(args) => schedule(&args, policy, out),
        Command::Apply(args) => apply(args, policy, out),
    }
}

fn quote(args: &QuoteArgs, policy: &LendingPolicy, out: &mut impl Write) -> Result<Outcome> {
    let rate = args.rate.unwrap_or(policy.annual_rate_percent);
    let summary = compute_loan_quote(args.amount, args.term, rate, args.income).summary(policy);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        write_summary(&summary, args.term, policy, out)?;
    }
    Ok(Outcome::Done)
}

fn schedule(args: &ScheduleArgs, policy: &LendingPolicy, out: &mut impl Write) -> Result<Outcome> {
    let (min, max) = (policy.min_term_months, policy.max_term_months);
    if !(min..=max).contains(&args.term) {
        bail!("{}", Rejection::TermOutOfRange { min, max });
    }

    let rate = args.rate.unwrap_or(policy.annual_rate_percent);
    let schedule = AmortizationSchedule::build(args.amount, args.term, rate);
    if schedule.is_empty() {
        bail!("Nothing to amortize: amount and term must be positive");
    }

    writeln!(
        out,
        "{:>4} {:>12} {:>12} {:>12} {:>12}",
        "#", "Payment", "Interest", "Principal", "Balance"
    )?;
    for row in schedule.installments() {
        writeln!(
            out,
            "{:>4} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            row.number, row.payment, row.interest, row.principal, row.balance
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total paid:      {:.2}", schedule.total_paid())?;
    writeln!(out, "Total interest:  {:.2}", schedule.total_interest())?;

    Ok(Outcome::Done)
}

fn apply(args: ApplyArgs, policy: &LendingPolicy, out: &mut impl Write) -> Result<Outcome> {
    let mut validator =
        ApplicationValidator::new(policy.clone()).context("Lending policy is unusable")?;

    let application = LoanApplication {
        account_id: args.account,
        principal: args.amount,
        term_months: args.term,
        monthly_income: args.income,
        purpose: args.purpose.unwrap_or_default(),
    };

    let approved = match validator.validate(&application) {
        Ok(approved) => approved,
        Err(rejection) => return Ok(Outcome::Rejected(rejection)),
    };
    let request = submit(&approved, &DryRun)?;

    if args.json {
        serde_json::to_writer(&mut *out, &request)?;
        writeln!(out)?;
        return Ok(Outcome::Done);
    }

    writeln!(out, "Application approved (dry run, nothing was sent)")?;
    writeln!(out, "Account:           {}", approved.account_id())?;
    writeln!(out, "Purpose:           {}", approved.purpose())?;
    let quote = approved.quote();
    write_summary(&quote.summary(policy), quote.term_months(), policy, out)?;
    writeln!(out)?;
    writeln!(out, "POST {APPLY_PATH}")?;
    serde_json::to_writer_pretty(&mut *out, &request)?;
    writeln!(out)?;

    Ok(Outcome::Done)
}

fn write_summary(
    summary: &QuoteSummary,
    term_months: u32,
    policy: &LendingPolicy,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Term:              {}", term_label(term_months))?;
    writeln!(out, "Monthly payment:   ${:.2}", summary.monthly_payment)?;
    writeln!(out, "Total payment:     ${:.2}", summary.total_payment)?;
    writeln!(out, "Total interest:    ${:.2}", summary.total_interest)?;
    writeln!(out, "Interest rate:     {}% APR", summary.annual_rate_percent)?;
    writeln!(
        out,
        "Debt-to-income:    {:.1}% ({})",
        summary.debt_to_income_ratio,
        band_label(summary.band)
    )?;

    if summary.band.is_blocking() {
        writeln!(
            out,
            "Note: applications above {}% debt-to-income are declined",
            policy.max_debt_to_income
        )?;
    }
    if summary.requires_verification {
        writeln!(
            out,
            "Note: amounts above ${} may require additional verification",
            policy.instant_approval_limit
        )?;
    }
    if summary.income_below_floor {
        writeln!(out, "Note: minimum monthly income is ${}", policy.min_monthly_income)?;
    }
    Ok(())
}

/// Offered terms use their form label, anything else a plain month count.
fn term_label(months: u32) -> String {
    TermMonths::try_from(months)
        .map_or_else(|_| format!("{months} months"), |term| term.to_string())
}

const fn band_label(band: DtiBand) -> &'static str {
    match band {
        DtiBand::Healthy => "healthy",
        DtiBand::Elevated => "elevated",
        DtiBand::Excessive => "too high",
    }
}

/// Gateway that hands the request back instead of sending it. It has no loan book.
#[derive(Debug)]
struct DryRun;

impl LoanGateway for DryRun {
    type Receipt = LoanApplyRequest;

    fn apply(&self, request: &LoanApplyRequest) -> Result<Self::Receipt, BoxError> {
        tracing::debug!(path = APPLY_PATH, "Dry run, request not sent");
        Ok(request.clone())
    }

    fn loans(&self) -> Result<Vec<LoanRecord>, BoxError> {
        Ok(Vec::new())
    }

    fn loan(&self, id: &str) -> Result<LoanRecord, BoxError> {
        Err(format!("dry run has no loan {id}").into())
    }

    fn repay(&self, _request: &RepayRequest) -> Result<LoanRecord, BoxError> {
        Err("dry run cannot repay loans".into())
    }
}
