//! # Lending
//!
//! The loan-application slice: everything needed to quote, gate and forward a
//! personal loan, with no I/O of its own.
//!
//! ## Architecture
//!
//! 1.  **Calculation ([`amortization`], [`quote`]):** total functions for the
//!     live calculator. Missing or nonsensical input yields zeros, never an error.
//! 2.  **Affordability ([`affordability`]):** the debt-to-income ratio, its
//!     display band and the hard 40% ceiling.
//! 3.  **Validation ([`validator`]):** the fail-fast submit gate producing an
//!     [`ApprovedApplication`].
//! 4.  **Submission ([`gateway`]):** wire DTOs and the [`LoanGateway`] seam the
//!     host implements to apply, list loans and repay.
//!
//! ## Example
//!
//! ```rust
//! use tally_lending::compute_loan_quote;
//!
//! let quote = compute_loan_quote(100.0, 6, 5.5, 1_000.0);
//! assert!((quote.monthly_payment() - 16.94).abs() < 0.01);
//! ```

pub mod affordability;
pub mod amortization;
mod error;
pub mod gateway;
pub mod policy;
pub mod quote;
pub mod validator;

pub use crate::affordability::{DtiBand, check_affordability, debt_to_income_ratio};
pub use crate::amortization::{AmortizationSchedule, Installment, monthly_payment, monthly_rate};
pub use crate::error::{LendingError, LendingErrorExt};
pub use crate::gateway::{
    LoanApplyRequest, LoanGateway, LoanRecord, RepayRequest, fetch_loan, list_loans, repay,
    submit, total_outstanding, validate_and_submit,
};
pub use crate::quote::{LoanQuote, QuoteSummary};
pub use crate::validator::{
    ApplicationValidator, ApprovedApplication, LoanApplication, Rejection, ValidationState,
    validate_application,
};
pub use tally_domain::config::LendingPolicy;

/// Quotes a loan from the four form inputs.
///
/// Total: degenerate input gives a quote whose derived fields are all `0.0`.
#[must_use]
pub fn compute_loan_quote(
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
    monthly_income: f64,
) -> LoanQuote {
    LoanQuote::compute(principal, term_months, annual_rate_percent, monthly_income)
}
