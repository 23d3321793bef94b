//! # Submission Seam
//!
//! Wire shapes of the backend loan endpoints and the [`LoanGateway`] trait the
//! host implements to reach them. Moving money is the backend's job; this module
//! only guarantees that nothing but an [`ApprovedApplication`] is ever forwarded
//! and that malformed repayments never leave the client.

use crate::error::{LendingError, LendingErrorExt};
use crate::validator::{ApprovedApplication, LoanApplication, validate_application};
use tally_derive::api_model;
use tally_domain::config::LendingPolicy;
use tally_domain::loans::LoanStatus;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Path of the loan listing endpoint, relative to the API base. Single loans live below it.
pub const LOANS_PATH: &str = "/loans";
/// Path of the application endpoint, relative to the API base.
pub const APPLY_PATH: &str = "/loans/apply";
/// Path of the repayment endpoint, relative to the API base.
pub const REPAY_PATH: &str = "/loans/repay";

/// Body of `POST /loans/apply`.
#[api_model]
#[derive(PartialEq)]
pub struct LoanApplyRequest {
    pub account_id: String,
    pub loan_amount: f64,
    pub term_months: u32,
}

/// Body of `POST /loans/repay`.
#[api_model]
#[derive(PartialEq)]
pub struct RepayRequest {
    pub loan_id: String,
    pub amount: f64,
    pub account_id: String,
}

/// An existing loan as listed by `GET /loans`.
///
/// The backend owns this record; extra fields are tolerated.
#[api_model(deny_unknown_fields = false)]
#[derive(PartialEq)]
pub struct LoanRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub loan_amount: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub interest_rate: f64,
    pub outstanding_balance: f64,
    pub status: LoanStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl LoanRecord {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.status == LoanStatus::Paid || self.outstanding_balance <= 0.0
    }
}

/// Sum still owed across `loans`, ignoring settled ones.
#[must_use]
pub fn total_outstanding(loans: &[LoanRecord]) -> f64 {
    loans.iter().filter(|loan| !loan.is_settled()).map(|loan| loan.outstanding_balance).sum()
}

impl ApprovedApplication {
    /// The `POST /loans/apply` body for this application.
    #[must_use]
    pub fn request(&self) -> LoanApplyRequest {
        LoanApplyRequest {
            account_id: self.account_id().to_owned(),
            loan_amount: self.quote().principal(),
            term_months: self.quote().term_months(),
        }
    }
}

/// Host-side access to the loan backend.
pub trait LoanGateway {
    /// Whatever the backend answers on success (e.g. the created loan).
    type Receipt;

    /// Forwards an application (`POST /loans/apply`).
    ///
    /// # Errors
    /// Any transport or backend failure.
    fn apply(&self, request: &LoanApplyRequest) -> Result<Self::Receipt, BoxError>;

    /// Lists the caller's loans (`GET /loans`).
    ///
    /// # Errors
    /// Any transport or backend failure.
    fn loans(&self) -> Result<Vec<LoanRecord>, BoxError>;

    /// Fetches one loan (`GET /loans/{id}`).
    ///
    /// # Errors
    /// Any transport or backend failure, including an unknown id.
    fn loan(&self, id: &str) -> Result<LoanRecord, BoxError>;

    /// Forwards a repayment (`POST /loans/repay`) and returns the updated loan.
    ///
    /// # Errors
    /// Any transport or backend failure.
    fn repay(&self, request: &RepayRequest) -> Result<LoanRecord, BoxError>;
}

/// Forwards an approved application through `gateway`.
///
/// # Errors
/// Returns [`LendingError::Gateway`] when the gateway fails.
pub fn submit<G: LoanGateway>(
    approved: &ApprovedApplication,
    gateway: &G,
) -> Result<G::Receipt, LendingError> {
    let request = approved.request();
    tracing::info!(
        account_id = %request.account_id,
        loan_amount = request.loan_amount,
        term_months = request.term_months,
        "Submitting loan application"
    );

    gateway.apply(&request).context(APPLY_PATH)
}

/// Validates `application` and, only if it passes, submits it.
///
/// # Errors
/// * [`LendingError::Rejected`] with the first broken rule; the gateway is not called.
/// * [`LendingError::Gateway`] when forwarding fails.
pub fn validate_and_submit<G: LoanGateway>(
    application: &LoanApplication,
    policy: &LendingPolicy,
    gateway: &G,
) -> Result<G::Receipt, LendingError> {
    let approved = validate_application(application, policy)?;
    submit(&approved, gateway)
}

/// Lists existing loans through `gateway`.
///
/// # Errors
/// Returns [`LendingError::Gateway`] when the gateway fails.
pub fn list_loans<G: LoanGateway>(gateway: &G) -> Result<Vec<LoanRecord>, LendingError> {
    let loans = gateway.loans().context(LOANS_PATH)?;
    tracing::debug!(count = loans.len(), "Loans listed");
    Ok(loans)
}

/// Fetches a single loan through `gateway`.
///
/// # Errors
/// * [`LendingError::InvalidRequest`] for a blank id; the gateway is not called.
/// * [`LendingError::Gateway`] when the gateway fails.
pub fn fetch_loan<G: LoanGateway>(id: &str, gateway: &G) -> Result<LoanRecord, LendingError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(invalid_request("loan id required"));
    }
    gateway.loan(id).context(format!("{LOANS_PATH}/{id}"))
}

/// Checks a repayment and forwards it through `gateway`.
///
/// # Errors
/// * [`LendingError::InvalidRequest`] for a blank loan or account id, or an amount
///   that is not a positive, finite number; the gateway is not called.
/// * [`LendingError::Gateway`] when the gateway fails.
pub fn repay<G: LoanGateway>(
    request: &RepayRequest,
    gateway: &G,
) -> Result<LoanRecord, LendingError> {
    if request.loan_id.trim().is_empty() {
        return Err(invalid_request("loan id required"));
    }
    if request.account_id.trim().is_empty() {
        return Err(invalid_request("select an account"));
    }
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(invalid_request("invalid repayment amount"));
    }

    tracing::info!(
        loan_id = %request.loan_id,
        amount = request.amount,
        "Submitting loan repayment"
    );
    gateway.repay(request).context(REPAY_PATH)
}

fn invalid_request(message: &'static str) -> LendingError {
    LendingError::InvalidRequest { message: message.into(), context: None }
}
