//! # Loan Application Validation
//!
//! Submit-time gate of the loan form. Unlike the live calculator, which quietly
//! degrades to zero, the validator is strict: it runs the rules below in order and
//! stops at the first one that fails.
//!
//! 1. principal is a positive, finite number
//! 2. principal reaches the policy minimum
//! 3. term lies within the policy bounds
//! 4. monthly income is a positive, finite number
//! 5. a disbursement account is selected
//! 6. a purpose is given (whitespace does not count)
//! 7. the debt-to-income ratio of the computed payment is within the ceiling
//!
//! Only a fully passing application becomes an [`ApprovedApplication`], the sole
//! input accepted by [`crate::gateway::submit`].

use crate::affordability::check_affordability;
use crate::error::LendingError;
use crate::policy::check_policy;
use crate::quote::LoanQuote;
use serde::Serialize;
use tally_domain::config::LendingPolicy;
use thiserror::Error;
use tracing::{debug, info};

/// Snapshot of the loan form at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanApplication {
    pub account_id: Option<String>,
    pub principal: f64,
    pub term_months: u32,
    pub monthly_income: f64,
    pub purpose: String,
}

/// The first business rule an application broke. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("invalid amount")]
    InvalidAmount,

    #[error("minimum loan amount is {minimum}")]
    BelowMinimum { minimum: f64 },

    #[error("term must be between {min} and {max} months")]
    TermOutOfRange { min: u32, max: u32 },

    #[error("invalid income")]
    InvalidIncome,

    #[error("select an account")]
    MissingAccount,

    #[error("purpose required")]
    MissingPurpose,

    #[error("debt-to-income ratio exceeds {ceiling}%")]
    DebtToIncomeExceeded { ratio: f64, ceiling: f64 },
}

/// An application that passed every rule, together with its quote.
///
/// Only the validator can build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedApplication {
    account_id: String,
    purpose: String,
    quote: LoanQuote,
}

impl ApprovedApplication {
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    #[must_use]
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    #[must_use]
    pub const fn quote(&self) -> &LoanQuote {
        &self.quote
    }
}

/// Runs the rules in order against `policy`.
///
/// # Errors
/// Returns the first [`Rejection`] encountered.
pub fn validate_application(
    application: &LoanApplication,
    policy: &LendingPolicy,
) -> Result<ApprovedApplication, Rejection> {
    let LoanApplication { account_id, principal, term_months, monthly_income, purpose } =
        application;
    let (principal, term_months, monthly_income) = (*principal, *term_months, *monthly_income);

    if !principal.is_finite() || principal <= 0.0 {
        return Err(Rejection::InvalidAmount);
    }
    if principal < policy.min_principal {
        return Err(Rejection::BelowMinimum { minimum: policy.min_principal });
    }
    if !(policy.min_term_months..=policy.max_term_months).contains(&term_months) {
        return Err(Rejection::TermOutOfRange {
            min: policy.min_term_months,
            max: policy.max_term_months,
        });
    }
    if !monthly_income.is_finite() || monthly_income <= 0.0 {
        return Err(Rejection::InvalidIncome);
    }
    let Some(account_id) = account_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    else {
        return Err(Rejection::MissingAccount);
    };
    let purpose = purpose.trim();
    if purpose.is_empty() {
        return Err(Rejection::MissingPurpose);
    }

    let quote = LoanQuote::for_policy(principal, term_months, monthly_income, policy);
    check_affordability(quote.debt_to_income_ratio(), policy)?;

    Ok(ApprovedApplication {
        account_id: account_id.to_owned(),
        purpose: purpose.to_owned(),
        quote,
    })
}

/// Where the validator stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ValidationState {
    /// Nothing checked yet, or reset after a form change.
    #[default]
    Idle,
    /// Rules are being evaluated.
    Validating,
    Valid(ApprovedApplication),
    Invalid(Rejection),
}

impl ValidationState {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The user-facing message of an invalid state.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Invalid(rejection) => Some(rejection.to_string()),
            _ => None,
        }
    }
}

/// Stateful wrapper around [`validate_application`] for form hosts.
///
/// `idle -> validating -> valid | invalid`, back to `idle` on [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct ApplicationValidator {
    policy: LendingPolicy,
    state: ValidationState,
}

impl ApplicationValidator {
    /// Creates a validator for a custom policy.
    ///
    /// # Errors
    /// Returns [`LendingError::InvalidPolicy`] when the policy is inconsistent.
    pub fn new(policy: LendingPolicy) -> Result<Self, LendingError> {
        check_policy(&policy)?;
        Ok(Self { policy, state: ValidationState::Idle })
    }

    #[must_use]
    pub const fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn state(&self) -> &ValidationState {
        &self.state
    }

    /// Validates `application` and records the outcome.
    ///
    /// # Errors
    /// Returns the first [`Rejection`]; the state becomes [`ValidationState::Invalid`].
    pub fn validate(
        &mut self,
        application: &LoanApplication,
    ) -> Result<ApprovedApplication, Rejection> {
        self.state = ValidationState::Validating;

        match validate_application(application, &self.policy) {
            Ok(approved) => {
                info!(
                    principal = approved.quote.principal(),
                    term_months = approved.quote.term_months(),
                    "Loan application passed validation"
                );
                self.state = ValidationState::Valid(approved.clone());
                Ok(approved)
            },
            Err(rejection) => {
                debug!(%rejection, "Loan application rejected");
                self.state = ValidationState::Invalid(rejection.clone());
                Err(rejection)
            },
        }
    }

    /// Forgets the last outcome, e.g. after the form was edited or cleared.
    pub fn reset(&mut self) {
        self.state = ValidationState::Idle;
    }
}
