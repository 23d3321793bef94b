//! # Loan Quote
//!
//! [`LoanQuote`] is the live calculator value: four inputs in, four derived
//! scalars out. It is recomputed from scratch whenever an input changes and has
//! no way to mutate a derived field on its own.

use crate::affordability::{DtiBand, debt_to_income_ratio};
use crate::amortization::monthly_payment;
use serde::Serialize;
use tally_domain::config::LendingPolicy;

/// Derived figures for one snapshot of the loan form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuote {
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
    monthly_income: f64,
    monthly_payment: f64,
    total_payment: f64,
    total_interest: f64,
    debt_to_income_ratio: f64,
}

impl LoanQuote {
    /// Computes every derived field from the inputs.
    ///
    /// Never fails. When no payment can be computed (missing principal or term)
    /// all derived fields are `0.0`.
    #[must_use]
    pub fn compute(
        principal: f64,
        term_months: u32,
        annual_rate_percent: f64,
        monthly_income: f64,
    ) -> Self {
        let payment = monthly_payment(principal, term_months, annual_rate_percent);

        let (total_payment, total_interest, ratio) = if payment > 0.0 {
            let total = payment * f64::from(term_months);
            (total, total - principal, debt_to_income_ratio(payment, monthly_income))
        } else {
            (0.0, 0.0, 0.0)
        };

        tracing::trace!(principal, term_months, payment, ratio, "Loan quote computed");

        Self {
            principal,
            term_months,
            annual_rate_percent,
            monthly_income,
            monthly_payment: payment,
            total_payment,
            total_interest,
            debt_to_income_ratio: ratio,
        }
    }

    /// Computes a quote at the policy's annual rate.
    #[must_use]
    pub fn for_policy(
        principal: f64,
        term_months: u32,
        monthly_income: f64,
        policy: &LendingPolicy,
    ) -> Self {
        Self::compute(principal, term_months, policy.annual_rate_percent, monthly_income)
    }

    #[must_use]
    pub const fn principal(&self) -> f64 {
        self.principal
    }

    #[must_use]
    pub const fn term_months(&self) -> u32 {
        self.term_months
    }

    #[must_use]
    pub const fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    #[must_use]
    pub const fn monthly_income(&self) -> f64 {
        self.monthly_income
    }

    #[must_use]
    pub const fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }

    #[must_use]
    pub const fn total_payment(&self) -> f64 {
        self.total_payment
    }

    #[must_use]
    pub const fn total_interest(&self) -> f64 {
        self.total_interest
    }

    #[must_use]
    pub const fn debt_to_income_ratio(&self) -> f64 {
        self.debt_to_income_ratio
    }

    /// Presentation view: money to cents, ratio to one decimal, plus advisories.
    #[must_use]
    pub fn summary(&self, policy: &LendingPolicy) -> QuoteSummary {
        QuoteSummary {
            monthly_payment: round_to(self.monthly_payment, 2),
            total_payment: round_to(self.total_payment, 2),
            total_interest: round_to(self.total_interest, 2),
            debt_to_income_ratio: round_to(self.debt_to_income_ratio, 1),
            annual_rate_percent: self.annual_rate_percent,
            band: DtiBand::classify(self.debt_to_income_ratio, policy),
            requires_verification: self.principal > policy.instant_approval_limit,
            income_below_floor: self.monthly_income > 0.0
                && self.monthly_income < policy.min_monthly_income,
        }
    }
}

/// Rounded figures ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub debt_to_income_ratio: f64,
    pub annual_rate_percent: f64,
    pub band: DtiBand,
    /// Above the instant approval limit; approval may need manual checks.
    pub requires_verification: bool,
    /// Income is positive but under the advertised minimum.
    pub income_below_floor: bool,
}

/// Rounds half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
