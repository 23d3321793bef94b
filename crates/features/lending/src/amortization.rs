//! # Amortization
//!
//! Fixed-payment amortization at a compound monthly rate.
//!
//! The payment for principal `P`, monthly rate `r` and `n` installments is
//!
//! ```text
//! P * r * (1 + r)^n / ((1 + r)^n - 1)      when r > 0
//! P / n                                    when r == 0
//! ```
//!
//! Everything here is total: absent or nonsensical inputs yield `0` (or an empty
//! schedule) so a form can call it on every keystroke.

use serde::Serialize;
use tally_domain::constants::MONTHS_PER_YEAR;

/// Converts an annual percentage into the monthly rate used for compounding.
///
/// `5.5` becomes `0.055 / 12`.
#[must_use]
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / f64::from(MONTHS_PER_YEAR)
}

/// Longest schedule [`AmortizationSchedule::build`] will lay out, one hundred years.
pub const MAX_SCHEDULE_MONTHS: u32 = 1_200;

/// Fixed monthly payment that fully repays `principal` over `term_months`.
///
/// Returns `0.0` when `principal <= 0`, `term_months == 0`, the rate is negative,
/// or any input is not finite.
#[must_use]
pub fn monthly_payment(principal: f64, term_months: u32, annual_rate_percent: f64) -> f64 {
    if !principal.is_finite() || principal <= 0.0 || term_months == 0 {
        return 0.0;
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return 0.0;
    }

    let months = f64::from(term_months);
    let rate = monthly_rate(annual_rate_percent);
    if rate == 0.0 {
        return principal / months;
    }

    // P * r / (1 - (1 + r)^-n), with (1 + r)^-n taken as exp(-n * ln(1 + r)) so that
    // tiny rates keep their digits and long terms settle at P * r instead of inf / inf.
    let repaid_share = -(-months * rate.ln_1p()).exp_m1();
    let payment = principal * rate / repaid_share;
    if payment.is_finite() && payment > 0.0 { payment } else { principal / months }
}

/// One installment of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based installment number.
    pub number: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Balance left after this installment.
    pub balance: f64,
}

/// Month-by-month breakdown of a fixed-payment loan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationSchedule {
    monthly_payment: f64,
    installments: Vec<Installment>,
}

impl AmortizationSchedule {
    /// Builds the schedule. Degenerate inputs (see [`monthly_payment`]) and terms
    /// beyond [`MAX_SCHEDULE_MONTHS`] give an empty schedule.
    ///
    /// The final installment settles whatever balance is left, so the closing
    /// balance is exactly zero and float drift lands in the last payment.
    #[must_use]
    pub fn build(principal: f64, term_months: u32, annual_rate_percent: f64) -> Self {
        let payment = monthly_payment(principal, term_months, annual_rate_percent);
        if payment == 0.0 || term_months > MAX_SCHEDULE_MONTHS {
            return Self { monthly_payment: 0.0, installments: Vec::new() };
        }

        let rate = monthly_rate(annual_rate_percent);
        let mut balance = principal;
        let mut installments = Vec::with_capacity(term_months as usize);

        for number in 1..=term_months {
            let interest = balance * rate;
            let (amount, repaid) = if number == term_months {
                (balance + interest, balance)
            } else {
                (payment, payment - interest)
            };
            balance = if number == term_months { 0.0 } else { balance - repaid };

            installments.push(Installment {
                number,
                payment: amount,
                interest,
                principal: repaid,
                balance,
            });
        }

        Self { monthly_payment: payment, installments }
    }

    #[must_use]
    pub const fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }

    #[must_use]
    pub fn installments(&self) -> &[Installment] {
        &self.installments
    }

    #[must_use]
    pub fn total_interest(&self) -> f64 {
        self.installments.iter().map(|i| i.interest).sum()
    }

    #[must_use]
    pub fn total_paid(&self) -> f64 {
        self.installments.iter().map(|i| i.payment).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }
}
