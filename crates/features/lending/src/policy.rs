//! Sanity checks for a configured [`LendingPolicy`].

use crate::amortization::MAX_SCHEDULE_MONTHS;
use crate::error::LendingError;
use tally_domain::config::LendingPolicy;

/// Rejects policies the validator could never apply sensibly.
///
/// # Errors
/// Returns [`LendingError::InvalidPolicy`] naming the first inconsistent field.
pub fn check_policy(policy: &LendingPolicy) -> Result<(), LendingError> {
    let invalid = |message: &'static str| {
        Err(LendingError::InvalidPolicy { message: message.into(), context: None })
    };

    if !policy.annual_rate_percent.is_finite() || policy.annual_rate_percent < 0.0 {
        return invalid("annual_rate_percent must be a finite, non-negative number");
    }
    if !policy.min_principal.is_finite() || policy.min_principal <= 0.0 {
        return invalid("min_principal must be positive");
    }
    if policy.min_term_months == 0 || policy.min_term_months > policy.max_term_months {
        return invalid("term bounds must satisfy 0 < min_term_months <= max_term_months");
    }
    if policy.max_term_months > MAX_SCHEDULE_MONTHS {
        return invalid("max_term_months cannot exceed 1200");
    }
    if !policy.max_debt_to_income.is_finite() || policy.max_debt_to_income <= 0.0 {
        return invalid("max_debt_to_income must be positive");
    }
    if !policy.debt_to_income_warning.is_finite() || policy.debt_to_income_warning < 0.0 {
        return invalid("debt_to_income_warning must be a finite, non-negative number");
    }
    if policy.debt_to_income_warning > policy.max_debt_to_income {
        return invalid("debt_to_income_warning cannot exceed max_debt_to_income");
    }

    Ok(())
}
