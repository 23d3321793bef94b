//! Debt-to-income (DTI) ratio and the affordability gate.

use crate::validator::Rejection;
use serde::Serialize;
use tally_domain::config::LendingPolicy;

/// `payment / income * 100`, or `0.0` when the income is not a positive number.
#[must_use]
pub fn debt_to_income_ratio(monthly_payment: f64, monthly_income: f64) -> f64 {
    if !monthly_income.is_finite() || monthly_income <= 0.0 || !monthly_payment.is_finite() {
        return 0.0;
    }
    monthly_payment / monthly_income * 100.0
}

/// Rejects ratios strictly above the policy ceiling.
///
/// # Errors
/// Returns [`Rejection::DebtToIncomeExceeded`] when `ratio > policy.max_debt_to_income`.
pub fn check_affordability(ratio: f64, policy: &LendingPolicy) -> Result<(), Rejection> {
    if ratio > policy.max_debt_to_income {
        tracing::debug!(
            ratio,
            ceiling = policy.max_debt_to_income,
            "Debt-to-income ceiling exceeded"
        );
        return Err(Rejection::DebtToIncomeExceeded {
            ratio,
            ceiling: policy.max_debt_to_income,
        });
    }
    Ok(())
}

/// How a ratio is presented next to the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DtiBand {
    /// At or below the warning threshold.
    Healthy,
    /// Above the warning threshold, still within the ceiling.
    Elevated,
    /// Above the ceiling; the application will be rejected.
    Excessive,
}

impl DtiBand {
    #[must_use]
    pub fn classify(ratio: f64, policy: &LendingPolicy) -> Self {
        if ratio > policy.max_debt_to_income {
            Self::Excessive
        } else if ratio > policy.debt_to_income_warning {
            Self::Elevated
        } else {
            Self::Healthy
        }
    }

    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Excessive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_a_percentage() {
        assert_eq!(debt_to_income_ratio(500.0, 1000.0), 50.0);
        assert_eq!(debt_to_income_ratio(250.0, 2000.0), 12.5);
    }

    #[test]
    fn missing_income_suppresses_the_ratio() {
        assert_eq!(debt_to_income_ratio(500.0, 0.0), 0.0);
        assert_eq!(debt_to_income_ratio(500.0, -10.0), 0.0);
        assert_eq!(debt_to_income_ratio(500.0, f64::NAN), 0.0);
    }

    #[test]
    fn ceiling_is_inclusive() {
        let policy = LendingPolicy::default();
        assert!(check_affordability(40.0, &policy).is_ok());
        assert!(check_affordability(40.000_001, &policy).is_err());
    }

    #[test]
    fn fifty_percent_is_rejected() {
        let policy = LendingPolicy::default();
        let ratio = debt_to_income_ratio(500.0, 1000.0);
        let err = check_affordability(ratio, &policy).unwrap_err();
        assert_eq!(err.to_string(), "debt-to-income ratio exceeds 40%");
    }

    #[test]
    fn bands_follow_policy_thresholds() {
        let policy = LendingPolicy::default();
        assert_eq!(DtiBand::classify(0.0, &policy), DtiBand::Healthy);
        assert_eq!(DtiBand::classify(30.0, &policy), DtiBand::Healthy);
        assert_eq!(DtiBand::classify(30.5, &policy), DtiBand::Elevated);
        assert_eq!(DtiBand::classify(40.0, &policy), DtiBand::Elevated);
        assert_eq!(DtiBand::classify(41.0, &policy), DtiBand::Excessive);
        assert!(DtiBand::classify(41.0, &policy).is_blocking());
    }
}
