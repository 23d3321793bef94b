//! Business constants of the loan product.

/// Fixed annual interest rate offered on every loan, in percent.
pub const ANNUAL_RATE_PERCENT: f64 = 5.5;

/// Smallest principal accepted at submission.
pub const MIN_PRINCIPAL: f64 = 100.0;

/// Income floor advertised on the application form. Advisory only.
pub const MIN_MONTHLY_INCOME: f64 = 500.0;

pub const MIN_TERM_MONTHS: u32 = 6;
pub const MAX_TERM_MONTHS: u32 = 60;

/// Hard debt-to-income ceiling, in percent. Ratios strictly above are rejected.
pub const MAX_DEBT_TO_INCOME: f64 = 40.0;

/// Ratios above this (but within the ceiling) are shown as elevated.
pub const DEBT_TO_INCOME_WARNING: f64 = 30.0;

/// Loans above this amount may need manual verification after approval.
pub const INSTANT_APPROVAL_LIMIT: f64 = 10_000.0;

pub const MONTHS_PER_YEAR: u32 = 12;
