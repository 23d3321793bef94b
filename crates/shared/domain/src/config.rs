use crate::constants::{
    ANNUAL_RATE_PERCENT, DEBT_TO_INCOME_WARNING, INSTANT_APPROVAL_LIMIT, MAX_DEBT_TO_INCOME,
    MAX_TERM_MONTHS, MIN_MONTHLY_INCOME, MIN_PRINCIPAL, MIN_TERM_MONTHS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration shared by Tally binaries.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub lending: LendingPolicy,
    pub logging: LoggingConfig,
}

/// Business rules of the loan product.
///
/// The defaults are the product constants from [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LendingPolicy {
    pub annual_rate_percent: f64,
    pub min_principal: f64,
    pub min_monthly_income: f64,
    pub min_term_months: u32,
    pub max_term_months: u32,
    pub max_debt_to_income: f64,
    pub debt_to_income_warning: f64,
    pub instant_approval_limit: f64,
}

/// Logging knobs, mapped onto the logger builder by binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra directives, e.g. `tally_lending=debug`.
    pub filter: Option<String>,
    /// Rolling file sink directory; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            annual_rate_percent: ANNUAL_RATE_PERCENT,
            min_principal: MIN_PRINCIPAL,
            min_monthly_income: MIN_MONTHLY_INCOME,
            min_term_months: MIN_TERM_MONTHS,
            max_term_months: MAX_TERM_MONTHS,
            max_debt_to_income: MAX_DEBT_TO_INCOME,
            debt_to_income_warning: DEBT_TO_INCOME_WARNING,
            instant_approval_limit: INSTANT_APPROVAL_LIMIT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, directory: None, json: false, max_files: 7 }
    }
}
