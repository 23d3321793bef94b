use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The loan terms offered on the application form.
///
/// Serialized as the plain month count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Display, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TermMonths {
    #[strum(to_string = "6 months")]
    M6,
    #[strum(to_string = "12 months")]
    #[default]
    M12,
    #[strum(to_string = "24 months (2 years)")]
    M24,
    #[strum(to_string = "36 months (3 years)")]
    M36,
    #[strum(to_string = "48 months (4 years)")]
    M48,
    #[strum(to_string = "60 months (5 years)")]
    M60,
}

impl TermMonths {
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::M6 => 6,
            Self::M12 => 12,
            Self::M24 => 24,
            Self::M36 => 36,
            Self::M48 => 48,
            Self::M60 => 60,
        }
    }

    /// All offered terms, shortest first.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl From<TermMonths> for u32 {
    fn from(term: TermMonths) -> Self {
        term.months()
    }
}

impl TryFrom<u32> for TermMonths {
    type Error = String;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|term| term.months() == months)
            .ok_or_else(|| format!("{months} months is not an offered loan term"))
    }
}

/// Lifecycle state of an existing loan as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Paid,
    #[serde(other)]
    Other,
}
