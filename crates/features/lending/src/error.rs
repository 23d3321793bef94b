use crate::validator::Rejection;
use std::borrow::Cow;

/// Error types specific to the lending feature.
#[tally_derive::tally_error]
pub enum LendingError {
    /// The application broke a business rule and must not be submitted.
    #[error("Loan application rejected{}: {source}", format_context(.context))]
    Rejected { source: Rejection, context: Option<Cow<'static, str>> },

    /// The lending policy itself is unusable (e.g. min term above max term).
    #[error("Invalid lending policy{}: {message}", format_context(.context))]
    InvalidPolicy { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A request to the backend is malformed and was not sent.
    #[error("Invalid loan request{}: {message}", format_context(.context))]
    InvalidRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The host gateway failed to forward an approved application.
    #[error("Loan gateway failure{}: {source}", format_context(.context))]
    Gateway {
        source: Box<dyn std::error::Error + Send + Sync>,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal lending error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
