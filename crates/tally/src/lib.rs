//! Facade crate for Tally features and shared modules.
//! Re-exports domain/kernel primitives and the enabled feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `tally` and pick slices with feature flags (`lending` is on by default).
//! - Load a [`domain::config::TallyConfig`] with [`kernel::config::load_config`].

pub use tally_domain as domain;
pub use tally_kernel as kernel;
#[cfg(feature = "lending")]
pub use tally_lending as lending;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "lending")]
        "lending",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_features_are_disabled() {
        assert!(!features::is_enabled("payments"));
    }

    #[cfg(feature = "lending")]
    #[test]
    fn lending_is_registered() {
        assert!(features::is_enabled("lending"));
        let quote = lending::compute_loan_quote(1_200.0, 12, 0.0, 1_000.0);
        assert_eq!(quote.monthly_payment(), 100.0);
    }
}
