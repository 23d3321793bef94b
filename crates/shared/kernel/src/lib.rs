//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it owns cross-cutting plumbing, not business rules.
//!
//! ## Config loading
//! ```rust,no_run
//! use tally_kernel::config::ConfigLoader;
//! use tally_kernel::domain::config::TallyConfig;
//!
//! let cfg: TallyConfig = ConfigLoader::new().file("tally.toml").load().unwrap();
//! ```

pub mod config;

pub use tally_domain as domain;
