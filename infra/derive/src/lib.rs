#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`tally_error`] turns an enum into a `thiserror` error with context support.
//! * [`api_model`] applies the workspace serde policy to wire DTOs.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro to define a standard wire data model.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug`, `Clone`, `Serialize` and `Deserialize` when missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Example
///
/// ```rust,ignore
/// use tally_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct LoanRecord {
///     pub loan_amount: f64,
///     pub term_months: u32,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Conversions**: `From<Source>` for each variant with a `source` field so `?` works.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
/// * **Formatting**: a module-local `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** with **named-field** variants only.
/// 2. A variant with a `source` field (or a field marked `#[source]`) must also have
///    `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tally_derive::tally_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().context("Bad shape")
/// }
/// ```
#[proc_macro_attribute]
pub fn tally_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
