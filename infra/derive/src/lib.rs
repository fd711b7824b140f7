#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the plugin workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! adauth-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// Turns a plain enum into a `thiserror` error wired into the workspace conventions.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, Source>` for every variant wrapping a source error.
/// * `From<Source>` for variants with a `source` field (or a field marked `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A module-private `format_context` helper usable inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** with **named** fields only.
/// 2. Every variant carries `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[adauth_derive::adauth_error]
/// pub enum SettingsError {
///     #[error("Settings file error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal settings error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, SettingsError> {
///     std::fs::read_to_string(path).context("Reading plugin settings")
/// }
/// ```
#[proc_macro_attribute]
pub fn adauth_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
