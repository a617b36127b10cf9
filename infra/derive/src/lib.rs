#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the claimmap crates.
//!
//! Right now the crate carries a single attribute macro, [`claimmap_error`], which every
//! crate in the workspace uses to declare its error enum.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into a workspace error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and, for every
///   variant with a source field, to `Result<T, SourceError>`.
/// * `From<SourceError>` for variants holding a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A `context` field must have the type
/// `Option<Cow<'static, str>>`, and every variant with a source must have one.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[claimmap_derive::claimmap_error]
/// pub enum LookupError {
///     #[error("Bad path{}: {message}", format_context(.context))]
///     BadPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal lookup error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn lookup() -> Result<(), LookupError> {
///     Err(LookupError::from("walker gave up")).context("resolving Email")
/// }
/// ```
#[proc_macro_attribute]
pub fn claimmap_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
