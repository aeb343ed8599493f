#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for `enumtools`.
//! This crate generates the per-type metadata that the helper routines in
//! `enumtools` operate on, so enumerated types never need runtime reflection.
//!
//! ## Usage
//! Consumers normally go through the re-exports in `enumtools`:
//! ```toml
//! [dependencies]
//! enumtools = { path = "../crates/enumtools" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but are exercised by the `trybuild` cases under `tests/ui`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemEnum, parse_macro_input};

/// Attribute macro turning a fieldless enum into an `enumtools::Enumeration`.
///
/// # Injected Behaviors
///
/// * **Derives**: Adds `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash` if missing.
/// * **Metadata**: Implements `enumtools::Enumeration` with the members in declaration order,
///   their names, descriptions and underlying integers.
/// * **Descriptions**: Consumes `#[description("...")]` on variants; `description()`
///   returns `None` for variants without one.
/// * **Flags**: With the `flags` argument, implements `enumtools::FlagEnum` and the `|` / `&`
///   operators, both producing `enumtools::Flags<Self>`.
///
/// The underlying integer type is taken from `#[repr(..)]`, or `isize` when absent.
///
/// # Errors
/// Emits a compile-time error for empty or generic enums, variants with fields,
/// unknown arguments and malformed or duplicate descriptions.
///
/// # Example
///
/// ```rust,ignore
/// use enumtools::prelude::*;
///
/// #[enumeration(flags)]
/// #[repr(u8)]
/// pub enum Color {
///     Red = 1,
///     #[description("desc of green")]
///     Green = 2,
///     Blue = 4,
/// }
///
/// assert_eq!(Color::Green.description_or_name(), "desc of green");
/// assert_eq!((Color::Red | Color::Blue).to_formatted_string(), "Red\nBlue");
/// ```
#[proc_macro_attribute]
pub fn enumeration(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemEnum);
    macros::enumeration::expand_enumeration(args.into(), input).into()
}

/// A high-level attribute macro for defining error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` carrying this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator.
/// * **Formatting**: Emits a `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source field must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use enumtools_derive::enum_error;
/// use std::borrow::Cow;
///
/// #[enum_error]
/// pub enum LookupError {
///     #[error("Index {index} is out of range{}", format_context(.context))]
///     OutOfRange { index: usize, context: Option<Cow<'static, str>> },
/// }
///
/// fn lookup() -> Result<u8, LookupError> {
///     Err(LookupError::OutOfRange { index: 3, context: None }).context("Resolving member")
/// }
/// ```
#[proc_macro_attribute]
pub fn enum_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
