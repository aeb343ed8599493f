//! # Enum Errors
//!
//! This module defines the [`EnumError`] enum and [`Result`] type returned by the
//! lookups that can fail. Lookups that have a natural fallback, such as
//! [`to_enum`](crate::to_enum), resolve locally and never produce an error.

use std::borrow::Cow;

pub type Result<T, E = EnumError> = std::result::Result<T, E>;

/// Failures raised by positional, integer, name and cross-type lookups.
#[enumtools_derive::enum_error]
#[derive(Clone, PartialEq, Eq)]
pub enum EnumError {
    /// A positional index fell outside `[0, count)`.
    #[error("Index {index} is out of range for {type_name} with {count} members{}", format_context(.context))]
    IndexOutOfRange {
        index: usize,
        count: usize,
        type_name: &'static str,
        context: Option<Cow<'static, str>>,
    },

    /// No declared member has the given underlying integer.
    #[error("Invalid enum value {value} for {type_name}{}", format_context(.context))]
    InvalidValue { value: String, type_name: &'static str, context: Option<Cow<'static, str>> },

    /// No declared member has the given name.
    #[error("Unknown member '{name}' for {type_name}{}", format_context(.context))]
    UnknownName { name: String, type_name: &'static str, context: Option<Cow<'static, str>> },

    /// Two values of different enumerated types were compared.
    #[error(
        "The checked flag is not from the same type as the checked variable: expected {expected}, found {found}{}",
        format_context(.context)
    )]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
        context: Option<Cow<'static, str>>,
    },
}

impl EnumError {
    /// Returns `true` for errors caused by an argument that matches no declared member.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::InvalidValue { .. } | Self::UnknownName { .. }
        )
    }

    /// Returns `true` if two values of different enumerated types were compared.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
