//! # Dynamic Values
//!
//! [`EnumValue`] erases the enumerated type of a member or flag value, keeping its type
//! identity next to the raw bits. Comparing two erased values of different types is a
//! runtime [`EnumError::TypeMismatch`] instead of a compile error.

use crate::enumeration::{Enumeration, invalid_value};
use crate::error::{EnumError, Result};
use crate::flags::{FlagEnum, Flags};
use crate::repr::Repr;
use std::any::{TypeId, type_name};
use std::fmt;
use tracing::debug;

/// A member or flag value whose enumerated type is only known at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    type_id: TypeId,
    type_name: &'static str,
    bits: u128,
}

impl EnumValue {
    /// Erases a single member.
    #[must_use]
    pub fn new<E: Enumeration>(member: E) -> Self {
        Self::from_raw::<E>(member.to_repr())
    }

    /// Erases a flag value, which need not be a declared member.
    #[must_use]
    pub fn from_flags<E: FlagEnum>(flags: Flags<E>) -> Self {
        Self::from_raw::<E>(flags.bits())
    }

    fn from_raw<E: Enumeration>(repr: E::Repr) -> Self {
        Self { type_id: TypeId::of::<E>(), type_name: type_name::<E>(), bits: repr.to_bits() }
    }

    /// The name of the erased enumerated type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The raw bit pattern, sign-extended to 128 bits.
    #[must_use]
    pub const fn bits(&self) -> u128 {
        self.bits
    }

    /// Whether the erased type is `E`.
    #[must_use]
    pub fn is<E: Enumeration>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }

    /// Whether all bits of `value` are set in `self`.
    ///
    /// # Errors
    /// * [`EnumError::TypeMismatch`] if `value` belongs to a different enumerated type.
    pub fn has_flag(&self, value: &Self) -> Result<bool> {
        self.ensure_same_type(value)?;
        Ok(self.bits & value.bits == value.bits)
    }

    /// Whether `candidate` is non-zero and all of its bits are set in `self`.
    ///
    /// # Errors
    /// * [`EnumError::TypeMismatch`] if `candidate` belongs to a different enumerated type.
    pub fn is_flag_set(&self, candidate: &Self) -> Result<bool> {
        self.ensure_same_type(candidate)?;
        Ok(candidate.bits != 0 && self.bits & candidate.bits == candidate.bits)
    }

    /// Recovers the declared member of `E`.
    ///
    /// # Errors
    /// * [`EnumError::TypeMismatch`] if the erased type is not `E`.
    /// * [`EnumError::InvalidValue`] if the bits are not a declared member, e.g. a
    ///   combination of flags.
    pub fn downcast<E: Enumeration>(&self) -> Result<E> {
        if !self.is::<E>() {
            return Err(type_mismatch(type_name::<E>(), self.type_name));
        }
        E::MEMBERS
            .iter()
            .copied()
            .find(|member| member.to_repr().to_bits() == self.bits)
            .ok_or_else(|| invalid_value::<E>(format!("{:#x}", self.bits)))
    }

    fn ensure_same_type(&self, other: &Self) -> Result<()> {
        if self.type_id == other.type_id {
            Ok(())
        } else {
            Err(type_mismatch(self.type_name, other.type_name))
        }
    }
}

fn type_mismatch(expected: &'static str, found: &'static str) -> EnumError {
    debug!(expected, found, "Enum type mismatch");
    EnumError::TypeMismatch { expected, found, context: None }
}

impl<E: Enumeration> From<E> for EnumValue {
    fn from(member: E) -> Self {
        Self::new(member)
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumValue")
            .field("type_name", &self.type_name)
            .field("bits", &format_args!("{:#x}", self.bits))
            .finish()
    }
}
