//! # Flags
//!
//! Bitmask support for enumerated types whose members are single bits (plus an optional
//! zero `None` sentinel). A [`Flags`] value is any combination of those bits and is not
//! required to be a declared member.
//!
//! Two membership tests exist and they differ only on zero:
//!
//! * [`is_flag_set`]: the candidate is non-zero and all of its bits are present.
//! * [`has_flag`]: all of the value's bits are present, so zero is always contained.
//!
//! Everything that lists members ([`flag_names`], [`flag_values`], [`Flags::iter`],
//! [`to_formatted_string`]) reports exactly the members for which [`is_flag_set`] holds,
//! in declaration order.

use crate::enumeration::{Enumeration, invalid_value};
use crate::error::Result;
use crate::repr::{Repr, bits_contain, bits_set};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Marker for enumerated types whose members combine as bits.
///
/// Implemented by `#[enumeration(flags)]`, together with the `|` and `&` operators.
pub trait FlagEnum: Enumeration {}

/// A bitwise combination of members of `E`.
pub struct Flags<E: FlagEnum> {
    bits: E::Repr,
    _marker: PhantomData<E>,
}

impl<E: FlagEnum> Flags<E> {
    /// A value with no bits set.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_bits_retain(<E::Repr as Repr>::ZERO)
    }

    /// The union of every declared member.
    #[must_use]
    pub fn all() -> Self {
        Self::from_bits_retain(declared_bits::<E>())
    }

    /// Wraps `bits` as-is, including bits no member declares.
    #[must_use]
    pub const fn from_bits_retain(bits: E::Repr) -> Self {
        Self { bits, _marker: PhantomData }
    }

    /// Wraps `bits` if every set bit belongs to a declared member.
    ///
    /// # Errors
    /// * [`EnumError::InvalidValue`](crate::EnumError::InvalidValue) if `bits` carries
    ///   undeclared bits.
    pub fn from_bits(bits: E::Repr) -> Result<Self> {
        if bits_contain(declared_bits::<E>(), bits) {
            Ok(Self::from_bits_retain(bits))
        } else {
            Err(invalid_value::<E>(format!("{bits:#x}")))
        }
    }

    /// The underlying integer.
    #[must_use]
    pub fn bits(self) -> E::Repr {
        self.bits
    }

    /// Whether no bit is set.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == <E::Repr as Repr>::ZERO
    }

    /// Whether `candidate` is non-zero and all of its bits are set in `self`.
    #[must_use]
    pub fn is_flag_set(self, candidate: E) -> bool {
        bits_set(self.bits, candidate.to_repr())
    }

    /// Whether all bits of `other` are set in `self`. Zero is always contained.
    #[must_use]
    pub fn has_flag(self, other: impl Into<Self>) -> bool {
        bits_contain(self.bits, other.into().bits)
    }

    /// Alias of [`Flags::has_flag`].
    #[must_use]
    pub fn contains(self, other: impl Into<Self>) -> bool {
        self.has_flag(other)
    }

    /// Sets every bit of `other`.
    pub fn insert(&mut self, other: impl Into<Self>) {
        self.bits = self.bits | other.into().bits;
    }

    /// Clears every bit of `other`.
    pub fn remove(&mut self, other: impl Into<Self>) {
        self.bits = self.bits & !other.into().bits;
    }

    /// Flips every bit of `other`.
    pub fn toggle(&mut self, other: impl Into<Self>) {
        self.bits = self.bits ^ other.into().bits;
    }

    /// The set members, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = E> {
        E::MEMBERS.iter().copied().filter(move |member| self.is_flag_set(*member))
    }

    /// The set members, in declaration order.
    #[must_use]
    pub fn flag_values(self) -> Vec<E> {
        self.iter().collect()
    }

    /// The names of the set members, in declaration order.
    #[must_use]
    pub fn flag_names(self) -> Vec<&'static str> {
        self.iter().map(Enumeration::name).collect()
    }

    /// The first set member in declaration order.
    ///
    /// Falls back to the zero member when nothing is set, and to `None` when `E`
    /// declares no zero member.
    #[must_use]
    pub fn first_set_flag(self) -> Option<E> {
        self.iter().next().or_else(zero_member::<E>)
    }

    /// The name of [`Flags::first_set_flag`], or an empty string.
    #[must_use]
    pub fn first_set_flag_name(self) -> &'static str {
        self.first_set_flag().map_or("", Enumeration::name)
    }

    /// The names of the set members, one per line, without a trailing newline.
    #[must_use]
    pub fn to_formatted_string(self) -> String {
        self.flag_names().join("\n")
    }
}

/// The bits covered by at least one declared member.
fn declared_bits<E: FlagEnum>() -> E::Repr {
    E::MEMBERS.iter().fold(<E::Repr as Repr>::ZERO, |acc, member| acc | member.to_repr())
}

fn zero_member<E: FlagEnum>() -> Option<E> {
    E::MEMBERS.iter().copied().find(|member| member.to_repr() == <E::Repr as Repr>::ZERO)
}

/// Whether `candidate` is non-zero and all of its bits are set in `flags`.
#[must_use]
pub fn is_flag_set<E: FlagEnum>(flags: impl Into<Flags<E>>, candidate: E) -> bool {
    flags.into().is_flag_set(candidate)
}

/// Whether all bits of `value` are set in `variable`.
///
/// Both sides share the type `E`, so mixing enumerated types is a compile error here;
/// use [`EnumValue::has_flag`](crate::EnumValue::has_flag) to compare values whose
/// types are only known at runtime.
#[must_use]
pub fn has_flag<E: FlagEnum>(variable: impl Into<Flags<E>>, value: impl Into<Flags<E>>) -> bool {
    variable.into().has_flag(value)
}

/// The names of the members set in `flags`, in declaration order.
#[must_use]
pub fn flag_names<E: FlagEnum>(flags: impl Into<Flags<E>>) -> Vec<&'static str> {
    flags.into().flag_names()
}

/// The members set in `flags`, in declaration order.
#[must_use]
pub fn flag_values<E: FlagEnum>(flags: impl Into<Flags<E>>) -> Vec<E> {
    flags.into().flag_values()
}

/// The first member set in `flags`, or the zero member, see [`Flags::first_set_flag`].
#[must_use]
pub fn first_set_flag<E: FlagEnum>(flags: impl Into<Flags<E>>) -> Option<E> {
    flags.into().first_set_flag()
}

/// The name of the first member set in `flags`, see [`Flags::first_set_flag_name`].
#[must_use]
pub fn first_set_flag_name<E: FlagEnum>(flags: impl Into<Flags<E>>) -> &'static str {
    flags.into().first_set_flag_name()
}

/// The members set in `flags`, one name per line, see [`Flags::to_formatted_string`].
#[must_use]
pub fn to_formatted_string<E: FlagEnum>(flags: impl Into<Flags<E>>) -> String {
    flags.into().to_formatted_string()
}

// --- Std traits ---

impl<E: FlagEnum> Clone for Flags<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: FlagEnum> Copy for Flags<E> {}

impl<E: FlagEnum> PartialEq for Flags<E> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E: FlagEnum> Eq for Flags<E> {}

impl<E: FlagEnum> PartialEq<E> for Flags<E> {
    fn eq(&self, other: &E) -> bool {
        self.bits == other.to_repr()
    }
}

impl<E: FlagEnum> Hash for Flags<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E: FlagEnum> Default for Flags<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: FlagEnum> From<E> for Flags<E> {
    fn from(member: E) -> Self {
        Self::from_bits_retain(member.to_repr())
    }
}

impl<E: FlagEnum> FromIterator<E> for Flags<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut flags = Self::empty();
        flags.extend(iter);
        flags
    }
}

impl<E: FlagEnum> Extend<E> for Flags<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for member in iter {
            self.insert(member);
        }
    }
}

/// `Red | Blue`, undeclared bits as hex. An empty value shows the zero member's name,
/// or `0x0` when the type declares none.
impl<E: FlagEnum> fmt::Display for Flags<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.iter().map(|m| m.name().to_owned()).collect();

        let remainder = self.bits & !declared_bits::<E>();
        if remainder != <E::Repr as Repr>::ZERO {
            parts.push(format!("{remainder:#x}"));
        }

        if parts.is_empty() {
            match zero_member::<E>() {
                Some(zero) => f.write_str(zero.name()),
                None => write!(f, "{:#x}", self.bits),
            }
        } else {
            f.write_str(&parts.join(" | "))
        }
    }
}

impl<E: FlagEnum> fmt::Debug for Flags<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flags").field(&format_args!("{self}")).finish()
    }
}

// --- Operators ---

impl<E: FlagEnum> BitOr for Flags<E> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits_retain(self.bits | rhs.bits)
    }
}

impl<E: FlagEnum> BitOr<E> for Flags<E> {
    type Output = Self;

    fn bitor(self, rhs: E) -> Self {
        self | Self::from(rhs)
    }
}

impl<E: FlagEnum> BitAnd for Flags<E> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits_retain(self.bits & rhs.bits)
    }
}

impl<E: FlagEnum> BitAnd<E> for Flags<E> {
    type Output = Self;

    fn bitand(self, rhs: E) -> Self {
        self & Self::from(rhs)
    }
}

impl<E: FlagEnum> BitXor for Flags<E> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_bits_retain(self.bits ^ rhs.bits)
    }
}

/// Complement within the declared bits.
impl<E: FlagEnum> Not for Flags<E> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits_retain(!self.bits & declared_bits::<E>())
    }
}

impl<E: FlagEnum> BitOrAssign for Flags<E> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl<E: FlagEnum> BitOrAssign<E> for Flags<E> {
    fn bitor_assign(&mut self, rhs: E) {
        self.insert(rhs);
    }
}

impl<E: FlagEnum> BitAndAssign for Flags<E> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<E: FlagEnum> BitXorAssign for Flags<E> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.toggle(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[crate::enumeration(flags)]
    #[repr(u8)]
    enum Access {
        None = 0,
        Read = 1,
        Write = 2,
        Execute = 4,
        ReadWrite = 3,
    }

    #[test]
    fn test_zero_member_is_never_set() {
        let flags = Access::Read | Access::Write;
        assert!(!flags.is_flag_set(Access::None));
        assert!(flags.has_flag(Access::None));
        assert_eq!(flags.flag_values(), [Access::Read, Access::Write, Access::ReadWrite]);
    }

    #[test]
    fn test_first_set_flag_falls_back_to_zero_member() {
        assert_eq!(Flags::<Access>::empty().first_set_flag(), Some(Access::None));
        assert_eq!(Flags::<Access>::empty().first_set_flag_name(), "None");
        assert_eq!(Flags::from(Access::Execute).first_set_flag(), Some(Access::Execute));
    }

    #[test]
    fn test_compound_member_requires_all_bits() {
        let read_only = Flags::from(Access::Read);
        assert!(!read_only.is_flag_set(Access::ReadWrite));
        assert!((read_only | Access::Write).is_flag_set(Access::ReadWrite));
    }

    #[test]
    fn test_from_bits_rejects_undeclared_bits() {
        assert_eq!(Flags::<Access>::from_bits(0b111).map(Flags::bits), Ok(0b111));
        assert!(Flags::<Access>::from_bits(0b1000).is_err());
    }

    #[test]
    fn test_set_operations() {
        let mut flags = Flags::<Access>::empty();
        flags |= Access::Read;
        flags.insert(Access::Execute);
        assert_eq!(flags.bits(), 0b101);

        flags.remove(Access::Read);
        assert_eq!(flags, Access::Execute);

        flags.toggle(Access::Write);
        assert_eq!(flags.bits(), 0b110);
        assert_eq!((!flags).bits(), 0b001);
    }

    #[test]
    fn test_display_and_debug() {
        let flags = Access::Read | Access::Execute;
        assert_eq!(flags.to_string(), "Read | Execute");
        assert_eq!(format!("{flags:?}"), "Flags(Read | Execute)");
        assert_eq!(Flags::<Access>::from_bits_retain(0b1001).to_string(), "Read | 0x8");
        assert_eq!(Flags::<Access>::empty().to_string(), "None");
    }

    #[test]
    fn test_collect_from_members() {
        let flags: Flags<Access> = [Access::Write, Access::Execute].into_iter().collect();
        assert_eq!(flags.to_formatted_string(), "Write\nExecute");
    }
}
