//! # Enumeration
//!
//! The [`Enumeration`] capability trait and the introspection helpers built on it:
//! member lists, counts, positional access, integer and name validation and cyclic
//! stepping. All of them walk [`Enumeration::MEMBERS`] in declaration order.

use crate::error::{EnumError, Result};
use crate::repr::Repr;
use std::any::type_name;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Names reserved for bookend members by a common convention, see [`is_sentinel`].
const SENTINEL_NAMES: [&str; 2] = ["Invalid", "Amount"];

/// A closed, ordered set of named integer-backed members.
///
/// Implementations are generated by [`enumeration`](crate::enumeration); writing one by
/// hand is possible as long as `MEMBERS` lists every member exactly once in declaration
/// order and `to_repr` returns distinct integers.
pub trait Enumeration: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The underlying integer type.
    type Repr: Repr;

    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// The member's identifier as written in the declaration.
    fn name(self) -> &'static str;

    /// The `#[description("...")]` annotation, if the member has one.
    fn description(self) -> Option<&'static str>;

    /// The member's underlying integer.
    fn to_repr(self) -> Self::Repr;
}

/// Method-call access to the introspection helpers.
///
/// Automatically implemented for every [`Enumeration`].
pub trait EnumExt: Enumeration {
    /// The description annotation, falling back to the member name.
    #[must_use]
    fn description_or_name(self) -> &'static str {
        crate::description::description(self)
    }

    /// The member following `self` in declaration order, wrapping to the first.
    #[must_use]
    fn next(self) -> Self {
        next(self)
    }

    /// The member's zero-based position in declaration order.
    #[must_use]
    fn position(self) -> usize {
        position(self)
    }

    /// The number of members declared by `self`'s type.
    #[must_use]
    fn count(self) -> usize {
        Self::MEMBERS.len()
    }

    /// All member names of `self`'s type, in declaration order.
    #[must_use]
    fn names(self) -> Vec<&'static str> {
        names::<Self>()
    }

    /// The member of `self`'s type at `index`.
    ///
    /// # Errors
    /// * [`EnumError::IndexOutOfRange`] if `index` is not below the member count.
    fn by_index(self, index: usize) -> Result<Self> {
        by_index::<Self>(index)
    }
}

impl<T: Enumeration> EnumExt for T {}

/// All members of `E`, in declaration order.
#[must_use]
pub const fn all_values<E: Enumeration>() -> &'static [E] {
    E::MEMBERS
}

/// The number of members declared by `E`.
#[must_use]
pub const fn enum_count<E: Enumeration>() -> usize {
    E::MEMBERS.len()
}

/// All member names of `E`, in declaration order.
#[must_use]
pub fn names<E: Enumeration>() -> Vec<&'static str> {
    E::MEMBERS.iter().map(|member| member.name()).collect()
}

/// The members of `E` accepted by `predicate`, in declaration order.
///
/// ```rust
/// use enumtools::prelude::*;
///
/// #[enumeration]
/// enum Stage { Invalid, Draft, Review, Published, Amount }
///
/// let stages: Vec<Stage> = enumtools::values_where::<Stage, _>(|s| !enumtools::is_sentinel(s)).collect();
/// assert_eq!(stages, [Stage::Draft, Stage::Review, Stage::Published]);
/// ```
pub fn values_where<E, P>(mut predicate: P) -> impl Iterator<Item = E>
where
    E: Enumeration,
    P: FnMut(&E) -> bool,
{
    E::MEMBERS.iter().copied().filter(move |member| predicate(member))
}

/// Whether `member` is named `Invalid` or `Amount`.
///
/// Some enumerated types bracket their real members with these two bookends, an
/// `Invalid` first member and an `Amount` last member holding the count. This is a
/// naming convention only; pair it with [`values_where`] to skip them.
#[must_use]
pub fn is_sentinel<E: Enumeration>(member: &E) -> bool {
    SENTINEL_NAMES.contains(&member.name())
}

/// The zero-based declaration position of `value`.
#[must_use]
pub fn position<E: Enumeration>(value: E) -> usize {
    E::MEMBERS.iter().position(|member| *member == value).unwrap_or_default()
}

/// The member after `current` in declaration order, wrapping to the first.
#[must_use]
pub fn next<E: Enumeration>(current: E) -> E {
    let following = position(current) + 1;
    E::MEMBERS.get(following).copied().unwrap_or(E::MEMBERS[0])
}

/// The member at `index` in declaration order.
///
/// # Errors
/// * [`EnumError::IndexOutOfRange`] if `index` is not below [`enum_count`].
pub fn by_index<E: Enumeration>(index: usize) -> Result<E> {
    E::MEMBERS.get(index).copied().ok_or_else(|| {
        let count = E::MEMBERS.len();
        debug!(index, count, type_name = type_name::<E>(), "Positional enum lookup out of range");
        EnumError::IndexOutOfRange { index, count, type_name: type_name::<E>(), context: None }
    })
}

/// The member whose underlying integer equals `value`.
///
/// Undeclared integers are rejected rather than turned into a value.
///
/// # Errors
/// * [`EnumError::InvalidValue`] if no member has that underlying integer.
pub fn from_int<E: Enumeration>(value: impl Into<i128>) -> Result<E> {
    let value = value.into();
    E::MEMBERS
        .iter()
        .copied()
        .find(|member| member.to_repr().to_i128() == Some(value))
        .ok_or_else(|| invalid_value::<E>(value.to_string()))
}

/// The member whose underlying integer equals `value`, in `E`'s own integer type.
///
/// # Errors
/// * [`EnumError::InvalidValue`] if no member has that underlying integer.
pub fn from_repr<E: Enumeration>(value: E::Repr) -> Result<E> {
    E::MEMBERS
        .iter()
        .copied()
        .find(|member| member.to_repr() == value)
        .ok_or_else(|| invalid_value::<E>(value.to_string()))
}

/// The member named exactly `name` (case-sensitive).
///
/// # Errors
/// * [`EnumError::UnknownName`] if no member has that name.
pub fn from_name<E: Enumeration>(name: &str) -> Result<E> {
    E::MEMBERS.iter().copied().find(|member| member.name() == name).ok_or_else(|| {
        debug!(name, type_name = type_name::<E>(), "Unknown enum member name");
        EnumError::UnknownName { name: name.to_owned(), type_name: type_name::<E>(), context: None }
    })
}

pub(crate) fn invalid_value<E: Enumeration>(value: String) -> EnumError {
    debug!(%value, type_name = type_name::<E>(), "Integer matches no declared enum member");
    EnumError::InvalidValue { value, type_name: type_name::<E>(), context: None }
}
