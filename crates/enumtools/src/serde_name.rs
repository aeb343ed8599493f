//! Name-based serialization.
//!
//! Members serialize as their name. Use this module through serde's `with` attribute:
//!
//! ```rust
//! use enumtools::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[enumeration]
//! enum Theme { Light, Dark }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Settings {
//!     #[serde(with = "enumtools::serde_name")]
//!     theme: Theme,
//! }
//!
//! let json = serde_json::to_string(&Settings { theme: Theme::Dark }).unwrap();
//! assert_eq!(json, r#"{"theme":"Dark"}"#);
//! ```
//!
//! [`Flags`] serializes as the sequence of set member names and deserializes by
//! combining the named members. Bits no member declares have no name, so a value
//! built with [`Flags::from_bits_retain`] that carries them fails to serialize.

use crate::enumeration::{Enumeration, from_name};
use crate::flags::{FlagEnum, Flags};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::{self, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Serializes `value` as its member name.
///
/// # Errors
/// Propagates the serializer's error.
pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: Enumeration,
    S: Serializer,
{
    serializer.serialize_str(value.name())
}

/// Deserializes a member from its exact name.
///
/// # Errors
/// Fails with a custom error when the name matches no member.
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: Enumeration,
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    from_name(&name).map_err(de::Error::custom)
}

impl<E: FlagEnum> Serialize for Flags<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Self::from_bits(self.bits()).map_err(ser::Error::custom)?;

        let names = self.flag_names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de, E: FlagEnum> Deserialize<'de> for Flags<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(FlagsVisitor(PhantomData))
    }
}

struct FlagsVisitor<E>(PhantomData<E>);

impl<'de, E: FlagEnum> Visitor<'de> for FlagsVisitor<E> {
    type Value = Flags<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of member names")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut flags = Flags::empty();
        while let Some(name) = seq.next_element::<String>()? {
            flags.insert(from_name::<E>(&name).map_err(de::Error::custom)?);
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use crate::Flags;

    #[crate::enumeration(flags)]
    #[repr(u16)]
    enum Permission {
        None = 0,
        View = 1,
        Edit = 2,
        Share = 4,
    }

    #[test]
    fn test_flags_serialize_as_names() {
        let flags = Permission::View | Permission::Share;
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"["View","Share"]"#);
    }

    #[test]
    fn test_flags_deserialize_from_names() {
        let flags: Flags<Permission> = serde_json::from_str(r#"["Edit","View"]"#).unwrap();
        assert_eq!(flags, Permission::View | Permission::Edit);

        let empty: Flags<Permission> = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_undeclared_bits_fail_to_serialize() {
        let flags = Flags::<Permission>::from_bits_retain(0b1001);
        let err = serde_json::to_string(&flags).unwrap_err();
        assert!(err.to_string().contains("Invalid enum value 0x9"));
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = serde_json::from_str::<Flags<Permission>>(r#"["Delete"]"#).unwrap_err();
        assert!(err.to_string().contains("Unknown member 'Delete'"));
    }
}
