//! Helper routines for enumerated types.
//!
//! The crate covers three concerns:
//!
//! * **Descriptions**: every member has a human-readable label, either an explicit
//!   `#[description("...")]` annotation or its own name, and labels can be parsed back
//!   into members case-insensitively.
//! * **Ordered iteration**: members are visited in declaration order, stepped through
//!   cyclically, addressed by position and validated from raw integers.
//! * **Flags**: enums declared with `#[enumeration(flags)]` combine into [`Flags`]
//!   values that can be tested, enumerated and formatted member by member.
//!
//! Per-type metadata is generated at compile time by the [`enumeration`] attribute,
//! so nothing here relies on runtime reflection and every operation is a pure
//! function of `'static` tables and its inputs.
//!
//! ## Zero members
//!
//! A member whose underlying integer is zero (usually called `None`) is never
//! reported as *set*: `flags & 0 == 0` holds for every value, so counting it would
//! make the sentinel present everywhere. It is still returned by
//! [`first_set_flag`] when no other member is set.
//!
//! ## Features
//!
//! * `diagnostics`: per-member flag reports emitted as `tracing` events.
//! * `serde`: members and flag values serialized by name.
//! * `bitflags`: the flag helpers for types generated by `bitflags::bitflags!`.
//!
//! ## Examples
//!
//! ```rust
//! use enumtools::prelude::*;
//!
//! #[enumeration(flags)]
//! #[repr(u8)]
//! pub enum Color {
//!     Red = 1,
//!     #[description("desc of green")]
//!     Green = 2,
//!     Blue = 4,
//! }
//!
//! # fn main() -> Result<(), EnumError> {
//! let flags = Color::Red | Color::Blue;
//! assert_eq!(flags.flag_names(), ["Red", "Blue"]);
//! assert_eq!(flags.first_set_flag(), Some(Color::Red));
//! assert_eq!(flags.to_formatted_string(), "Red\nBlue");
//!
//! assert_eq!("DESC OF GREEN".to_enum(Color::Red), Color::Green);
//! assert_eq!(Color::Blue.next(), Color::Red);
//! assert_eq!(enumtools::by_index::<Color>(1)?, Color::Green);
//! # Ok(())
//! # }
//! ```

extern crate self as enumtools;

mod description;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
mod dynamic;
mod enumeration;
mod error;
mod flags;
#[cfg(feature = "bitflags")]
pub mod interop;
mod repr;
#[cfg(feature = "serde")]
pub mod serde_name;

pub use description::{ToEnumExt, description, to_enum, try_from_description};
pub use dynamic::EnumValue;
pub use enumeration::{
    EnumExt, Enumeration, all_values, by_index, enum_count, from_int, from_name, from_repr,
    is_sentinel, names, next, position, values_where,
};
pub use enumtools_derive::{enum_error, enumeration};
pub use error::{EnumError, EnumErrorExt, Result};
pub use flags::{
    FlagEnum, Flags, first_set_flag, first_set_flag_name, flag_names, flag_values, has_flag,
    is_flag_set, to_formatted_string,
};
pub use repr::Repr;

pub mod prelude {
    pub use crate::description::ToEnumExt;
    pub use crate::dynamic::EnumValue;
    pub use crate::enumeration::{EnumExt, Enumeration};
    pub use crate::error::{EnumError, EnumErrorExt};
    pub use crate::flags::{FlagEnum, Flags};
    pub use enumtools_derive::enumeration;
}
