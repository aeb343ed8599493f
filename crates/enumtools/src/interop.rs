//! The flag helpers for types generated by `bitflags::bitflags!`.
//!
//! Declared flags are read from [`bitflags::Flags::FLAGS`] in declaration order, and
//! the same rules apply as for [`Flags`](crate::Flags): an empty flag is never set, and
//! compound flags are set only when all of their bits are.
//!
//! ```rust
//! use bitflags::bitflags;
//!
//! bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub struct FeatureSet: u32 {
//!         const QUIZ = 1 << 0;
//!         const SURVEY = 1 << 1;
//!     }
//! }
//!
//! let features = FeatureSet::QUIZ | FeatureSet::SURVEY;
//! assert_eq!(enumtools::interop::flag_names(features), ["QUIZ", "SURVEY"]);
//! assert_eq!(enumtools::interop::to_formatted_string(features), "QUIZ\nSURVEY");
//! ```

use bitflags::Flags as BitFlags;

/// Whether `candidate` is non-empty and all of its bits are set in `flags`.
#[must_use]
pub fn is_flag_set<F: BitFlags + Copy>(flags: F, candidate: F) -> bool {
    !candidate.is_empty() && flags.contains(candidate)
}

/// The names of the declared flags set in `flags`, in declaration order.
#[must_use]
pub fn flag_names<F: BitFlags + Copy>(flags: F) -> Vec<&'static str> {
    F::FLAGS
        .iter()
        .filter(|flag| !flag.name().is_empty() && is_flag_set(flags, *flag.value()))
        .map(bitflags::Flag::name)
        .collect()
}

/// The name of the first declared flag set in `flags`.
///
/// Falls back to a declared empty flag (such as `NONE = 0`), then to an empty string.
#[must_use]
pub fn first_set_flag_name<F: BitFlags + Copy>(flags: F) -> &'static str {
    flag_names(flags).first().copied().unwrap_or_else(|| {
        F::FLAGS
            .iter()
            .find(|flag| !flag.name().is_empty() && flag.value().is_empty())
            .map_or("", bitflags::Flag::name)
    })
}

/// The declared flags set in `flags`, one name per line, without a trailing newline.
#[must_use]
pub fn to_formatted_string<F: BitFlags + Copy>(flags: F) -> String {
    flag_names(flags).join("\n")
}
