//! # Descriptions
//!
//! Human-readable labels for members and the reverse lookup from a label back to a
//! member. A label is the member's `#[description("...")]` annotation or, when it has
//! none, its name.

use crate::enumeration::Enumeration;
use std::any::type_name;
use tracing::trace;

/// The description of `value`, or its name when it has no annotation. Never fails.
#[must_use]
pub fn description<E: Enumeration>(value: E) -> &'static str {
    value.description().unwrap_or_else(|| value.name())
}

/// The first member, in declaration order, whose description equals `text` ignoring case.
///
/// Only whole labels match; an empty `text` matches nothing.
#[must_use]
pub fn try_from_description<E: Enumeration>(text: &str) -> Option<E> {
    if text.is_empty() {
        return None;
    }
    E::MEMBERS.iter().copied().find(|member| eq_ignore_case(description(*member), text))
}

/// Parses `text` as a description of `E`, returning `default` when nothing matches.
///
/// ```rust
/// use enumtools::prelude::*;
///
/// #[enumeration]
/// enum Priority {
///     #[description("Low priority")]
///     Low,
///     High,
/// }
///
/// assert_eq!(enumtools::to_enum("low PRIORITY", Priority::High), Priority::Low);
/// assert_eq!(enumtools::to_enum("high", Priority::Low), Priority::High);
/// assert_eq!(enumtools::to_enum("", Priority::High), Priority::High);
/// ```
#[must_use]
pub fn to_enum<E: Enumeration>(text: &str, default: E) -> E {
    try_from_description(text).unwrap_or_else(|| {
        trace!(text, type_name = type_name::<E>(), "No description matched, using default");
        default
    })
}

/// Parses strings into members by description, see [`to_enum`].
pub trait ToEnumExt {
    /// The member described by `self`, or `default` when nothing matches.
    #[must_use]
    fn to_enum<E: Enumeration>(&self, default: E) -> E;
}

impl<S: AsRef<str> + ?Sized> ToEnumExt for S {
    fn to_enum<E: Enumeration>(&self, default: E) -> E {
        to_enum(self.as_ref(), default)
    }
}

fn eq_ignore_case(label: &str, text: &str) -> bool {
    label.eq_ignore_ascii_case(text)
        || ((!label.is_ascii() || !text.is_ascii()) && label.to_lowercase() == text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[crate::enumeration]
    enum Season {
        #[description("Été")]
        Summer,
        Winter,
    }

    #[test]
    fn test_unicode_labels_ignore_case() {
        assert_eq!(try_from_description::<Season>("ÉTÉ"), Some(Season::Summer));
        assert_eq!(try_from_description::<Season>("winter"), Some(Season::Winter));
    }

    #[test]
    fn test_no_partial_matches() {
        assert_eq!(try_from_description::<Season>("Win"), None);
        assert_eq!(try_from_description::<Season>("Winter "), None);
        assert_eq!(try_from_description::<Season>(""), None);
    }

    #[test]
    fn test_name_is_not_matched_once_described() {
        assert_eq!(try_from_description::<Season>("Summer"), None);
        assert_eq!(description(Season::Summer), "Été");
        assert_eq!(description(Season::Winter), "Winter");
    }

    #[test]
    fn test_extension_accepts_owned_strings() {
        let text = String::from("WINTER");
        assert_eq!(text.to_enum(Season::Summer), Season::Winter);
    }
}
