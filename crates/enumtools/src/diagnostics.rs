//! Per-member flag reports for debugging.
//!
//! Nothing else in the crate calls into this module; enable the `diagnostics` feature
//! and install a `tracing` subscriber at `debug` level to see the events.

use crate::enumeration::Enumeration;
use crate::flags::{FlagEnum, Flags};
use std::any::type_name;
use tracing::{debug, debug_span};

/// Whether a single member is set in a flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagState<E> {
    pub member: E,
    pub set: bool,
}

/// Evaluates [`Flags::is_flag_set`] for every member of `E` in declaration order.
///
/// Each state is also emitted as a `debug` event with `member` and `set` fields,
/// inside a `flag_report` span carrying the type name.
pub fn flag_report<E: FlagEnum>(flags: impl Into<Flags<E>>) -> Vec<FlagState<E>> {
    let flags = flags.into();
    let _span = debug_span!("flag_report", type_name = type_name::<E>(), flags = %flags).entered();

    E::MEMBERS
        .iter()
        .map(|&member| {
            let set = flags.is_flag_set(member);
            debug!(member = member.name(), set, "flag state");
            FlagState { member, set }
        })
        .collect()
}
