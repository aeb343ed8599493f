pub mod fixtures;

use enumtools::prelude::*;
use fixtures::{Color, Permission};

#[test]
fn color_scenario() {
    let flags = Color::Red | Color::Blue;

    assert_eq!(flags.bits(), 5);
    assert_eq!(enumtools::flag_names(flags), ["Red", "Blue"]);
    assert_eq!(enumtools::flag_values(flags), [Color::Red, Color::Blue]);
    assert_eq!(enumtools::first_set_flag(flags), Some(Color::Red));
    assert_eq!(enumtools::first_set_flag_name(flags), "Red");
    assert_eq!(enumtools::to_formatted_string(flags), "Red\nBlue");
}

#[test]
fn flag_order_follows_declaration_not_insertion() {
    let mut flags = Flags::from(Color::Blue);
    flags.insert(Color::Red);
    assert_eq!(flags.flag_names(), ["Red", "Blue"]);
}

#[test]
fn is_flag_set_excludes_zero() {
    let flags = Permission::Read | Permission::Delete;

    assert!(enumtools::is_flag_set::<Permission>(flags, Permission::Read));
    assert!(!enumtools::is_flag_set::<Permission>(flags, Permission::Write));
    assert!(!enumtools::is_flag_set::<Permission>(flags, Permission::None));
    assert!(!enumtools::is_flag_set(Flags::<Permission>::empty(), Permission::None));
}

#[test]
fn has_flag_includes_zero() {
    let flags = Permission::Read | Permission::Write;

    assert!(enumtools::has_flag::<Permission>(flags, Permission::None));
    assert!(enumtools::has_flag::<Permission>(flags, Permission::Read | Permission::Write));
    assert!(!enumtools::has_flag::<Permission>(flags, Permission::Read | Permission::Admin));
    assert!(flags.has_flag(flags));
}

#[test]
fn zero_member_is_not_listed() {
    let flags = Permission::Write | Permission::Admin;

    assert_eq!(flags.flag_values(), [Permission::Write, Permission::Admin]);
    assert_eq!(flags.to_formatted_string(), "Write\nAdmin");
}

#[test]
fn first_set_flag_without_any_set_member() {
    assert_eq!(Flags::<Permission>::empty().first_set_flag(), Some(Permission::None));
    assert_eq!(Flags::<Permission>::empty().first_set_flag_name(), "None");
    assert_eq!(Flags::<Color>::empty().first_set_flag(), None);
    assert_eq!(Flags::<Color>::empty().first_set_flag_name(), "");
    assert_eq!(Flags::<Color>::empty().to_formatted_string(), "");
}

#[test]
fn undeclared_bits_are_kept_but_never_named() {
    let flags = Flags::<Color>::from_bits_retain(0b1001);

    assert_eq!(flags.flag_names(), ["Red"]);
    assert!(Flags::<Color>::from_bits(0b1001).is_err());
    assert_eq!(Flags::<Color>::all().bits(), 0b111);
    assert_eq!(flags.to_string(), "Red | 0x8");
}

#[test]
fn empty_value_without_zero_member_displays_as_hex() {
    let empty = Flags::<Color>::empty();

    assert_eq!(empty.to_string(), "0x0");
    assert_eq!(format!("{empty:?}"), "Flags(0x0)");
    assert_eq!(Flags::<Permission>::empty().to_string(), "None");
}

#[test]
fn single_member_converts_into_flags() {
    assert_eq!(enumtools::flag_names::<Color>(Color::Green), ["Green"]);
    assert_eq!(Color::Green & Color::Blue, Flags::<Color>::empty());
    assert_eq!((Color::Green | Color::Blue) & Color::Blue, Color::Blue);
}
