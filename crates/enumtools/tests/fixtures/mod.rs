#![allow(dead_code)]

use enumtools::prelude::*;

#[enumeration(flags)]
#[repr(u8)]
pub enum Color {
    Red = 1,
    #[description("desc of green")]
    Green = 2,
    Blue = 4,
}

#[enumeration(flags)]
#[repr(u32)]
pub enum Permission {
    None = 0,
    #[description("Can read")]
    Read = 1 << 0,
    #[description("Can write")]
    Write = 1 << 1,
    Delete = 1 << 2,
    Admin = 1 << 3,
}

#[enumeration(flags)]
#[repr(i32)]
pub enum Shape {
    Circle = 1,
    Square = 2,
}

#[enumeration]
pub enum TrafficLight {
    Invalid,
    #[description("Stop")]
    Red,
    #[description("Get ready")]
    Amber,
    #[description("Go")]
    Green,
    Amount,
}
