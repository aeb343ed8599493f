use enumtools::{Enumeration, enumeration};

#[enumeration]
#[repr(i16)]
enum Level {
    #[description("Trace output")]
    Low = -1,
    Mid = 5,
    High,
}

#[enumeration]
enum Unit {
    Only,
}

fn main() {
    assert_eq!(Level::MEMBERS, [Level::Low, Level::Mid, Level::High]);
    assert_eq!(Level::Low.description(), Some("Trace output"));
    assert_eq!(Level::Mid.description(), None);
    assert_eq!(Level::High.name(), "High");
    assert_eq!(Level::High.to_repr(), 6_i16);

    let repr: isize = Unit::Only.to_repr();
    assert_eq!(repr, 0);
}
