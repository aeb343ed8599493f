use enumtools::{Flags, enumeration};

#[enumeration(flags)]
#[repr(u8)]
enum Mode {
    Read = 1,
    Write = 2,
    Append = 4,
}

fn main() {
    let flags: Flags<Mode> = Mode::Read | Mode::Append;
    assert!(flags.is_flag_set(Mode::Read));
    assert!(!flags.is_flag_set(Mode::Write));

    let widened = flags | Mode::Write;
    assert_eq!(widened.bits(), 7);
    assert_eq!((Mode::Read & Mode::Write).bits(), 0);
}
