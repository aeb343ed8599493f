use enumtools::enumeration;

#[enumeration]
struct Palette;

fn main() {}
