use enumtools::enumeration;

#[enumeration(flags, flags)]
enum Shape {
    Circle = 1,
}

fn main() {}
