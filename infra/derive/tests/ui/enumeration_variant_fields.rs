use enumtools::enumeration;

#[enumeration]
enum Shape {
    Circle(u8),
    Square,
}

fn main() {}
