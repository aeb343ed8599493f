use enumtools::enumeration;

#[enumeration(bits)]
enum Shape {
    Circle,
}

fn main() {}
