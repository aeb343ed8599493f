use enumtools::enumeration;

#[enumeration]
enum Light {
    #[description(42)]
    Red,
}

fn main() {}
