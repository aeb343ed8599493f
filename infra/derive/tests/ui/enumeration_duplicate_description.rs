use enumtools::enumeration;

#[enumeration]
enum Light {
    #[description("Stop")]
    #[description("Halt")]
    Red,
}

fn main() {}
