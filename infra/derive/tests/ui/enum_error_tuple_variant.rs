use enumtools_derive::enum_error;

#[enum_error]
pub enum LoadError {
    Missing(String),
}

fn main() {}
