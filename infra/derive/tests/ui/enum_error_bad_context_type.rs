use enumtools_derive::enum_error;

#[enum_error]
pub enum LoadError {
    #[error("Parse error: {message}")]
    Parse { message: String, context: Option<String> },
}

fn main() {}
