use enumtools_derive::enum_error;

#[enum_error]
pub enum LoadError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
