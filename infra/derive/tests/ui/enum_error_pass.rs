use enumtools_derive::enum_error;
use std::borrow::Cow;

#[enum_error]
pub enum LookupError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing key '{key}'{}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },
}

fn parse(text: &str) -> Result<i32, LookupError> {
    text.parse::<i32>().context("reading level")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (reading level): "));

    let missing: Result<(), LookupError> = Err(LookupError::Missing { key: "mode".into(), context: None });
    let err = missing.context("config").unwrap_err();
    assert_eq!(err.to_string(), "Missing key 'mode' (config)");

    let converted: LookupError = "1.5".parse::<i32>().unwrap_err().into();
    assert!(matches!(converted, LookupError::Parse { context: None, .. }));
}
