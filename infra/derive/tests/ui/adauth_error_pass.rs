use adauth_derive::adauth_error;
use std::borrow::Cow;

#[adauth_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("Reading settings")
}

fn reject() -> Result<(), DemoError> {
    Err(DemoError::Rejected { message: "nope".into(), context: None }).context("Validating")
}

fn main() {
    let io = read().unwrap_err();
    assert_eq!(io.to_string(), "IO error (Reading settings): boom");

    let rejected = reject().unwrap_err();
    assert_eq!(rejected.to_string(), "Rejected (Validating): nope");

    let from_str: DemoError = "fallback".into();
    assert_eq!(from_str.to_string(), "Internal error: fallback");

    let from_io: DemoError = std::io::Error::other("raw").into();
    assert!(matches!(from_io, DemoError::Io { context: None, .. }));
}
