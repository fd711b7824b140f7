use std::borrow::Cow;

/// A specialized [`ActiveDirectoryError`] enum of this crate.
#[adauth_derive::adauth_error]
pub enum ActiveDirectoryError {
    /// The requested authentication mode cannot run on the detected host OS.
    #[error("Active Directory configuration error{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
