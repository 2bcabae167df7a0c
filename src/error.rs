use std::num::ParseFloatError;
use trackable::error::TrackableError;
use trackable::error::{ErrorKind as TrackableErrorKind, ErrorKindExt};

/// This crate specific error type.
#[derive(Debug, Clone)]
pub struct Error(TrackableError<ErrorKind>);
derive_traits_for_trackable_error_newtype!(Error, ErrorKind);
impl From<ParseFloatError> for Error {
    fn from(f: ParseFloatError) -> Self {
        ErrorKind::InvalidInput.cause(f.to_string()).into()
    }
}

/// The list of the possible error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument could not be interpreted (e.g., a malformed quantile).
    InvalidInput,

    /// A value had a different shape than required (e.g., a non-numeric collection element).
    TypeMismatch,

    /// Other errors.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
