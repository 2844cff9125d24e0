use std::fmt;

use winnow::error::{ContextError, ParseError};

#[derive(Debug)]
pub(crate) enum Error {
    ParseError(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError(reason) => {
                write!(f, "{reason}")
            }
        }
    }
}

impl From<&'static str> for Error {
    fn from(reason: &'static str) -> Self {
        Error::ParseError(reason.to_owned())
    }
}

impl From<ParseError<&str, ContextError>> for Error {
    fn from(err: ParseError<&str, ContextError>) -> Self {
        Error::ParseError(err.to_string())
    }
}
