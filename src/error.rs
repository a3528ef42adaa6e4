use date_span::DateFormatError;
use std::fmt;

/// Everything that can go wrong while compiling a query. Raised at the
/// point of detection; the message names the offending key, value, or
/// expression so the request layer can show it to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A named token or order token outside the supported vocabulary.
    UnsupportedKey(String),
    /// A value whose shape the requirement's capability does not permit.
    InvalidValue(String),
    /// A date expression matching none of the recognized forms.
    InvalidDate(DateFormatError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnsupportedKey(key) => write!(f, "unsupported search key: {key:?}"),
            QueryError::InvalidValue(message) => write!(f, "{message}"),
            QueryError::InvalidDate(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::InvalidDate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DateFormatError> for QueryError {
    fn from(err: DateFormatError) -> Self {
        QueryError::InvalidDate(err)
    }
}
