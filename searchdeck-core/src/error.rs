//! Error types for Searchdeck core.

use std::{error::Error, fmt, io};

use crate::domain::AreaKind;

/// Error type for Searchdeck core operations.
#[derive(Debug)]
pub enum SearchdeckError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A canonical analysis area has no result at report construction time.
    MissingArea(AreaKind),
    /// A metrics export could not be parsed.
    Parse(String),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for SearchdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::MissingArea(area) => write!(f, "missing result for area: {area}"),
            Self::Parse(message) => write!(f, "parse error: {message}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for SearchdeckError {}

impl From<io::Error> for SearchdeckError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SearchdeckError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

/// Convenience result type for Searchdeck core.
pub type Result<T> = std::result::Result<T, SearchdeckError>;
