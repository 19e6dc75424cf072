//! Crate-level error types.

use std::fmt;

/// Errors produced by the bstviz crate.
///
/// Tree mutation, search, and traversal are total functions and never
/// fail; errors only arise at the options I/O edge.
#[derive(Debug)]
pub enum BstvizError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for BstvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for BstvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for BstvizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
