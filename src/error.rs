//! Crate-level error types.

use std::fmt;

/// Errors produced by the whorl crate.
///
/// The animation surface itself never fails - lifecycle calls are defined
/// no-ops or guarded early returns. Errors only arise from the options
/// preset I/O.
#[derive(Debug)]
pub enum WhorlError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for WhorlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for WhorlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for WhorlError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
