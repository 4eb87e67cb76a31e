//! Crate-level error types.

use std::fmt;

/// Errors produced by the cardwheel crate.
///
/// The animation core itself is infallible; only the options layer can fail
/// (reading or parsing preset files).
#[derive(Debug)]
pub enum CarouselError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for CarouselError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
