//! Error types for the settings store.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from reading or writing persisted settings.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// I/O error.
    Io(String),
    /// A settings record exists but is not the expected 8-byte value.
    MalformedRecord { key: &'static str, len: usize },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::MalformedRecord { key, len } => {
                write!(f, "settings record '{key}' has {len} bytes, expected 8")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
