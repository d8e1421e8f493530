//! Error definitions.
use std::error::Error;
use std::{fmt, result};

use hamming_bands::errors::HammingBandsError;

/// A specialized Result type for this library.
pub type Result<T, E = SentenceLshError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceLshError {
    /// Contains [`ConfigError`].
    InvalidConfiguration(ConfigError),
    /// Contains [`InputError`].
    InvalidArgument(InputError),
}

impl fmt::Display for SentenceLshError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
        }
    }
}

impl Error for SentenceLshError {}

impl SentenceLshError {
    pub(crate) fn config<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidConfiguration(ConfigError { msg: msg.into() })
    }

    pub(crate) fn input<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InputError { msg: msg.into() })
    }
}

impl From<HammingBandsError> for SentenceLshError {
    fn from(e: HammingBandsError) -> Self {
        Self::config(e.to_string())
    }
}

/// Error used when the index or a tokenizer is constructed with invalid settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    msg: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConfigError: {}", self.msg)
    }
}

/// Error used when a query argument is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    msg: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}
