//! Error definitions.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = HammingBandsError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HammingBandsError {
    /// Contains [`BandsError`].
    Bands(BandsError),
}

impl fmt::Display for HammingBandsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bands(e) => e.fmt(f),
        }
    }
}

impl Error for HammingBandsError {}

impl HammingBandsError {
    pub(crate) const fn bands(num_bands: usize, dim: usize) -> Self {
        Self::Bands(BandsError { num_bands, dim })
    }
}

/// Error used when a sketch cannot be split into the requested number of bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandsError {
    num_bands: usize,
    dim: usize,
}

impl BandsError {
    /// Gets the rejected number of bands.
    pub const fn num_bands(&self) -> usize {
        self.num_bands
    }

    /// Gets the number of dimensions of the sketch.
    pub const fn dim(&self) -> usize {
        self.dim
    }
}

impl fmt::Display for BandsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "BandsError: {} bands cannot partition a {}-bit sketch; \
             the number must be in [2, {}] and divide {}",
            self.num_bands,
            self.dim,
            self.dim / 2,
            self.dim
        )
    }
}
