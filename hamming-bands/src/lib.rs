//! This library provides building blocks of approximate nearest-neighbor searches
//! on binary sketches in the Hamming space:
//! a [banded inverted index](band_index::BandIndex) generating candidates that share
//! at least one band of bits with a query,
//! and a [bounded top-k container](top_k::TopK) ranking them.
#![deny(missing_docs)]

pub mod band_index;
pub mod errors;
pub mod sketch;
pub mod top_k;

pub use band_index::BandIndex;
pub use top_k::TopK;
