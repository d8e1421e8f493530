//! Approximate nearest-neighbor searches of short sentences.
//!
//! Every sentence is converted into a 64-bit [SimHash](lsh::simhash64) fingerprint of its tokens.
//! The fingerprints are split into bands and indexed per band,
//! so that a query is only compared with sentences sharing at least one band,
//! and the candidates are ranked by the Hamming distance of the fingerprints.
#![deny(missing_docs)]

pub mod errors;
pub mod searcher;
pub mod sentence;
pub mod store;

pub(crate) mod shingling;

pub use searcher::{Neighbor, SentenceLsh};
pub use sentence::{Sentence, ShingleTokenizer, Tokenizer};
