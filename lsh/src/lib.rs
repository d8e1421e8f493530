//! Locality-sensitive hashing of token sequences.
#![deny(missing_docs)]

pub mod simhash;

pub use simhash::simhash64;

/// Seed of the token hash. Every fingerprint depends on it, so it never changes.
pub const SEED: u64 = 0;

/// Hashes raw bytes with MurmurHash2-64A.
#[inline(always)]
pub fn hash_bytes<T>(bytes: T, seed: u64) -> u64
where
    T: AsRef<[u8]>,
{
    fasthash::murmur2::hash64_with_seed(bytes, seed)
}
