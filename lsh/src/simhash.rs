//! SimHash fingerprints of token sequences.
//!
//! # Reference
//!
//! * Moses S. Charikar. Similarity estimation techniques from rounding algorithms.
//!   https://doi.org/10.1145/509907.509965

const BITS: usize = 64;

/// Computes the 64-bit SimHash fingerprint of `tokens`.
///
/// Every token is hashed with [`crate::hash_bytes`] under [`crate::SEED`] and votes
/// on each bit position. A bit is set if its votes are non-negative, so a tie sets it.
/// The vote is a sum, so the order of tokens does not matter.
/// An empty sequence produces `0`.
///
/// # Examples
///
/// ```
/// use lsh::simhash64;
///
/// let x = simhash64(["books", "and", "curry"]);
/// let y = simhash64(["curry", "books", "and"]);
/// assert_eq!(x, y);
/// assert_eq!(simhash64(Vec::<&str>::new()), 0);
/// ```
pub fn simhash64<I, T>(tokens: I) -> u64
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut votes = [0i32; BITS];
    let mut is_empty = true;
    for h in tokens
        .into_iter()
        .map(|token| crate::hash_bytes(token, crate::SEED))
    {
        is_empty = false;
        for (j, v) in votes.iter_mut().enumerate() {
            if (h >> j) & 1 == 1 {
                *v += 1;
            } else {
                *v -= 1;
            }
        }
    }
    if is_empty {
        return 0;
    }
    votes
        .iter()
        .enumerate()
        .fold(0, |acc, (j, &v)| if v >= 0 { acc | (1 << j) } else { acc })
}
