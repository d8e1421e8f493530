//! Traits of binary short sketches of primitive integer types.
use std::ops::Range;

use num_traits::int::PrimInt;
use num_traits::Unsigned;

/// Trait of a binary short sketch from a primitive unsigned integer type.
pub trait Sketch: Default + PrimInt + Unsigned {
    /// Gets the number of dimensions.
    fn dim() -> usize;
    /// Gets the Hamming distance to the other sketch.
    fn hamdist(self, rhs: Self) -> u32;
    /// Produces a sketch for masking a given bit-position range.
    fn mask(rng: Range<usize>) -> Self;
    /// Widens the sketch into a table key.
    fn key(self) -> u64;
}

impl Sketch for u64 {
    #[inline(always)]
    fn dim() -> usize {
        64
    }
    #[inline(always)]
    fn hamdist(self, rhs: Self) -> u32 {
        (self ^ rhs).count_ones()
    }
    #[inline(always)]
    fn mask(rng: Range<usize>) -> Self {
        debug_assert!(rng.end <= Self::dim());
        if rng.len() == Self::dim() {
            Self::MAX
        } else {
            ((1 << rng.len()) - 1) << rng.start
        }
    }
    #[inline(always)]
    fn key(self) -> u64 {
        self
    }
}
