//! Banded inverted index over binary sketches.
use hashbrown::HashMap;

use crate::errors::{HammingBandsError, Result};
use crate::sketch::Sketch;

/// Inverted index that splits every sketch into equal-width bands of bits.
///
/// Each band owns a table from the band's slice value to a bucket of ids.
/// Two sketches become candidates of each other if and only if
/// they share the slice of at least one band.
/// Pairs differing in every band are never reported, trading recall for speed.
#[derive(Clone, Debug)]
pub struct BandIndex<S> {
    bands: Vec<HashMap<u64, Vec<usize>>>,
    slice_width: usize,
    slice_mask: S,
}

impl<S> BandIndex<S>
where
    S: Sketch,
{
    /// Creates an index partitioning `S::dim()` bits into `num_bands` bands.
    ///
    /// `num_bands` must be in `[2, S::dim() / 2]` and divide `S::dim()`,
    /// i.e., one of `{2, 4, 8, 16, 32}` for `u64`.
    pub fn new(num_bands: usize) -> Result<Self> {
        let dim = S::dim();
        if num_bands < 2 || dim / 2 < num_bands || dim % num_bands != 0 {
            return Err(HammingBandsError::bands(num_bands, dim));
        }
        let slice_width = dim / num_bands;
        Ok(Self {
            bands: vec![HashMap::new(); num_bands],
            slice_width,
            slice_mask: S::mask(0..slice_width),
        })
    }

    /// Gets the number of bands.
    pub fn num_bands(&self) -> usize {
        self.bands.len()
    }

    /// Gets the number of bits in each band.
    pub const fn slice_width(&self) -> usize {
        self.slice_width
    }

    /// Extracts the bits of `sketch` covered by band `band`.
    ///
    /// Band `b` covers bit positions `[b * slice_width, (b + 1) * slice_width)`.
    #[inline(always)]
    pub fn slice(&self, sketch: S, band: usize) -> u64 {
        debug_assert!(band < self.num_bands());
        ((sketch >> (band * self.slice_width)) & self.slice_mask).key()
    }

    /// Registers `id` into the bucket of every band for `sketch`.
    pub fn insert(&mut self, id: usize, sketch: S) {
        for b in 0..self.num_bands() {
            let key = self.slice(sketch, b);
            self.bands[b].entry(key).or_default().push(id);
        }
    }

    /// Collects the ids sharing at least one band with `sketch`,
    /// returning them deduplicated in ascending order.
    pub fn candidates(&self, sketch: S) -> Vec<usize> {
        let mut candidates = vec![];
        for (b, band) in self.bands.iter().enumerate() {
            if let Some(bucket) = band.get(&self.slice(sketch, b)) {
                candidates.extend_from_slice(bucket);
            }
        }
        candidates.sort_unstable();
        candidates.dedup();
        candidates
    }

    /// Gets the total number of buckets over all bands.
    pub fn num_buckets(&self) -> usize {
        self.bands.iter().map(|band| band.len()).sum()
    }

    /// Gets the approximate memory usage of the buckets in bytes.
    pub fn memory_in_bytes(&self) -> usize {
        self.bands
            .iter()
            .flat_map(|band| band.values())
            .map(|bucket| {
                std::mem::size_of::<u64>() + bucket.capacity() * std::mem::size_of::<usize>()
            })
            .sum()
    }
}
