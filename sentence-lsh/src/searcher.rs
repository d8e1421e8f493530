//! Approximate nearest-neighbor searcher of sentences.
use std::fmt;

use hamming_bands::sketch::Sketch;
use hamming_bands::{BandIndex, TopK};
use rayon::prelude::*;

use crate::errors::{Result, SentenceLshError};
use crate::sentence::Sentence;
use crate::store::{Record, Store};

/// Minimum number of bands.
pub const MIN_BANDS: usize = 2;
/// Maximum number of bands.
pub const MAX_BANDS: usize = 32;

/// A search result borrowed from the index.
pub struct Neighbor<'a, V> {
    /// Key of the neighbor.
    pub key: &'a Sentence,
    /// Payload of the neighbor.
    pub value: &'a V,
    /// Insertion index of the neighbor.
    pub index: usize,
    /// Hamming distance between the fingerprints of the query and the neighbor.
    pub distance: u32,
}

impl<'a, V> Clone for Neighbor<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for Neighbor<'a, V> {}

impl<'a, V> fmt::Debug for Neighbor<'a, V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Neighbor")
            .field("key", self.key)
            .field("value", self.value)
            .field("index", &self.index)
            .field("distance", &self.distance)
            .finish()
    }
}

/// Searcher of similar sentences using 64-bit SimHash and banded LSH.
///
/// Fingerprints are split into `num_bands` bands of `64 / num_bands` bits.
/// A query is only compared with sentences sharing the bits of at least one band,
/// so a sentence differing in every band is never found even if it is close.
///
/// The searcher has a single writer: [`SentenceLsh::put()`] takes `&mut self`
/// and the queries take `&self`.
///
/// # Examples
///
/// ```
/// use sentence_lsh::{Sentence, SentenceLsh, ShingleTokenizer};
///
/// let tokenizer = ShingleTokenizer::new(1, Some(' ')).unwrap();
/// let mut searcher = SentenceLsh::new(4).unwrap();
/// searcher.put(Sentence::from_line("the town of books and curry", &tokenizer), 0);
/// searcher.put(Sentence::from_line("a quiet harbor at dawn", &tokenizer), 1);
///
/// // Same words in another order: the fingerprints are identical.
/// let query = Sentence::from_line("curry and books of the town", &tokenizer);
/// let nearest = searcher.nearest(&query).unwrap();
/// assert_eq!(*nearest.value, 0);
/// assert_eq!(nearest.distance, 0);
/// ```
pub struct SentenceLsh<V> {
    bands: BandIndex<u64>,
    store: Store<V>,
    identical_excluded: bool,
    shows_progress: bool,
}

impl<V> SentenceLsh<V> {
    /// Creates an empty searcher.
    ///
    /// # Arguments
    ///
    /// * `num_bands` - Number of bands, one of `{2, 4, 8, 16, 32}`.
    ///                 The more bands, the more candidates are compared.
    pub fn new(num_bands: usize) -> Result<Self> {
        if !(MIN_BANDS..=MAX_BANDS).contains(&num_bands) {
            return Err(SentenceLshError::config(format!(
                "Invalid number of bands: {num_bands}. It must be in [{MIN_BANDS}, {MAX_BANDS}]."
            )));
        }
        Ok(Self {
            bands: BandIndex::new(num_bands)?,
            store: Store::new(),
            identical_excluded: true,
            shows_progress: false,
        })
    }

    /// Excludes stored sentences whose line equals the query's line from the results?
    /// Enabled by default.
    pub fn excludes_identical(mut self, yes: bool) -> Self {
        self.identical_excluded = yes;
        self
    }

    /// Shows the progress via the standard error output?
    pub fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Adds a sentence with its payload, returning the insertion index.
    pub fn put(&mut self, key: Sentence, value: V) -> usize {
        let sketch = lsh::simhash64(key.tokens());
        self.insert(key, value, sketch)
    }

    /// Adds sentences with their payloads, computing the fingerprints in parallel.
    ///
    /// The items are indexed in the input order, as if [`SentenceLsh::put()`] was
    /// called for each of them.
    pub fn put_all_in_parallel<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (Sentence, V)>,
        V: Send,
    {
        let items: Vec<_> = items.into_iter().collect();
        let records: Vec<_> = items
            .into_par_iter()
            .map(|(key, value)| {
                let sketch = lsh::simhash64(key.tokens());
                (key, value, sketch)
            })
            .collect();
        for (i, (key, value, sketch)) in records.into_iter().enumerate() {
            if self.shows_progress && (i + 1) % 1000 == 0 {
                eprintln!("[SentenceLsh::put_all_in_parallel] Processed {} sentences...", i + 1);
            }
            self.insert(key, value, sketch);
        }
        if self.shows_progress {
            eprintln!(
                "[SentenceLsh::put_all_in_parallel] #sentences={}, #buckets={}",
                self.len(),
                self.bands.num_buckets()
            );
        }
    }

    /// Finds the `k` nearest sentences among the candidates of `query`,
    /// in ascending order of distance (ties broken by insertion index).
    ///
    /// Fewer than `k` neighbors are returned if there are fewer candidates.
    pub fn knn(&self, query: &Sentence, k: usize) -> Result<Vec<Neighbor<'_, V>>> {
        if k < 1 {
            return Err(SentenceLshError::input(format!(
                "Invalid k: {k}. It must be at least 1."
            )));
        }
        let sketch = lsh::simhash64(query.tokens());
        let candidates = self.bands.candidates(sketch);
        let num_candidates = candidates.len();

        let mut top = TopK::new(k);
        let mut hits = 0;
        for (index, record) in self.records_of(candidates) {
            if self.is_excluded(query, record) {
                continue;
            }
            if top.offer((sketch.hamdist(record.sketch()), index)) {
                hits += 1;
            }
        }
        if self.shows_progress {
            eprintln!("[SentenceLsh::knn] #candidates={num_candidates}, #hits={hits}");
        }
        Ok(top
            .into_sorted_vec()
            .into_iter()
            .filter_map(|(distance, index)| self.neighbor(index, distance))
            .collect())
    }

    /// Finds the nearest sentence among the candidates of `query`.
    ///
    /// Returns `None` if the searcher has no candidate for `query`.
    pub fn nearest(&self, query: &Sentence) -> Option<Neighbor<'_, V>> {
        self.knn(query, 1)
            .ok()
            .and_then(|neighbors| neighbors.into_iter().next())
    }

    /// Appends to `neighbors` the candidates of `query` within Hamming distance `radius`,
    /// in ascending order of insertion index.
    pub fn range<'a>(
        &'a self,
        query: &Sentence,
        radius: f64,
        neighbors: &mut Vec<Neighbor<'a, V>>,
    ) -> Result<()> {
        if radius.is_nan() || radius <= 0. {
            return Err(SentenceLshError::input(format!(
                "Invalid radius: {radius}. It must be positive."
            )));
        }
        let sketch = lsh::simhash64(query.tokens());
        let candidates = self.bands.candidates(sketch);
        let num_candidates = candidates.len();

        let num_neighbors = neighbors.len();
        for (index, record) in self.records_of(candidates) {
            if self.is_excluded(query, record) {
                continue;
            }
            let distance = sketch.hamdist(record.sketch());
            if f64::from(distance) <= radius {
                neighbors.push(Neighbor {
                    key: record.key(),
                    value: record.value(),
                    index,
                    distance,
                });
            }
        }
        if self.shows_progress {
            eprintln!(
                "[SentenceLsh::range] #candidates={num_candidates}, #matched={}",
                neighbors.len() - num_neighbors
            );
        }
        Ok(())
    }

    /// Gets the insertion indices of the sentences sharing at least one band with `query`,
    /// in ascending order.
    pub fn candidates(&self, query: &Sentence) -> Vec<usize> {
        self.bands.candidates(lsh::simhash64(query.tokens()))
    }

    /// Gets the record at insertion index `index`.
    pub fn get(&self, index: usize) -> Option<&Record<V>> {
        self.store.get(index)
    }

    /// Gets the fingerprint of the sentence at insertion index `index`.
    pub fn fingerprint(&self, index: usize) -> Option<u64> {
        self.store.get(index).map(Record::sketch)
    }

    /// Gets the number of bands.
    pub fn num_bands(&self) -> usize {
        self.bands.num_bands()
    }

    /// Checks if identical sentences are excluded from the results.
    pub const fn identical_excluded(&self) -> bool {
        self.identical_excluded
    }

    /// Gets the number of stored sentences.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Checks if the searcher is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Gets the approximate memory usage of the band tables in bytes.
    pub fn memory_in_bytes(&self) -> usize {
        self.bands.memory_in_bytes()
    }

    fn insert(&mut self, key: Sentence, value: V, sketch: u64) -> usize {
        let index = self.store.append(key, value, sketch);
        self.bands.insert(index, sketch);
        index
    }

    fn records_of(
        &self,
        candidates: Vec<usize>,
    ) -> impl Iterator<Item = (usize, &Record<V>)> + '_ {
        candidates
            .into_iter()
            .filter_map(move |index| self.store.get(index).map(|record| (index, record)))
    }

    fn is_excluded(&self, query: &Sentence, record: &Record<V>) -> bool {
        self.identical_excluded && record.key().line() == query.line()
    }

    fn neighbor(&self, index: usize, distance: u32) -> Option<Neighbor<'_, V>> {
        self.store.get(index).map(|record| Neighbor {
            key: record.key(),
            value: record.value(),
            index,
            distance,
        })
    }
}
