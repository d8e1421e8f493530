//! Append-only storage of indexed sentences.
use crate::sentence::Sentence;

/// A stored item: its key, payload, and fingerprint.
#[derive(Clone, Debug)]
pub struct Record<V> {
    key: Sentence,
    value: V,
    sketch: u64,
}

impl<V> Record<V> {
    /// Gets the key.
    pub const fn key(&self) -> &Sentence {
        &self.key
    }

    /// Gets the payload.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Gets the fingerprint of the key.
    pub const fn sketch(&self) -> u64 {
        self.sketch
    }
}

/// Records indexed by insertion order.
#[derive(Clone, Debug)]
pub struct Store<V> {
    records: Vec<Record<V>>,
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self { records: vec![] }
    }
}

impl<V> Store<V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, returning its index.
    pub fn append(&mut self, key: Sentence, value: V, sketch: u64) -> usize {
        let index = self.records.len();
        self.records.push(Record { key, value, sketch });
        index
    }

    /// Gets the record at `index`.
    pub fn get(&self, index: usize) -> Option<&Record<V>> {
        self.records.get(index)
    }

    /// Gets the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record<V>> {
        self.records.iter()
    }
}
