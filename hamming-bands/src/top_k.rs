//! Bounded selection of the k smallest items.
use std::collections::BinaryHeap;

/// Fixed-capacity container keeping the `capacity` smallest items offered so far.
///
/// Until the container is full, its worst item acts as positive infinity,
/// so that every offer is kept.
/// Offers take `O(log k)` time, [`TopK::worst()`] takes `O(1)` time,
/// and [`TopK::into_sorted_vec()`] takes `O(k log k)` time.
#[derive(Clone, Debug)]
pub struct TopK<T> {
    heap: BinaryHeap<T>,
    capacity: usize,
}

impl<T> TopK<T>
where
    T: Ord,
{
    /// Creates an empty container holding at most `capacity` items.
    ///
    /// No memory is reserved up front; the heap grows with the kept items.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            capacity,
        }
    }

    /// Gets the maximum number of items.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Gets the number of kept items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Checks if no item is kept.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Checks if the container holds `capacity` items.
    pub fn is_full(&self) -> bool {
        self.capacity <= self.heap.len()
    }

    /// Gets the largest kept item, or `None` while the container is not full.
    pub fn worst(&self) -> Option<&T> {
        if self.is_full() {
            self.heap.peek()
        } else {
            None
        }
    }

    /// Checks if `item` would be kept, i.e., it is strictly smaller than [`TopK::worst()`].
    pub fn accepts(&self, item: &T) -> bool {
        if self.capacity == 0 {
            return false;
        }
        self.worst().map_or(true, |worst| item < worst)
    }

    /// Offers `item`, replacing the worst one if full.
    /// Returns `true` if the item is kept.
    pub fn offer(&mut self, item: T) -> bool {
        if !self.accepts(&item) {
            return false;
        }
        if self.is_full() {
            self.heap.pop();
        }
        self.heap.push(item);
        true
    }

    /// Consumes the container, returning the kept items in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}
