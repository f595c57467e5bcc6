//! Comparator-driven binary heap
//!
//! An array-backed binary heap whose order comes entirely from a
//! [`Comparator`]. The element the comparator ranks first sits at index 0;
//! wrap the comparator in [`Reversed`] to turn a min-heap into a max-heap.
//!
//! The buffer is a complete binary tree laid out by index arithmetic: the
//! parent of `i` is `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert`  | O(log n)   |
//! | `extract` | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::binary_heap::{BinaryHeap, MaxHeap, MinHeap};
//!
//! let mut min = MinHeap::new();
//! for value in [10, 8, 6, 4, 2] {
//!     min.insert(value);
//! }
//! assert_eq!(min.peek(), Some(&2));
//! assert_eq!(min.into_sorted_vec(), vec![2, 4, 6, 8, 10]);
//!
//! let mut max: MaxHeap<&str> = MaxHeap::new();
//! max.insert("pear");
//! max.insert("apple");
//! max.insert("quince");
//! assert_eq!(max.extract(), Some("quince"));
//!
//! // Any closure works as a comparator
//! let mut by_len = BinaryHeap::with_comparator(|a: &String, b: &String| a.len().cmp(&b.len()));
//! by_len.insert("ccc".to_string());
//! by_len.insert("a".to_string());
//! assert_eq!(by_len.peek().map(String::as_str), Some("a"));
//! ```

use crate::comparator::{Comparator, FloatOrder, Natural, Reversed};
use crate::traits::Heap;

/// Min-heap over the natural ascending order of `T`
pub type MinHeap<T> = BinaryHeap<T, Natural>;

/// Max-heap over the natural order of `T`
pub type MaxHeap<T> = BinaryHeap<T, Reversed<Natural>>;

/// Min-heap of floating point numbers under IEEE total order
pub type FloatMinHeap<F> = BinaryHeap<F, FloatOrder>;

/// Max-heap of floating point numbers under IEEE total order
pub type FloatMaxHeap<F> = BinaryHeap<F, Reversed<FloatOrder>>;

/// A binary heap ordered by a comparator
///
/// `peek` and `extract` return the element that the comparator ranks first.
/// Elements the comparator considers equal come out in an unspecified order.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = Natural> {
    /// The heap data, a complete binary tree in level order
    data: Vec<T>,
    /// Ordering applied to every comparison
    cmp: C,
}

impl<T, C: Comparator<T> + Default> BinaryHeap<T, C> {
    /// Creates an empty heap using the comparator's default value
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp: C::default(),
        }
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element and bubbles it up to its place
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the top element
    pub fn extract(&mut self) -> Option<T> {
        if self.data.len() <= 1 {
            return self.data.pop();
        }

        // swap_remove moves the last element into the root slot
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Some(top)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the buffer in storage order (not sorted order)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the underlying buffer in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a reference to the heap's comparator
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Consumes the heap, returning the buffer in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.extract() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks the heap property over the whole buffer
    ///
    /// For every index with a parent, the parent must not rank after the
    /// child.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| !self.cmp.less(&self.data[i], &self.data[(i - 1) / 2]))
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.less(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.cmp.less(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.cmp.less(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Comparator<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        BinaryHeap::insert(self, value)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn extract(&mut self) -> Option<T> {
        BinaryHeap::extract(self)
    }
}

impl<T, C: Comparator<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
