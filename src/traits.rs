//! Common traits for heap data structures
//!
//! [`Heap`] is the minimal priority-queue interface shared by every heap
//! flavour in this crate: the comparator-driven
//! [`BinaryHeap`](crate::binary_heap::BinaryHeap) and its
//! [`MinHeap`](crate::binary_heap::MinHeap) / [`MaxHeap`](crate::binary_heap::MaxHeap)
//! presets. Code written against the trait works with any ordering.

/// Base trait for heap/priority queue data structures
///
/// A heap keeps the element its comparator ranks first at the top:
/// - `insert` adds an element
/// - `extract` removes and returns the top element
/// - `peek` returns the top element without removing it
///
/// Empty heaps answer `peek` and `extract` with `None`.
///
/// # Example
///
/// ```rust
/// use rust_classic_structures::Heap;
/// use rust_classic_structures::binary_heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.extract(), Some(1));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the top element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top element
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract(&mut self) -> Option<T>;
}
