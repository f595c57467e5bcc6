//! Stable priority queue built on [`BinaryHeap`]
//!
//! Each enqueued value is stored as an [`Entry`] carrying its priority and a
//! sequence number drawn from a monotonically increasing counter. Entries are
//! ordered by priority first and by sequence second, so values with equal
//! priority leave the queue in the order they arrived (FIFO).
//!
//! By default the lowest priority is dequeued first. [`PriorityQueue::max_first`]
//! flips only the priority comparison; ties still break FIFO.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue("write report", 2);
//! queue.enqueue("fix outage", 0);
//! queue.enqueue("answer email", 2);
//!
//! assert_eq!(queue.dequeue(), Some("fix outage"));
//! assert_eq!(queue.dequeue(), Some("write report"));
//! assert_eq!(queue.dequeue(), Some("answer email"));
//! assert_eq!(queue.dequeue(), None);
//! ```

use crate::binary_heap::BinaryHeap;
use crate::comparator::{Comparator, Natural};
use std::cmp::Ordering;

/// A value queued with its priority and arrival sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T, P> {
    /// The queued value
    pub value: T,
    /// Priority the value was enqueued with
    pub priority: P,
    /// Arrival order, unique within one queue
    pub sequence: u64,
}

/// Orders entries by priority, then by arrival
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOrder<C = Natural> {
    priority: C,
    min_priority: bool,
}

impl<T, P, C: Comparator<P>> Comparator<Entry<T, P>> for EntryOrder<C> {
    fn compare(&self, a: &Entry<T, P>, b: &Entry<T, P>) -> Ordering {
        let by_priority = if self.min_priority {
            self.priority.compare(&a.priority, &b.priority)
        } else {
            self.priority.compare(&b.priority, &a.priority)
        };
        by_priority.then(a.sequence.cmp(&b.sequence))
    }
}

/// A priority queue with FIFO tie-breaking
///
/// Priorities are compared with `C`. Use [`FloatOrder`](crate::comparator::FloatOrder)
/// for `f32`/`f64` priorities:
///
/// ```rust
/// use rust_classic_structures::comparator::FloatOrder;
/// use rust_classic_structures::priority_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::with_comparator(FloatOrder, true);
/// queue.enqueue("b", 0.5_f64);
/// queue.enqueue("a", 0.25);
/// assert_eq!(queue.dequeue(), Some("a"));
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P, C = Natural> {
    heap: BinaryHeap<Entry<T, P>, EntryOrder<C>>,
    next_sequence: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Creates a queue that dequeues the lowest priority first
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a queue that dequeues the highest priority first
    pub fn max_first() -> Self {
        Self::with_order(false)
    }

    /// Creates a queue with the given priority direction
    ///
    /// `is_min_priority == true` dequeues ascending priorities.
    pub fn with_order(is_min_priority: bool) -> Self {
        Self::with_comparator(Natural, is_min_priority)
    }
}

impl<T, P, C: Comparator<P>> PriorityQueue<T, P, C> {
    /// Creates a queue whose priorities are compared with `cmp`
    ///
    /// `is_min_priority` flips only the priority comparison.
    pub fn with_comparator(cmp: C, is_min_priority: bool) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_comparator(EntryOrder {
                priority: cmp,
                min_priority: is_min_priority,
            }),
            next_sequence: 0,
        }
    }

    /// Returns true if lower priorities are dequeued first
    pub fn is_min_priority(&self) -> bool {
        self.heap.comparator().min_priority
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued values
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds a value with the given priority
    pub fn enqueue(&mut self, value: T, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.insert(Entry {
            value,
            priority,
            sequence,
        });
    }

    /// Removes and returns the next value
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.extract().map(|entry| entry.value)
    }

    /// Removes and returns the next entry, priority and sequence included
    pub fn dequeue_entry(&mut self) -> Option<Entry<T, P>> {
        self.heap.extract()
    }

    /// Returns the next value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.value)
    }

    /// Returns the priority of the next value
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|entry| &entry.priority)
    }

    /// Removes every value
    ///
    /// The sequence counter keeps running so later arrivals still order
    /// after earlier ones.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates over queued entries in storage order (not dequeue order)
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T, P>> {
        self.heap.iter()
    }
}

impl<T, P, C: Comparator<P> + Default> Default for PriorityQueue<T, P, C> {
    fn default() -> Self {
        Self::with_comparator(C::default(), true)
    }
}

impl<T, P, C: Comparator<P>> Extend<(T, P)> for PriorityQueue<T, P, C> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}
