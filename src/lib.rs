//! Classic Data Structures for Rust
//!
//! This crate provides comparator-driven implementations of the data structures
//! found in every algorithms textbook, each guarding its own structural invariant.
//!
//! # Features
//!
//! - **AVL Tree**: height-balanced BST; O(log n) insert, remove and lookup via single and double rotations
//! - **Binary Search Tree**: unbalanced BST keeping duplicates; O(h) operations
//! - **Binary Heap**: array-backed heap over any comparator, with min/max and float aliases
//! - **Priority Queue**: stable (FIFO on ties) min- or max-priority queue built on the binary heap
//! - **Disjoint Set**: union-find with path compression and union by rank
//! - **Trie**: prefix tree over Unicode strings with pruning removal
//! - **Graph**: directed or undirected, weighted or unweighted adjacency lists with BFS, DFS,
//!   Dijkstra and cycle detection
//! - **LRU Cache**: fixed-capacity cache with O(1) get, put and eviction over a slotmap arena
//!
//! Ordered structures take a [`Comparator`](comparator::Comparator): any
//! `Fn(&T, &T) -> Ordering` closure, or one of the presets in [`comparator`].
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::avl::AvlTree;
//! use rust_classic_structures::binary_heap::MaxHeap;
//! use rust_classic_structures::Heap;
//!
//! let tree: AvlTree<i32> = [5, 1, 4, 2, 3].into_iter().collect();
//! assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5]);
//! assert_eq!(tree.height(), 3);
//!
//! let mut heap: MaxHeap<i32> = MaxHeap::new();
//! Heap::insert(&mut heap, 7);
//! Heap::insert(&mut heap, 9);
//! assert_eq!(Heap::extract(&mut heap), Some(9));
//! ```

pub mod avl;
pub mod binary_heap;
pub mod bst;
pub mod comparator;
pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod lru;
pub mod priority_queue;
pub mod rank;
pub mod traits;
pub mod trie;

// Re-export the main trait and error type for convenience
pub use error::{Error, Result};
pub use traits::Heap;
