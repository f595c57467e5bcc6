//! Disjoint set forest (union-find)
//!
//! Tracks a partition of identifiers into disjoint sets. Each identifier keeps
//! a parent link (a root is its own parent), a [`Rank`] used only to decide
//! merge direction, and a size that is meaningful on roots.
//!
//! - **Path compression**: [`DisjointSet::find`] repoints every identifier it
//!   walks past directly at the root it discovers.
//! - **Union by rank**: the root of lower rank goes under the root of higher
//!   rank; on a tie the second argument's root goes under the first's and the
//!   first's rank grows by one.
//!
//! Together they give amortized near-constant `find` and `union`.
//!
//! Identifiers need not be declared up front: the first time an unseen id is
//! passed to any operation it becomes a singleton set.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::disjoint_set::DisjointSet;
//!
//! let mut sets = DisjointSet::new();
//! sets.union(1, 2);
//! sets.union(3, 4);
//! assert!(sets.connected(1, 2));
//! assert!(!sets.connected(2, 3));
//!
//! sets.union(2, 3);
//! assert_eq!(sets.get_size(4), 4);
//! ```

use crate::rank::{checked_increment, Rank};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::hash::Hash;

/// Per-identifier bookkeeping
#[derive(Debug, Clone)]
struct Entry<K> {
    parent: K,
    rank: Rank,
    /// Cardinality of the set; only read on roots
    size: usize,
}

/// Union-find over hashable identifiers
#[derive(Debug, Clone)]
pub struct DisjointSet<K> {
    entries: FxHashMap<K, Entry<K>>,
}

impl<K: Clone + Eq + Hash> DisjointSet<K> {
    /// Creates an empty structure
    pub fn new() -> Self {
        DisjointSet {
            entries: FxHashMap::default(),
        }
    }

    /// Number of identifiers seen so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no identifier has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `id` has been registered
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Registers `id` as a singleton set; no-op if already known
    pub fn make_set(&mut self, id: K) {
        if !self.entries.contains_key(&id) {
            let entry = Entry {
                parent: id.clone(),
                rank: 0,
                size: 1,
            };
            self.entries.insert(id, entry);
        }
    }

    /// Returns the root of the set containing `id`, compressing the path
    ///
    /// Registers `id` as a singleton first if it is unseen.
    pub fn find(&mut self, id: K) -> K {
        self.make_set(id.clone());

        let mut path: SmallVec<[K; 8]> = SmallVec::new();
        let mut current = id;
        loop {
            let parent = &self.entries[&current].parent;
            if *parent == current {
                break;
            }
            let next = parent.clone();
            path.push(current);
            current = next;
        }

        for node in path {
            if let Some(entry) = self.entries.get_mut(&node) {
                entry.parent = current.clone();
            }
        }
        current
    }

    /// Merges the sets containing `a` and `b`
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, a: K, b: K) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.entries[&root_a].rank;
        let rank_b = self.entries[&root_b].rank;
        let (root, child) = match rank_a.cmp(&rank_b) {
            Ordering::Less => (root_b, root_a),
            Ordering::Greater => (root_a, root_b),
            Ordering::Equal => {
                if let Some(entry) = self.entries.get_mut(&root_a) {
                    entry.rank = checked_increment(entry.rank);
                }
                (root_a, root_b)
            }
        };

        let child_size = match self.entries.get_mut(&child) {
            Some(entry) => {
                entry.parent = root.clone();
                entry.size
            }
            None => 0,
        };
        if let Some(entry) = self.entries.get_mut(&root) {
            entry.size += child_size;
        }
        true
    }

    /// Returns true if `a` and `b` belong to the same set
    pub fn connected(&mut self, a: K, b: K) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of identifiers in the set containing `id`
    pub fn get_size(&mut self, id: K) -> usize {
        let root = self.find(id);
        self.entries[&root].size
    }

    /// Number of distinct sets
    pub fn set_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(id, entry)| entry.parent == **id)
            .count()
    }

    /// Groups every known identifier by the root of its set
    ///
    /// O(n); meant for inspection rather than hot paths. Member order within
    /// a group is unspecified.
    pub fn get_sets(&mut self) -> FxHashMap<K, Vec<K>> {
        let ids: Vec<K> = self.entries.keys().cloned().collect();
        let mut sets: FxHashMap<K, Vec<K>> = FxHashMap::default();
        for id in ids {
            let root = self.find(id.clone());
            sets.entry(root).or_default().push(id);
        }
        sets
    }

    /// Rank of `id`'s entry, if registered
    #[cfg(test)]
    fn rank_of(&self, id: K) -> Option<Rank> {
        self.entries.get(&id).map(|entry| entry.rank)
    }

    /// Direct parent of `id`, if registered
    #[cfg(test)]
    fn parent_of(&self, id: K) -> Option<K> {
        self.entries.get(&id).map(|entry| entry.parent.clone())
    }
}

impl<K: Clone + Eq + Hash> Default for DisjointSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
