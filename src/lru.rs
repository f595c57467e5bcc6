//! Fixed-capacity least-recently-used cache
//!
//! Entries live in a [`SlotMap`] arena and are threaded into a doubly linked
//! recency list by arena key, most recently used at the head. A hash map from
//! cache key to arena key gives O(1) lookup; promotion and eviction are O(1)
//! splices on the list.
//!
//! Using arena keys for `prev`/`next` keeps the list free of reference cycles
//! and of `unsafe`. Slotmap keys are generational, so a stale key can never
//! alias a reused slot.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::lru::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Some(&1));
//!
//! // "b" is now the least recently used entry
//! assert_eq!(cache.put("c", 3), Some(("b", 2)));
//! assert_eq!(cache.keys().collect::<Vec<_>>(), vec![&"c", &"a"]);
//! # Ok::<(), rust_classic_structures::Error>(())
//! ```

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::borrow::Borrow;
use std::hash::Hash;

new_key_type! {
    /// Arena key of a cache entry
    struct EntryKey;
}

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    /// Toward the most recently used end
    prev: Option<EntryKey>,
    /// Toward the least recently used end
    next: Option<EntryKey>,
}

/// A cache holding at most `capacity` entries, evicting the least recently
/// used one when full
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    map: FxHashMap<K, EntryKey>,
    entries: SlotMap<EntryKey, Entry<K, V>>,
    head: Option<EntryKey>,
    tail: Option<EntryKey>,
    capacity: usize,
}

impl<K: Clone + Eq + Hash, V> LruCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            entries: SlotMap::with_capacity_and_key(capacity),
            head: None,
            tail: None,
            capacity,
        })
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no entry is cached
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns true if `key` is cached, without touching its recency
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Looks up `key` and marks it most recently used
    ///
    /// A miss leaves the cache untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let slot = *self.map.get(key)?;
        self.promote(slot);
        self.entries.get(slot).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get) but returns a mutable reference
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let slot = *self.map.get(key)?;
        self.promote(slot);
        self.entries.get_mut(slot).map(|entry| &mut entry.value)
    }

    /// Looks up `key` without changing the eviction order
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let slot = *self.map.get(key)?;
        self.entries.get(slot).map(|entry| &entry.value)
    }

    /// Inserts or updates `key` and marks it most recently used
    ///
    /// Updating an existing key replaces its value in place. Inserting a new
    /// key into a full cache first evicts the least recently used entry,
    /// which is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.map.get(&key) {
            if let Some(entry) = self.entries.get_mut(slot) {
                entry.value = value;
            }
            self.promote(slot);
            return None;
        }

        let evicted = if self.map.len() >= self.capacity {
            self.pop_lru()
        } else {
            None
        };

        let slot = self.entries.insert(Entry {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.push_front(slot);
        self.map.insert(key, slot);

        self.debug_check_sync();
        evicted
    }

    /// Removes `key`, returning its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let slot = self.map.remove(key)?;
        self.unlink(slot);
        let value = self.entries.remove(slot).map(|entry| entry.value);
        self.debug_check_sync();
        value
    }

    /// Removes and returns the least recently used entry
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let slot = self.tail?;
        self.unlink(slot);
        let entry = self.entries.remove(slot)?;
        self.map.remove(&entry.key);
        self.debug_check_sync();
        Some((entry.key, entry.value))
    }

    /// Removes every entry; the capacity is unchanged
    pub fn clear(&mut self) {
        self.map.clear();
        self.entries.clear();
        self.head = None;
        self.tail = None;
    }

    /// Entries from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            entries: &self.entries,
            next: self.head,
            remaining: self.entries.len(),
        }
    }

    /// Keys from most to least recently used
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Values from most to least recently used
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Moves `slot` to the head of the recency list
    fn promote(&mut self, slot: EntryKey) {
        if self.head != Some(slot) {
            self.unlink(slot);
            self.push_front(slot);
        }
    }

    /// Splices `slot` out of the recency list, leaving it in the arena
    fn unlink(&mut self, slot: EntryKey) {
        let Some(entry) = self.entries.get_mut(slot) else {
            return;
        };
        let prev = entry.prev.take();
        let next = entry.next.take();

        match prev.and_then(|p| self.entries.get_mut(p)) {
            Some(prev_entry) => prev_entry.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.entries.get_mut(n)) {
            Some(next_entry) => next_entry.prev = prev,
            None => self.tail = prev,
        }
    }

    /// Links a detached `slot` in as the most recently used entry
    fn push_front(&mut self, slot: EntryKey) {
        let old_head = self.head;
        if let Some(entry) = self.entries.get_mut(slot) {
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head.and_then(|h| self.entries.get_mut(h)) {
            Some(head_entry) => head_entry.prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    #[inline]
    fn debug_check_sync(&self) {
        debug_assert_eq!(self.map.len(), self.entries.len(), "map and list out of sync");
        debug_assert!(self.map.len() <= self.capacity, "cache over capacity");
    }
}

/// Iterator over cache entries in recency order, created by [`LruCache::iter`]
pub struct Iter<'a, K, V> {
    entries: &'a SlotMap<EntryKey, Entry<K, V>>,
    next: Option<EntryKey>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.next?)?;
        self.next = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K: Clone + Eq + Hash, V> IntoIterator for &'a LruCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<K: Clone + Eq + Hash, V>(cache: &LruCache<K, V>) -> Vec<K> {
        cache.keys().cloned().collect()
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result: Result<LruCache<i32, i32>> = LruCache::new(0);
        assert_eq!(result.unwrap_err(), Error::ZeroCapacity);
    }

    #[test]
    fn test_refreshed_key_survives_eviction() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put('A', 1);
        cache.put('B', 2);
        cache.put('C', 3);
        assert_eq!(cache.get(&'A'), Some(&1));

        assert_eq!(cache.put('D', 4), Some(('B', 2)));
        assert_eq!(cache.get(&'B'), None);
        assert_eq!(cache.get(&'A'), Some(&1));
        assert_eq!(cache.get(&'D'), Some(&4));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_first_inserted_is_evicted() {
        let mut cache = LruCache::new(4).unwrap();
        for i in 0..4 {
            assert_eq!(cache.put(i, i * 10), None);
        }
        assert_eq!(cache.put(4, 40), Some((0, 0)));
        assert!(!cache.contains(&0));
        assert_eq!(keys(&cache), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_update_moves_to_front_without_evicting() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put("x", 1);
        cache.put("y", 2);
        assert_eq!(cache.put("x", 10), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(keys(&cache), vec!["x", "y"]);
        assert_eq!(cache.put("z", 3), Some(("y", 2)));
        assert_eq!(cache.peek(&"x"), Some(&10));
    }

    #[test]
    fn test_miss_has_no_side_effects() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 'a');
        cache.put(2, 'b');
        assert_eq!(cache.get(&3), None);
        assert_eq!(keys(&cache), vec![2, 1]);
    }

    #[test]
    fn test_peek_does_not_promote() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 'a');
        cache.put(2, 'b');
        assert_eq!(cache.peek(&1), Some(&'a'));
        assert_eq!(cache.put(3, 'c'), Some((1, 'a')));
    }

    #[test]
    fn test_get_mut_promotes() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 100);
        cache.put(2, 200);
        if let Some(value) = cache.get_mut(&1) {
            *value += 1;
        }
        assert_eq!(keys(&cache), vec![1, 2]);
        assert_eq!(cache.peek(&1), Some(&101));
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = LruCache::new(1).unwrap();
        cache.put("a", 1);
        assert_eq!(cache.put("b", 2), Some(("a", 1)));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_remove_relinks_neighbors() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put(1, ());
        cache.put(2, ());
        cache.put(3, ());
        assert_eq!(cache.remove(&2), Some(()));
        assert_eq!(cache.remove(&2), None);
        assert_eq!(keys(&cache), vec![3, 1]);

        assert_eq!(cache.remove(&1), Some(()));
        assert_eq!(cache.remove(&3), Some(()));
        assert!(cache.is_empty());
        assert_eq!(cache.iter().count(), 0);
    }

    #[test]
    fn test_string_keys_borrowed_lookup() {
        let mut cache: LruCache<String, usize> = LruCache::new(2).unwrap();
        cache.put("alpha".to_string(), 1);
        assert!(cache.contains("alpha"));
        assert_eq!(cache.get("alpha"), Some(&1));
        assert_eq!(cache.remove("alpha"), Some(1));
    }

    #[test]
    fn test_values_and_iter_order() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put('a', 1);
        cache.put('b', 2);
        cache.put('c', 3);
        cache.get(&'a');

        assert_eq!(cache.values().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
        let iter = cache.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![(&'a', &1), (&'c', &3), (&'b', &2)]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, 1);
        cache.put(2, 2);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 2);
        assert_eq!(cache.pop_lru(), None);

        cache.put(3, 3);
        assert_eq!(keys(&cache), vec![3]);
    }
}
