//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that each
//! structure's invariants hold after every step, checking results against a
//! simple std-collection model where one exists.

use proptest::prelude::*;
use rust_classic_structures::avl::AvlTree;
use rust_classic_structures::binary_heap::{MaxHeap, MinHeap};
use rust_classic_structures::bst::BinarySearchTree;
use rust_classic_structures::disjoint_set::DisjointSet;
use rust_classic_structures::graph::Graph;
use rust_classic_structures::lru::LruCache;
use rust_classic_structures::priority_queue::PriorityQueue;
use rust_classic_structures::trie::Trie;
use rust_classic_structures::Heap;

use std::collections::{BTreeSet, VecDeque};

/// Test that push and extract keep the top equal to the model's best element
fn test_insert_extract_invariant<H: Heap<i32> + Default>(
    ops: Vec<(bool, i32)>,
    best: fn(&[i32]) -> Option<i32>,
) -> Result<(), TestCaseError> {
    let mut heap = H::default();
    let mut inserted = Vec::new();

    for (should_extract, value) in ops {
        if should_extract && !heap.is_empty() {
            let extracted = heap.extract();
            prop_assert_eq!(extracted, best(&inserted));
            if let Some(pos) = inserted.iter().position(|&v| Some(v) == extracted) {
                inserted.swap_remove(pos);
            }
        } else {
            heap.insert(value);
            inserted.push(value);
        }

        prop_assert_eq!(heap.len(), inserted.len());
        prop_assert_eq!(heap.peek().copied(), best(&inserted));
    }

    Ok(())
}

/// Test that draining a heap yields the sorted input
fn test_extract_order_invariant<H: Heap<i32> + Default>(
    values: Vec<i32>,
    expected: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut heap = H::default();
    for value in &values {
        heap.insert(*value);
    }

    let mut drained = Vec::with_capacity(values.len());
    while let Some(value) = heap.extract() {
        drained.push(value);
    }
    prop_assert_eq!(drained, expected);

    Ok(())
}

fn min_of(values: &[i32]) -> Option<i32> {
    values.iter().min().copied()
}

fn max_of(values: &[i32]) -> Option<i32> {
    values.iter().max().copied()
}

/// Test that AVL insert/remove match a set model and keep the balance invariant
fn test_avl_model(ops: Vec<(bool, i16)>) -> Result<(), TestCaseError> {
    let mut tree: AvlTree<i16> = AvlTree::new();
    let mut model = BTreeSet::new();

    for (should_remove, value) in ops {
        if should_remove {
            prop_assert_eq!(tree.remove(&value), model.remove(&value));
        } else {
            prop_assert_eq!(tree.insert(value), model.insert(value));
        }

        prop_assert!(tree.is_balanced(), "AVL balance violated");
        prop_assert_eq!(tree.len(), model.len());

        // Height bound for an AVL tree: h < 1.45 log2(n + 2)
        let bound = 1.45 * ((model.len() + 2) as f64).log2();
        prop_assert!((tree.height() as f64) < bound + 1.0);
    }

    let in_order: Vec<i16> = tree.in_order().into_iter().copied().collect();
    let expected: Vec<i16> = model.into_iter().collect();
    prop_assert_eq!(in_order, expected);

    Ok(())
}

/// Test that BST in-order traversal is the sorted multiset of live values
fn test_bst_model(inserts: Vec<i16>, removals: Vec<i16>) -> Result<(), TestCaseError> {
    let mut tree: BinarySearchTree<i16> = BinarySearchTree::new();
    let mut model = inserts.clone();
    for value in inserts {
        tree.insert(value);
    }

    for value in removals {
        let expected = model.iter().position(|&v| v == value);
        prop_assert_eq!(tree.remove(&value), expected.is_some());
        if let Some(pos) = expected {
            model.swap_remove(pos);
        }
    }

    model.sort();
    let in_order: Vec<i16> = tree.in_order().into_iter().copied().collect();
    prop_assert_eq!(in_order, model.clone());
    prop_assert_eq!(tree.len(), model.len());
    prop_assert_eq!(tree.min().copied(), model.first().copied());
    prop_assert_eq!(tree.max().copied(), model.last().copied());

    Ok(())
}

/// Test union-find against a naive labelling model
fn test_disjoint_set_model(elements: u8, unions: Vec<(u8, u8)>) -> Result<(), TestCaseError> {
    let mut sets = DisjointSet::new();
    let mut label: Vec<u8> = (0..elements).collect();

    for id in 0..elements {
        sets.make_set(id);
    }

    for (a, b) in unions {
        let (a, b) = (a % elements, b % elements);
        let merged = sets.union(a, b);
        prop_assert_eq!(merged, label[a as usize] != label[b as usize]);
        // Idempotent: a second union of the same pair is a no-op
        prop_assert!(!sets.union(a, b));

        let (from, to) = (label[b as usize], label[a as usize]);
        for l in label.iter_mut() {
            if *l == from {
                *l = to;
            }
        }
    }

    for a in 0..elements {
        let class_size = label.iter().filter(|&&l| l == label[a as usize]).count();
        prop_assert_eq!(sets.get_size(a), class_size);
        for b in 0..elements {
            prop_assert_eq!(
                sets.connected(a, b),
                label[a as usize] == label[b as usize]
            );
        }
    }

    let distinct: BTreeSet<u8> = label.iter().copied().collect();
    prop_assert_eq!(sets.set_count(), distinct.len());
    prop_assert_eq!(sets.get_sets().len(), distinct.len());

    Ok(())
}

/// Test trie round-trip: stored words are found, removing one word never
/// disturbs another
fn test_trie_model(words: Vec<String>, removals: Vec<usize>) -> Result<(), TestCaseError> {
    let mut trie = Trie::new();
    let mut model = BTreeSet::new();
    for word in &words {
        prop_assert_eq!(trie.insert(word), model.insert(word.clone()));
    }

    for word in &model {
        prop_assert!(trie.contains(word));
        for end in 0..=word.len() {
            if word.is_char_boundary(end) {
                prop_assert!(trie.starts_with(&word[..end]));
            }
        }
    }

    for index in removals {
        if words.is_empty() {
            break;
        }
        let word = &words[index % words.len()];
        prop_assert_eq!(trie.remove(word), model.remove(word));
        prop_assert!(!trie.contains(word));
        for other in &model {
            prop_assert!(trie.contains(other), "removing {:?} lost {:?}", word, other);
        }
    }

    let mut stored = trie.words();
    stored.sort();
    let expected: Vec<String> = model.into_iter().collect();
    prop_assert_eq!(stored, expected);

    Ok(())
}

/// Test LRU behaviour against a VecDeque recency model (front = MRU)
fn test_lru_model(capacity: usize, ops: Vec<(bool, u8, u16)>) -> Result<(), TestCaseError> {
    let mut cache = LruCache::new(capacity).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let mut model: VecDeque<(u8, u16)> = VecDeque::new();

    for (is_get, key, value) in ops {
        if is_get {
            let position = model.iter().position(|(k, _)| *k == key);
            let expected = position.map(|pos| {
                let entry = model.remove(pos).unwrap();
                model.push_front(entry);
                entry.1
            });
            prop_assert_eq!(cache.get(&key).copied(), expected);
        } else {
            let mut expected_evicted = None;
            if let Some(pos) = model.iter().position(|(k, _)| *k == key) {
                model.remove(pos);
            } else if model.len() == capacity {
                expected_evicted = model.pop_back();
            }
            model.push_front((key, value));
            prop_assert_eq!(cache.put(key, value), expected_evicted);
        }

        prop_assert!(cache.len() <= capacity);
        let order: Vec<(u8, u16)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(u8, u16)> = model.iter().copied().collect();
        prop_assert_eq!(order, expected);
    }

    Ok(())
}

/// Test Dijkstra distances against Bellman-Ford relaxation on the same edges
fn test_dijkstra_model(
    vertices: u8,
    edges: Vec<(u8, u8, u32)>,
    directed: bool,
) -> Result<(), TestCaseError> {
    let mut graph: Graph<u8, u32> = Graph::builder().directed(directed).weighted(true).build();
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for &(a, b, w) in &edges {
        graph.add_weighted_edge(a % vertices, b % vertices, w);
    }

    let n = vertices as usize;
    let mut expected: Vec<Option<u32>> = vec![None; n];
    expected[0] = Some(0);
    for _ in 0..n {
        for a in 0..vertices {
            for b in graph.neighbors(&a) {
                let (Some(base), Some(w)) = (expected[a as usize], graph.weight(&a, b)) else {
                    continue;
                };
                let candidate = base + w;
                if expected[*b as usize].map_or(true, |d| candidate < d) {
                    expected[*b as usize] = Some(candidate);
                }
            }
        }
    }

    let paths = graph.dijkstra(&0);
    prop_assert_eq!(paths.len(), n);
    for v in 0..vertices {
        let info = &paths[&v];
        prop_assert_eq!(info.distance, expected[v as usize], "distance to {}", v);

        // The reconstructed path must cost exactly the reported distance
        if let Some((path, cost)) = graph.shortest_path(&0, &v) {
            prop_assert_eq!(Some(cost), info.distance);
            prop_assert_eq!(path.first(), Some(&0));
            prop_assert_eq!(path.last(), Some(&v));
            let walked: u32 = path
                .windows(2)
                .map(|pair| graph.weight(&pair[0], &pair[1]).unwrap_or(u32::MAX / 4))
                .sum();
            prop_assert_eq!(walked, cost);
        } else {
            prop_assert!(info.distance.is_none());
        }
    }

    Ok(())
}

proptest! {
    // Binary heap tests
    #[test]
    fn test_min_heap_insert_extract_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_insert_extract_invariant::<MinHeap<i32>>(ops, min_of)?;
    }

    #[test]
    fn test_max_heap_insert_extract_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_insert_extract_invariant::<MaxHeap<i32>>(ops, max_of)?;
    }

    #[test]
    fn test_min_heap_extract_order_invariant(values in prop::collection::vec(-100i32..100, 0..100)) {
        let mut expected = values.clone();
        expected.sort();
        test_extract_order_invariant::<MinHeap<i32>>(values, expected)?;
    }

    #[test]
    fn test_max_heap_extract_order_invariant(values in prop::collection::vec(-100i32..100, 0..100)) {
        let mut expected = values.clone();
        expected.sort_by(|a, b| b.cmp(a));
        test_extract_order_invariant::<MaxHeap<i32>>(values, expected)?;
    }

    #[test]
    fn test_heap_buffer_stays_valid(values in prop::collection::vec(any::<i32>(), 0..200), extracts in 0usize..100) {
        let mut heap: MinHeap<i32> = values.into_iter().collect();
        prop_assert!(heap.is_valid());
        for _ in 0..extracts {
            heap.extract();
            prop_assert!(heap.is_valid());
        }
    }

    // Priority queue tests
    #[test]
    fn test_priority_queue_is_stable(items in prop::collection::vec(0u8..5, 0..100), max_first in prop::bool::ANY) {
        let mut queue = PriorityQueue::with_order(!max_first);
        for (index, priority) in items.iter().enumerate() {
            queue.enqueue(index, *priority);
        }

        // A stable sort by priority is the expected dequeue order
        let mut expected: Vec<(usize, u8)> = items.iter().copied().enumerate().collect();
        if max_first {
            expected.sort_by(|a, b| b.1.cmp(&a.1));
        } else {
            expected.sort_by_key(|&(_, priority)| priority);
        }

        let mut drained = Vec::new();
        while let Some(entry) = queue.dequeue_entry() {
            drained.push((entry.value, entry.priority));
        }
        prop_assert_eq!(drained, expected);
    }

    // Tree tests
    #[test]
    fn test_avl_matches_set_model(ops in prop::collection::vec((prop::bool::ANY, -50i16..50), 0..200)) {
        test_avl_model(ops)?;
    }

    #[test]
    fn test_avl_sorted_inserts_stay_balanced(n in 1usize..500) {
        let tree: AvlTree<usize> = (0..n).collect();
        prop_assert!(tree.is_balanced());
        prop_assert_eq!(tree.len(), n);
    }

    #[test]
    fn test_bst_matches_multiset_model(
        inserts in prop::collection::vec(-30i16..30, 0..100),
        removals in prop::collection::vec(-30i16..30, 0..50)
    ) {
        test_bst_model(inserts, removals)?;
    }

    // Disjoint set tests
    #[test]
    fn test_disjoint_set_matches_labelling(
        elements in 1u8..40,
        unions in prop::collection::vec((any::<u8>(), any::<u8>()), 0..60)
    ) {
        test_disjoint_set_model(elements, unions)?;
    }

    // Trie tests
    #[test]
    fn test_trie_round_trip(
        words in prop::collection::vec("[a-c]{0,6}", 0..40),
        removals in prop::collection::vec(any::<usize>(), 0..20)
    ) {
        test_trie_model(words, removals)?;
    }

    // LRU tests
    #[test]
    fn test_lru_matches_recency_model(
        capacity in 1usize..8,
        ops in prop::collection::vec((prop::bool::ANY, 0u8..12, any::<u16>()), 0..150)
    ) {
        test_lru_model(capacity, ops)?;
    }

    // Graph tests
    #[test]
    fn test_dijkstra_matches_relaxation(
        vertices in 1u8..12,
        edges in prop::collection::vec((any::<u8>(), any::<u8>(), 0u32..100), 0..40),
        directed in prop::bool::ANY
    ) {
        test_dijkstra_model(vertices, edges, directed)?;
    }
}
