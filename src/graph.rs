//! Adjacency-list graph with traversal, shortest-path and cycle detection
//!
//! A [`Graph`] is either directed or undirected and either weighted or
//! unweighted; both choices are fixed when it is built. Undirected graphs
//! mirror every arc (and its weight) so that each edge is stored once per
//! endpoint. Unweighted graphs treat every edge as weight [`Weight::ONE`].
//!
//! Vertices and neighbor lists keep insertion order, which makes every
//! traversal deterministic.
//!
//! # Algorithms
//!
//! | Operation              | Complexity |
//! |------------------------|------------|
//! | `breadth_first_search` | O(V + E)   |
//! | `depth_first_search`   | O(V + E)   |
//! | `dijkstra`             | O(V² + E)  |
//! | `has_cycle`            | O(V + E)   |
//! | `remove_vertex`        | O(V + E)   |
//!
//! `dijkstra` selects the next vertex by a linear scan over the unvisited
//! ones rather than through a heap. Weights must be non-negative; this is not
//! checked. A path whose cost overflows the weight type is treated as
//! unusable.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::graph::Graph;
//!
//! let mut graph = Graph::builder().weighted(true).build();
//! graph.add_weighted_edge('A', 'B', 5u32);
//! graph.add_weighted_edge('A', 'C', 10);
//! graph.add_weighted_edge('B', 'D', 3);
//! graph.add_weighted_edge('C', 'E', 7);
//! graph.add_weighted_edge('D', 'E', 2);
//!
//! let (path, cost) = graph.shortest_path(&'A', &'E').unwrap();
//! assert_eq!(cost, 10);
//! assert_eq!(path, vec!['A', 'B', 'D', 'E']);
//! ```

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Add;

/// Trait for types usable as edge weights and path costs.
///
/// Requires ordering and addition, plus the additive identity (`ZERO`, the
/// distance from a vertex to itself) and the implicit weight of an edge in an
/// unweighted graph (`ONE`).
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + fmt::Debug {
    /// Additive identity
    const ZERO: Self;
    /// Weight of an edge added without an explicit weight
    const ONE: Self;

    /// Sum of two weights, `None` if it does not fit in `Self`
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_weight {
    (int => $($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
    (float => $($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                // Overflow saturates to infinity
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_weight!(int => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_weight!(float => f32, f64);

type NeighborMap<V, W> = IndexMap<V, W, FxBuildHasher>;

/// Shortest-path record for one vertex
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo<V, W> {
    /// Total weight of the cheapest path from the start, `None` if unreachable
    pub distance: Option<W>,
    /// Predecessor on that path, `None` for the start and unreachable vertices
    pub previous: Option<V>,
}

impl<V, W> PathInfo<V, W> {
    /// Returns true if the vertex can be reached from the start
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Result of [`Graph::dijkstra`], in vertex insertion order
pub type ShortestPaths<V, W> = IndexMap<V, PathInfo<V, W>, FxBuildHasher>;

/// Builder for graph configuration.
///
/// Defaults to an undirected, unweighted graph.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V, W = u64> {
    directed: bool,
    weighted: bool,
    _marker: PhantomData<(V, W)>,
}

impl<V, W> GraphBuilder<V, W> {
    /// Creates a builder for an undirected, unweighted graph
    pub fn new() -> Self {
        Self {
            directed: false,
            weighted: false,
            _marker: PhantomData,
        }
    }

    /// Sets whether edges are one-way
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets whether edges carry their own weight
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Builds an empty graph with this configuration
    pub fn build(self) -> Graph<V, W> {
        Graph {
            adjacency: IndexMap::default(),
            directed: self.directed,
            weighted: self.weighted,
        }
    }
}

impl<V, W> Default for GraphBuilder<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// An adjacency-list graph
///
/// Each vertex maps its neighbors to the weight of the connecting arc.
#[derive(Debug, Clone)]
pub struct Graph<V, W = u64> {
    adjacency: IndexMap<V, NeighborMap<V, W>, FxBuildHasher>,
    directed: bool,
    weighted: bool,
}

impl<V, W> Graph<V, W> {
    /// Starts configuring a new graph
    pub fn builder() -> GraphBuilder<V, W> {
        GraphBuilder::new()
    }
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    /// Creates an empty undirected, unweighted graph
    pub fn new() -> Self {
        GraphBuilder::new().build()
    }

    /// Creates an empty directed, unweighted graph
    pub fn new_directed() -> Self {
        GraphBuilder::new().directed(true).build()
    }

    /// Returns true if edges are one-way
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true if edges carry their own weight
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges; an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        let arcs: usize = self.adjacency.values().map(IndexMap::len).sum();
        if self.directed {
            return arcs;
        }
        let loops = self
            .adjacency
            .iter()
            .filter(|(vertex, neighbors)| neighbors.contains_key(*vertex))
            .count();
        (arcs + loops) / 2
    }

    /// Adds a vertex with no edges
    ///
    /// Returns false if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, IndexMap::default());
        true
    }

    /// Returns true if `vertex` exists
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Adds an edge of weight [`Weight::ONE`], creating missing vertices
    pub fn add_edge(&mut self, source: V, destination: V) {
        self.add_weighted_edge(source, destination, W::ONE);
    }

    /// Adds an edge with an explicit weight, creating missing vertices
    ///
    /// Unweighted graphs ignore `weight`. Adding an existing edge again
    /// replaces its weight.
    pub fn add_weighted_edge(&mut self, source: V, destination: V, weight: W) {
        let weight = if self.weighted { weight } else { W::ONE };
        self.add_vertex(source.clone());
        self.add_vertex(destination.clone());

        if let Some(neighbors) = self.adjacency.get_mut(&source) {
            neighbors.insert(destination.clone(), weight);
        }
        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(&destination) {
                neighbors.insert(source, weight);
            }
        }
    }

    /// Removes the edge from `source` to `destination`
    ///
    /// Undirected graphs also drop the mirrored arc. Returns false if there
    /// was no such edge.
    pub fn remove_edge(&mut self, source: &V, destination: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(source)
            .and_then(|neighbors| neighbors.shift_remove(destination))
            .is_some();
        if removed && !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(destination) {
                neighbors.shift_remove(source);
            }
        }
        removed
    }

    /// Returns true if there is an arc from `source` to `destination`
    pub fn has_edge(&self, source: &V, destination: &V) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|neighbors| neighbors.contains_key(destination))
    }

    /// Weight of the arc from `source` to `destination`
    ///
    /// Unweighted graphs report [`Weight::ONE`] for every existing arc.
    pub fn weight(&self, source: &V, destination: &V) -> Option<W> {
        self.adjacency.get(source)?.get(destination).copied()
    }

    /// Removes a vertex together with all of its incoming and outgoing arcs
    ///
    /// Returns false if the vertex did not exist.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.shift_remove(vertex).is_none() {
            return false;
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(vertex);
        }
        true
    }

    /// Out-neighbors of `vertex` in insertion order; empty if unknown
    pub fn neighbors(&self, vertex: &V) -> Vec<&V> {
        self.adjacency
            .get(vertex)
            .map(|neighbors| neighbors.keys().collect())
            .unwrap_or_default()
    }

    /// Every vertex in insertion order
    pub fn vertices(&self) -> Vec<&V> {
        self.adjacency.keys().collect()
    }

    /// Level-order traversal from `start`; empty if `start` is unknown
    pub fn breadth_first_search(&self, start: &V) -> Vec<&V> {
        let Some(start) = self.adjacency.get_index_of(start) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.adjacency.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let Some((vertex, neighbors)) = self.adjacency.get_index(current) else {
                continue;
            };
            order.push(vertex);
            for neighbor in neighbors.keys() {
                if let Some(next) = self.adjacency.get_index_of(neighbor) {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        order
    }

    /// Depth-first pre-order traversal from `start`; empty if `start` is unknown
    pub fn depth_first_search(&self, start: &V) -> Vec<&V> {
        let Some(start) = self.adjacency.get_index_of(start) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.adjacency.len()];
        let mut order = Vec::new();
        self.dfs_visit(start, &mut visited, &mut order);
        order
    }

    fn dfs_visit<'a>(&'a self, index: usize, visited: &mut [bool], order: &mut Vec<&'a V>) {
        let Some((vertex, neighbors)) = self.adjacency.get_index(index) else {
            return;
        };
        visited[index] = true;
        order.push(vertex);
        for neighbor in neighbors.keys() {
            if let Some(next) = self.adjacency.get_index_of(neighbor) {
                if !visited[next] {
                    self.dfs_visit(next, visited, order);
                }
            }
        }
    }

    /// Single-source shortest paths from `start`
    ///
    /// Every vertex appears in the result; unreachable ones have no distance
    /// and no predecessor. Returns an empty map if `start` is unknown.
    pub fn dijkstra(&self, start: &V) -> ShortestPaths<V, W> {
        let Some(start) = self.adjacency.get_index_of(start) else {
            return ShortestPaths::default();
        };

        let count = self.adjacency.len();
        let mut distance: Vec<Option<W>> = vec![None; count];
        let mut previous: Vec<Option<usize>> = vec![None; count];
        let mut visited = vec![false; count];
        distance[start] = Some(W::ZERO);

        while let Some(current) = Self::closest_unvisited(&distance, &visited) {
            visited[current] = true;
            let (Some(base), Some((_, neighbors))) =
                (distance[current], self.adjacency.get_index(current))
            else {
                continue;
            };

            for (neighbor, &weight) in neighbors {
                let Some(next) = self.adjacency.get_index_of(neighbor) else {
                    continue;
                };
                if visited[next] {
                    continue;
                }
                // A sum past the weight type's range is never an improvement
                let Some(candidate) = base.checked_add(weight) else {
                    continue;
                };
                if distance[next].map_or(true, |known| candidate < known) {
                    distance[next] = Some(candidate);
                    previous[next] = Some(current);
                }
            }
        }

        self.adjacency
            .keys()
            .enumerate()
            .map(|(index, vertex)| {
                let info = PathInfo {
                    distance: distance[index],
                    previous: previous[index]
                        .and_then(|p| self.adjacency.get_index(p))
                        .map(|(v, _)| v.clone()),
                };
                (vertex.clone(), info)
            })
            .collect()
    }

    /// Linear scan for the unvisited vertex with the smallest finite distance
    fn closest_unvisited(distance: &[Option<W>], visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, W)> = None;
        for (index, dist) in distance.iter().enumerate() {
            if visited[index] {
                continue;
            }
            if let Some(d) = *dist {
                if best.map_or(true, |(_, best_d)| d < best_d) {
                    best = Some((index, d));
                }
            }
        }
        best.map(|(index, _)| index)
    }

    /// Cheapest path from `start` to `target` and its total weight
    ///
    /// Returns `None` if either vertex is unknown or `target` is unreachable.
    pub fn shortest_path(&self, start: &V, target: &V) -> Option<(Vec<V>, W)> {
        let paths = self.dijkstra(start);
        let cost = paths.get(target)?.distance?;

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = paths.get(current).and_then(|info| info.previous.as_ref()) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some((path, cost))
    }

    /// Returns true if a depth-first search finds an arc back into the
    /// current recursion stack
    ///
    /// The check is the directed one and is applied to undirected graphs as
    /// well. There every edge is stored as a pair of opposite arcs, so any
    /// edge between two distinct vertices is reported as a cycle.
    pub fn has_cycle(&self) -> bool {
        let count = self.adjacency.len();
        let mut visited = vec![false; count];
        let mut on_stack = vec![false; count];

        (0..count).any(|index| !visited[index] && self.cycle_from(index, &mut visited, &mut on_stack))
    }

    fn cycle_from(&self, index: usize, visited: &mut [bool], on_stack: &mut [bool]) -> bool {
        visited[index] = true;
        on_stack[index] = true;

        if let Some((_, neighbors)) = self.adjacency.get_index(index) {
            for neighbor in neighbors.keys() {
                let Some(next) = self.adjacency.get_index_of(neighbor) else {
                    continue;
                };
                if on_stack[next] {
                    return true;
                }
                if !visited[next] && self.cycle_from(next, visited, on_stack) {
                    return true;
                }
            }
        }

        on_stack[index] = false;
        false
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}
