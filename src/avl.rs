//! AVL tree: a height-balanced binary search tree
//!
//! Every node caches the height of its subtree (a leaf has height 1, an
//! absent child counts as 0). After each insert or remove the heights along
//! the modified path are recomputed bottom-up, and any node whose balance
//! factor `height(left) - height(right)` leaves `[-1, 1]` is repaired with one
//! of four rotation cases:
//!
//! | Case        | Shape                              | Repair                          |
//! |-------------|------------------------------------|---------------------------------|
//! | Left-Left   | left-heavy, left child not right-heavy   | rotate right                 |
//! | Left-Right  | left-heavy, left child right-heavy       | rotate child left, then right |
//! | Right-Right | right-heavy, right child not left-heavy  | rotate left                  |
//! | Right-Left  | right-heavy, right child left-heavy      | rotate child right, then left |
//!
//! The "not right-heavy" / "not left-heavy" thresholds (`>= 0` / `<= 0`) let
//! the same repair serve removals, where the taller child can be perfectly
//! balanced. On insertion the taller child is never balanced, so the case is
//! exactly the side the new value descended into.
//!
//! Unlike [`BinarySearchTree`](crate::bst::BinarySearchTree), inserting a
//! value equal to one already stored is a no-op: the new value is dropped and
//! the stored one kept.
//!
//! # Time Complexity
//!
//! `insert`, `remove` and `contains` are O(log n); height never exceeds
//! roughly `1.44 log2(n + 2)`.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::avl::AvlTree;
//!
//! let mut tree: AvlTree<i32> = AvlTree::new();
//! tree.insert(30);
//! tree.insert(20);
//! tree.insert(10); // Left-Left case: single right rotation
//!
//! assert_eq!(tree.in_order(), vec![&10, &20, &30]);
//! assert_eq!(tree.pre_order(), vec![&20, &10, &30]);
//! assert!(tree.is_balanced());
//! ```

use crate::comparator::{Comparator, Natural};
use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    height: i32,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

#[inline]
fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Rotates `node` down to the right; its left child takes its place
///
/// ```text
///       y            x
///      / \          / \
///     x   C  ==>   A   y
///    / \              / \
///   A   B            B   C
/// ```
fn rotate_right<T>(mut y: Box<Node<T>>) -> Box<Node<T>> {
    match y.left.take() {
        Some(mut x) => {
            y.left = x.right.take();
            y.update_height();
            x.right = Some(y);
            x.update_height();
            x
        }
        // No left child: nothing to rotate
        None => y,
    }
}

/// Rotates `node` down to the left; its right child takes its place
fn rotate_left<T>(mut x: Box<Node<T>>) -> Box<Node<T>> {
    match x.right.take() {
        Some(mut y) => {
            x.right = y.left.take();
            x.update_height();
            y.left = Some(x);
            y.update_height();
            y
        }
        None => x,
    }
}

/// Restores the AVL invariant at `node`, assuming both subtrees satisfy it
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        let left_balance = node.left.as_ref().map_or(0, |left| left.balance_factor());
        if left_balance < 0 {
            // Left-Right
            node.left = node.left.take().map(rotate_left);
        }
        let node = rotate_right(node);
        debug_assert!(node.balance_factor().abs() <= 1);
        return node;
    }

    if balance < -1 {
        let right_balance = node.right.as_ref().map_or(0, |right| right.balance_factor());
        if right_balance > 0 {
            // Right-Left
            node.right = node.right.take().map(rotate_right);
        }
        let node = rotate_left(node);
        debug_assert!(node.balance_factor().abs() <= 1);
        return node;
    }

    node
}

/// A self-balancing binary search tree ordered by a comparator
#[derive(Debug, Clone)]
pub struct AvlTree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T, C: Comparator<T> + Default> AvlTree<T, C> {
    /// Creates an empty tree using the comparator's default value
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T>> AvlTree<T, C> {
    /// Creates an empty tree ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        AvlTree {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns true if the tree holds no values
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Height of the root (0 when empty)
    pub fn height(&self) -> usize {
        height(&self.root) as usize
    }

    /// Removes every value
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts a value, rebalancing on the way back up
    ///
    /// Returns false if an equal value was already present; the tree is
    /// unchanged in that case.
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        let root = self.root.take();
        self.root = Some(Self::insert_node(root, value, &self.cmp, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the value comparing equal to `value`
    ///
    /// Returns false if no such value exists.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut removed = false;
        let root = self.root.take();
        self.root = Self::remove_node(root, value, &self.cmp, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns true if a value comparing equal to `value` is stored
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the stored value comparing equal to `value`
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.cmp.compare(value, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Smallest value under the comparator
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Largest value under the comparator
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Values in ascending comparator order
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        Self::walk(&self.root, &mut out, Order::In);
        out
    }

    /// Values in node-left-right order
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        Self::walk(&self.root, &mut out, Order::Pre);
        out
    }

    /// Values in left-right-node order
    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        Self::walk(&self.root, &mut out, Order::Post);
        out
    }

    /// Checks the AVL invariant for every node
    ///
    /// Verifies that cached heights match the real subtree heights and that
    /// no balance factor leaves `[-1, 1]`.
    pub fn is_balanced(&self) -> bool {
        Self::checked_height(&self.root).is_some()
    }

    fn checked_height(link: &Link<T>) -> Option<i32> {
        let Some(node) = link else {
            return Some(0);
        };
        let left = Self::checked_height(&node.left)?;
        let right = Self::checked_height(&node.right)?;
        let expected = 1 + left.max(right);
        ((left - right).abs() <= 1 && node.height == expected).then_some(expected)
    }

    fn insert_node(link: Link<T>, value: T, cmp: &C, inserted: &mut bool) -> Box<Node<T>> {
        let Some(mut node) = link else {
            *inserted = true;
            return Node::leaf(value);
        };

        match cmp.compare(&value, &node.value) {
            Ordering::Less => {
                node.left = Some(Self::insert_node(node.left.take(), value, cmp, inserted));
            }
            Ordering::Greater => {
                node.right = Some(Self::insert_node(node.right.take(), value, cmp, inserted));
            }
            // Duplicate: keep the stored value
            Ordering::Equal => return node,
        }

        rebalance(node)
    }

    fn remove_node(link: Link<T>, value: &T, cmp: &C, removed: &mut bool) -> Link<T> {
        let mut node = link?;

        match cmp.compare(value, &node.value) {
            Ordering::Less => {
                node.left = Self::remove_node(node.left.take(), value, cmp, removed);
            }
            Ordering::Greater => {
                node.right = Self::remove_node(node.right.take(), value, cmp, removed);
            }
            Ordering::Equal => {
                *removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, None) => return None,
                    (Some(child), None) | (None, Some(child)) => return Some(child),
                    (Some(left), Some(right)) => {
                        let (right, successor) = Self::take_min(right);
                        node.value = successor;
                        node.left = Some(left);
                        node.right = right;
                    }
                }
            }
        }

        Some(rebalance(node))
    }

    /// Detaches the leftmost node of a subtree, rebalancing the remainder
    fn take_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (right, value)
            }
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(rebalance(node)), min)
            }
        }
    }

    fn walk<'a>(link: &'a Link<T>, out: &mut Vec<&'a T>, order: Order) {
        if let Some(node) = link {
            if order == Order::Pre {
                out.push(&node.value);
            }
            Self::walk(&node.left, out, order);
            if order == Order::In {
                out.push(&node.value);
            }
            Self::walk(&node.right, out, order);
            if order == Order::Post {
                out.push(&node.value);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Pre,
    In,
    Post,
}

impl<T, C: Comparator<T> + Default> Default for AvlTree<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for AvlTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
