//! Unbalanced binary search tree
//!
//! A plain BST ordered by a [`Comparator`]. Values comparing less than a node
//! go left; values comparing greater *or equal* go right, so duplicates are
//! kept and land in the right subtree.
//!
//! Nothing rebalances the tree: a strictly increasing insert sequence builds a
//! right-leaning chain and every operation degrades to O(n). Use
//! [`AvlTree`](crate::avl::AvlTree) when the input order is not under control.
//!
//! Traversals materialize a `Vec` of references rather than returning a lazy
//! iterator.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::bst::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
//! for value in [50, 30, 70, 20, 40] {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.contains(&40));
//! assert_eq!(tree.in_order(), vec![&20, &30, &40, &50, &70]);
//! assert_eq!(tree.pre_order(), vec![&50, &30, &20, &40, &70]);
//!
//! tree.remove(&30);
//! assert_eq!(tree.in_order(), vec![&20, &40, &50, &70]);
//! ```

use crate::comparator::{Comparator, Natural};
use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary search tree without rebalancing
#[derive(Debug, Clone)]
pub struct BinarySearchTree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T, C: Comparator<T> + Default> BinarySearchTree<T, C> {
    /// Creates an empty tree using the comparator's default value
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Creates an empty tree ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        BinarySearchTree {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns true if the tree holds no values
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of stored values, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        Self::height_of(&self.root)
    }

    /// Removes every value
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts a value; equal values go to the right subtree
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match self.cmp.compare(&value, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Returns true if a value comparing equal to `value` is stored
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the stored value comparing equal to `value`
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut current = &self.root;
        while let Some(node) = current {
            match self.cmp.compare(value, &node.value) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Removes one value comparing equal to `value`
    ///
    /// Returns false (and leaves the tree untouched) if no such value exists.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = Self::remove_node(&mut self.root, value, &self.cmp);
        if removed {
            self.len -= 1;
        }
        removed
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

    /// Left subtree, node, right subtree
    pub fn in_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        Self::in_order_traverse(&self.root, &mut result);
        result
    }

    /// Node, left subtree, right subtree
    pub fn pre_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        Self::pre_order_traverse(&self.root, &mut result);
        result
    }

    /// Left subtree, right subtree, node
    pub fn post_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        Self::post_order_traverse(&self.root, &mut result);
        result
    }

    fn remove_node(link: &mut Link<T>, value: &T, cmp: &C) -> bool {
        let Some(node) = link else {
            return false;
        };
        match cmp.compare(value, &node.value) {
            Ordering::Less => Self::remove_node(&mut node.left, value, cmp),
            Ordering::Greater => Self::remove_node(&mut node.right, value, cmp),
            Ordering::Equal => {
                match (node.left.take(), node.right.take()) {
                    (None, None) => *link = None,
                    (Some(child), None) | (None, Some(child)) => *link = Some(child),
                    (Some(left), Some(right)) => {
                        // Successor is the leftmost node of the right subtree
                        let (right, successor) = Self::take_min(right);
                        node.value = successor;
                        node.left = Some(left);
                        node.right = right;
                    }
                }
                true
            }
        }
    }

    /// Detaches the leftmost node, returning the remaining subtree and its value
    fn take_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (right, value)
            }
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(node), min)
            }
        }
    }

    fn height_of(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(node) => 1 + Self::height_of(&node.left).max(Self::height_of(&node.right)),
        }
    }

    fn in_order_traverse<'a>(link: &'a Link<T>, result: &mut Vec<&'a T>) {
        if let Some(node) = link {
            Self::in_order_traverse(&node.left, result);
            result.push(&node.value);
            Self::in_order_traverse(&node.right, result);
        }
    }

    fn pre_order_traverse<'a>(link: &'a Link<T>, result: &mut Vec<&'a T>) {
        if let Some(node) = link {
            result.push(&node.value);
            Self::pre_order_traverse(&node.left, result);
            Self::pre_order_traverse(&node.right, result);
        }
    }

    fn post_order_traverse<'a>(link: &'a Link<T>, result: &mut Vec<&'a T>) {
        if let Some(node) = link {
            Self::post_order_traverse(&node.left, result);
            Self::post_order_traverse(&node.right, result);
            result.push(&node.value);
        }
    }
}

impl<T, C: Comparator<T> + Default> Default for BinarySearchTree<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinarySearchTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinarySearchTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
