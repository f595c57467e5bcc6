//! Prefix tree over strings
//!
//! Each node maps a `char` to an owned child and records whether the path
//! from the root to it spells a stored word. The root stands for the empty
//! prefix, so the empty string is a storable word.
//!
//! Removal prunes every node left with no children that does not itself end
//! a word; nodes shared with another stored word, or ending a shorter stored
//! word, are kept.
//!
//! # Complexity
//! `insert`, `contains`, `starts_with` and `remove` run in O(m) for a word of
//! `m` characters. `words` visits every node.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("test");
//! trie.insert("testing");
//!
//! assert!(trie.starts_with("tes"));
//! assert!(trie.remove("test"));
//! assert!(!trie.contains("test"));
//! assert!(trie.contains("testing"));
//! ```

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<char, Node>,
    is_end_of_word: bool,
}

/// A trie of Unicode strings
///
/// Strings are split with `chars()`; no normalization is applied.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    /// Creates an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
    }

    /// Stores `word`; inserting a word twice stores it once
    ///
    /// Returns true if the word was not present before.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        let added = !node.is_end_of_word;
        node.is_end_of_word = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Returns true if `word` was stored
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_end_of_word)
    }

    /// Returns true if any stored word starts with `prefix`
    ///
    /// Only the path has to exist; the empty prefix always matches, even in
    /// an empty trie.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Removes `word`, pruning nodes no other word needs
    ///
    /// Returns false if the word was not stored.
    pub fn remove(&mut self, word: &str) -> bool {
        if !self.contains(word) {
            return false;
        }
        let chars: Vec<char> = word.chars().collect();
        Self::remove_from(&mut self.root, &chars);
        self.len -= 1;
        true
    }

    /// Every stored word, in no particular order
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut prefix = String::new();
        Self::collect(&self.root, &mut prefix, &mut words);
        words
    }

    /// Every stored word starting with `prefix`, in no particular order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node) = self.walk(prefix) {
            let mut buffer = prefix.to_string();
            Self::collect(node, &mut buffer, &mut words);
        }
        words
    }

    /// Follows `path` from the root
    fn walk(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Clears the end flag of the word spelled by `rest` below `node`
    ///
    /// Returns true if `node` is left with no purpose and its parent may drop
    /// the edge to it.
    fn remove_from(node: &mut Node, rest: &[char]) -> bool {
        let Some((&ch, tail)) = rest.split_first() else {
            node.is_end_of_word = false;
            return node.children.is_empty();
        };

        let prune_child = match node.children.get_mut(&ch) {
            Some(child) => Self::remove_from(child, tail),
            None => false,
        };
        if prune_child {
            node.children.remove(&ch);
            return !node.is_end_of_word && node.children.is_empty();
        }
        false
    }

    fn collect(node: &Node, prefix: &mut String, words: &mut Vec<String>) {
        if node.is_end_of_word {
            words.push(prefix.clone());
        }
        for (&ch, child) in &node.children {
            prefix.push(ch);
            Self::collect(child, prefix, words);
            prefix.pop();
        }
    }

    /// Total number of nodes, root included
    #[cfg(test)]
    fn node_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            1 + node.children.values().map(count).sum::<usize>()
        }
        count(&self.root)
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
