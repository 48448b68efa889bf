//! Pattern insertion
//!
//! Patterns are inserted one byte at a time from the root. Each byte either
//! follows an existing edge or allocates a new node; the node being left has
//! its `ONE_SHOT` hint recomputed on every step, since a later pattern can
//! give it a sibling edge.

use crate::{Attributes, GlobTrie, NodeIndex};

impl GlobTrie {
    /// Insert a pattern.
    ///
    /// `*` matches any run of zero or more bytes; every other byte is a
    /// literal, including bytes outside the usual URL path alphabet. An empty
    /// pattern matches only the empty candidate.
    ///
    /// A run of consecutive `*` is one wildcard.
    ///
    /// Inserting the same pattern twice is a no-op the second time, apart from
    /// re-asserting flags that are already set.
    ///
    /// ```
    /// use globtrie::GlobTrie;
    ///
    /// let mut trie = GlobTrie::new(false);
    /// trie.add_path("/a/*/c");
    /// assert!(trie.is_match("/a/b/c"));
    /// assert!(trie.is_match("/a/b/b/c"));
    /// assert!(!trie.is_match("/a/c"));
    /// ```
    pub fn add_path(&mut self, pattern: &str) {
        let before = self.arena.len();
        let mut current = NodeIndex::ROOT;

        for &byte in pattern.as_bytes() {
            let label = self.label_for(byte);

            if label.is_glob() && self.arena.get(current).label.is_glob() {
                continue;
            }

            let next = match self.arena.find_child(current, label) {
                Some(child) => child,
                None => {
                    let child = self.arena.allocate(label);
                    self.arena.get_mut(current).children.push(child);
                    child
                }
            };

            let node = self.arena.get_mut(current);
            let single = node.children.len() == 1;
            node.attrs.set(Attributes::ONE_SHOT, single);

            if label.is_glob() {
                node.attrs.insert(Attributes::GLOB_CHILD);
                self.arena.get_mut(next).attrs.insert(Attributes::GLOB);
            }

            current = next;
        }

        self.arena
            .get_mut(current)
            .attrs
            .insert(Attributes::CAN_MATCH);

        tracing::trace!(
            pattern,
            allocated = self.arena.len() - before,
            "inserted pattern"
        );
    }
}
