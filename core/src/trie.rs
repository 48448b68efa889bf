//! `GlobTrie` - the matcher type and its read-only node views
//!
//! A `GlobTrie` owns the node arena and the case mode. Patterns go in through
//! [`add_path`](GlobTrie::add_path) (see `builder.rs`), candidates are checked
//! with [`is_match`](GlobTrie::is_match) (see `matcher.rs`).
//!
//! [`GlobTrie::new`] is the only constructor, so a trie is always in a usable
//! state: there is no "unconstructed" value to guard against.

use crate::arena::{Node, NodeArena};
use crate::{Attributes, Label, NodeIndex};
use std::fmt;

/// Wildcard path matcher over a flat byte trie.
///
/// # Example
///
/// ```
/// use globtrie::GlobTrie;
///
/// let mut trie = GlobTrie::new(false);
/// trie.add_path("/static/*");
/// trie.add_path("/api/*/users");
///
/// assert!(trie.is_match("/static/app.js"));
/// assert!(trie.is_match("/api/v2/users"));
/// assert!(!trie.is_match("/api/v2/groups"));
/// ```
#[derive(Clone)]
pub struct GlobTrie {
    pub(crate) arena: NodeArena,
    pub(crate) case_insensitive: bool,
}

impl GlobTrie {
    /// Create an empty trie.
    ///
    /// With `case_insensitive`, ASCII `A`–`Z` are folded to lowercase in both
    /// patterns and candidates.
    #[must_use]
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            arena: NodeArena::new(),
            case_insensitive,
        }
    }

    /// Create a trie and insert every pattern from `patterns`.
    #[must_use]
    pub fn from_patterns<I, S>(case_insensitive: bool, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new(case_insensitive);
        trie.extend(patterns);
        trie
    }

    /// Whether ASCII case is folded.
    #[must_use]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Number of nodes in the arena, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// View of the root node.
    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        self.node(NodeIndex::ROOT)
    }

    /// View of the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this trie.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> NodeRef<'_> {
        NodeRef { trie: self, index }
    }

    /// Walk the trie along a pattern prefix, using the same folding and
    /// wildcard handling as insertion. Returns `None` if no pattern starts
    /// with `prefix`.
    ///
    /// ```
    /// use globtrie::{Attributes, GlobTrie};
    ///
    /// let trie = GlobTrie::from_patterns(false, ["/a/b", "/a/c"]);
    /// let fork = trie.find_node("/a/").unwrap();
    /// assert_eq!(fork.children().count(), 2);
    /// assert!(!fork.attributes().contains(Attributes::ONE_SHOT));
    /// ```
    #[must_use]
    pub fn find_node(&self, prefix: &str) -> Option<NodeRef<'_>> {
        let mut current = NodeIndex::ROOT;
        for &byte in prefix.as_bytes() {
            let label = self.label_for(byte);
            if label.is_glob() && self.arena.get(current).label.is_glob() {
                continue;
            }
            current = self.arena.find_child(current, label)?;
        }
        Some(self.node(current))
    }

    /// Render the whole trie, one node per line, indented by depth.
    ///
    /// ```text
    /// <root> #0 [one-shot]
    ///   / #1 [glob-child|one-shot]
    ///     * #2 [glob|can-match]
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        TreeDump(self).to_string()
    }

    #[inline]
    pub(crate) fn fold(&self, byte: u8) -> u8 {
        if self.case_insensitive {
            byte.to_ascii_lowercase()
        } else {
            byte
        }
    }

    #[inline]
    pub(crate) fn label_for(&self, byte: u8) -> Label {
        match self.fold(byte) {
            b'*' => Label::Glob,
            b => Label::Byte(b),
        }
    }

    #[inline]
    pub(crate) fn raw(&self, index: NodeIndex) -> &Node {
        self.arena.get(index)
    }
}

impl Default for GlobTrie {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for GlobTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobTrie")
            .field("node_count", &self.arena.len())
            .field("case_insensitive", &self.case_insensitive)
            .finish()
    }
}

impl<S: AsRef<str>> Extend<S> for GlobTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, patterns: I) {
        for pattern in patterns {
            self.add_path(pattern.as_ref());
        }
    }
}

/// Builds a case-sensitive trie.
impl<S: AsRef<str>> FromIterator<S> for GlobTrie {
    fn from_iter<I: IntoIterator<Item = S>>(patterns: I) -> Self {
        Self::from_patterns(false, patterns)
    }
}

/// Depth-first rendering behind [`GlobTrie::dump`].
struct TreeDump<'a>(&'a GlobTrie);

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(NodeIndex::ROOT, 0usize)];

        while let Some((index, depth)) = stack.pop() {
            let node = self.0.arena.get(index);
            writeln!(
                f,
                "{:indent$}{} {} [{}]",
                "",
                node.label,
                index,
                node.attrs,
                indent = depth * 2
            )?;
            stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }

        Ok(())
    }
}

/// Read-only view of one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a GlobTrie,
    index: NodeIndex,
}

impl<'a> NodeRef<'a> {
    /// Index of this node.
    #[must_use]
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Label of the incoming edge.
    #[must_use]
    pub fn label(&self) -> Label {
        self.trie.raw(self.index).label
    }

    /// Current flag set.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        self.trie.raw(self.index).attrs
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let trie = self.trie;
        trie.raw(self.index)
            .children
            .iter()
            .map(move |&index| NodeRef { trie, index })
    }

    /// Child reached by literal `byte` (after case folding).
    #[must_use]
    pub fn child(&self, byte: u8) -> Option<NodeRef<'a>> {
        let label = Label::Byte(self.trie.fold(byte));
        self.lookup(label)
    }

    /// The wildcard child, if any.
    #[must_use]
    pub fn glob_child(&self) -> Option<NodeRef<'a>> {
        self.lookup(Label::Glob)
    }

    fn lookup(&self, label: Label) -> Option<NodeRef<'a>> {
        self.trie
            .arena
            .find_child(self.index, label)
            .map(|index| NodeRef {
                trie: self.trie,
                index,
            })
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.trie.raw(self.index);
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("label", &node.label)
            .field("attributes", &node.attrs)
            .field("children", &node.children.len())
            .finish()
    }
}
