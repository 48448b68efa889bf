//! Node arena - flat, append-only node storage
//!
//! Nodes live in a single `Vec` and are addressed by [`NodeIndex`]. Nothing
//! is ever freed, relocated or relabelled, so an index handed out once stays
//! valid for the life of the arena.
//!
//! Children are kept in a plain `Vec` and searched linearly. Path patterns
//! are long literal runs with very low fan-out, which makes a scan over a
//! handful of entries cheaper than hashing.

use crate::Attributes;
use std::fmt;

/// Index of a node in the trie's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// The root node, created with the arena.
    pub const ROOT: Self = Self(0);

    /// Position of the node in the arena.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Label of the edge leading into a node.
///
/// The wildcard is its own variant rather than a reserved byte value, so no
/// literal byte (control bytes included) can ever be mistaken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The root; it has no incoming edge.
    Root,
    /// A literal byte.
    Byte(u8),
    /// The wildcard marker (`*` in a pattern).
    Glob,
}

impl Label {
    /// Returns `true` for the wildcard label.
    #[must_use]
    pub const fn is_glob(self) -> bool {
        matches!(self, Self::Glob)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("<root>"),
            Self::Glob => f.write_str("*"),
            Self::Byte(b) if b.is_ascii_graphic() => write!(f, "{}", char::from(*b)),
            Self::Byte(b) => write!(f, "\\x{b:02x}"),
        }
    }
}

/// A single trie node.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) label: Label,
    pub(crate) attrs: Attributes,
    /// Unique by label, in insertion order.
    pub(crate) children: Vec<NodeIndex>,
}

impl Node {
    fn new(label: Label) -> Self {
        Self {
            label,
            attrs: Attributes::empty(),
            children: Vec::new(),
        }
    }
}

/// Append-only storage for trie nodes.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an arena holding only the root.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new(Label::Root)],
        }
    }

    /// Append a fresh node and return its index.
    pub(crate) fn allocate(&mut self, label: Label) -> NodeIndex {
        self.nodes.push(Node::new(label));
        NodeIndex(self.nodes.len() - 1)
    }

    /// Find the child of `node` carrying `label`.
    #[inline]
    pub(crate) fn find_child(&self, node: NodeIndex, label: Label) -> Option<NodeIndex> {
        self.get(node)
            .children
            .iter()
            .copied()
            .find(|&idx| self.get(idx).label == label)
    }

    #[inline]
    pub(crate) fn get(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> &mut Node {
        &mut self.nodes[index.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
