//! globtrie - read-optimized wildcard path matching
//!
//! Decides whether a candidate string (typically a URL path) matches any of a
//! set of registered patterns, where `*` in a pattern stands for any run of
//! zero or more bytes. The set is built once and queried many times.
//!
//! # Architecture
//!
//! - [`NodeIndex`] / [`Label`] - nodes live in a flat, append-only arena and
//!   are addressed by index; an edge label is a literal byte or the wildcard
//! - [`Attributes`] - per-node flags that steer the walk (`GLOB`,
//!   `CAN_MATCH`, `GLOB_CHILD`, `ONE_SHOT`)
//! - [`GlobTrie::add_path`] - inserts a pattern byte by byte
//! - [`GlobTrie::is_match`] - iterative backtracking walk; the wildcard edge is tried
//!   first at every position, single-child nodes take a direct-compare path
//! - [`TrieConfig`] - declarative pattern set, validated at load time
//!
//! # Key Design Insights
//!
//! 1. **Patterns are bytes**: matching is byte-wise, ASCII-only case folding.
//!    A wildcard can stop in the middle of a multi-byte UTF-8 sequence; the
//!    literal bytes after it still have to line up exactly.
//!
//! 2. **Build, then query**: `add_path` takes `&mut self`, `is_match` takes
//!    `&self` and keeps its backtracking state in a local work stack, so a
//!    finished trie can be shared across threads without locking. Query depth
//!    never touches the call stack, whatever the pattern.
//!
//! 3. **No invalid state**: [`GlobTrie::new`] is the only constructor, so
//!    insertion cannot fail. Limits live in [`TrieConfig::validate`].
//!
//! # Example
//!
//! ```
//! use globtrie::prelude::*;
//!
//! let mut trie = GlobTrie::new(false);
//! trie.add_path("/a/*/c");
//! trie.add_path("/static/*");
//!
//! assert!(trie.is_match("/a/b/c"));
//! assert!(trie.is_match("/a/b/b/c"));
//! assert!(!trie.is_match("/a/c"));
//! assert!(trie.is_match("/static/"));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod arena;
mod attributes;
mod builder;
mod config;
mod matcher;
mod trie;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use arena::{Label, NodeIndex};
pub use attributes::Attributes;
pub use config::TrieConfig;
pub use trie::{GlobTrie, NodeRef};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use globtrie::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Attributes, GlobError, GlobTrie, Label, NodeIndex, NodeRef, TrieConfig};
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum length in bytes of a single pattern accepted by [`TrieConfig`].
pub const MAX_PATTERN_LENGTH: usize = 8192;

/// Maximum number of patterns accepted by [`TrieConfig`].
///
/// Every pattern byte can cost a node, so this together with
/// [`MAX_PATTERN_LENGTH`] caps the arena a config can produce.
pub const MAX_PATTERNS: usize = 65_536;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from loading and validating a [`TrieConfig`].
///
/// Building a [`GlobTrie`] directly and querying it never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobError {
    /// A pattern exceeds [`MAX_PATTERN_LENGTH`].
    PatternTooLong {
        /// Length of the offending pattern in bytes.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// The config lists more than [`MAX_PATTERNS`] patterns.
    TooManyPatterns {
        /// Number of patterns in the config.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Config deserialization failed.
    InvalidConfig {
        /// The underlying error message.
        source: String,
    },
}

impl std::fmt::Display for GlobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PatternTooLong { len, max } => {
                write!(f, "pattern length is {len}, but maximum allowed is {max}")
            }
            Self::TooManyPatterns { count, max } => {
                write!(
                    f,
                    "config has {count} patterns, but maximum allowed is {max} \
                     (split the pattern set or merge patterns with wildcards)"
                )
            }
            Self::InvalidConfig { source } => {
                write!(f, "invalid config: {source}")
            }
        }
    }
}

impl std::error::Error for GlobError {}
