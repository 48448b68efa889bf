//! Candidate matching
//!
//! The walk is a backtracking, byte-at-a-time traversal over `(position,
//! node)` pairs. At every position the wildcard edge is tried before any
//! literal edge, then the literal edge is followed, through the `ONE_SHOT`
//! shortcut when the node has a single child.
//!
//! # Work stack
//!
//! Pending alternatives live on an explicit heap stack, not the call stack,
//! so the number of wildcards in a pattern never limits the thread a query
//! runs on. A wildcard scan is a resumable frame: it stops at the first
//! continuation it finds and leaves itself on the stack to resume one byte
//! later, so the stack only grows with the depth of the current branch. A
//! trie without wildcards never pushes anything.

use crate::{Attributes, GlobTrie, Label, NodeIndex};

/// A pending alternative in the walk.
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Walk from `at` on `node`, wildcard edge first.
    Walk { at: usize, node: NodeIndex },
    /// Take the literal edge for the byte at `at`; the wildcard edge at this
    /// position is already on the stack.
    Literal { at: usize, node: NodeIndex },
    /// Let the wildcard node `glob` swallow bytes from `from` on, looking for
    /// a literal continuation.
    Glob { from: usize, glob: NodeIndex },
}

impl GlobTrie {
    /// Check `candidate` against every inserted pattern.
    ///
    /// Never fails: a candidate either matches some pattern or it doesn't.
    ///
    /// ```
    /// use globtrie::GlobTrie;
    ///
    /// let mut trie = GlobTrie::new(true);
    /// trie.add_path("/A/B");
    /// assert!(trie.is_match("/a/b"));
    /// assert!(trie.is_match("/a/B"));
    /// assert!(!trie.is_match("/a/b/c"));
    /// ```
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.is_match_bytes(candidate.as_bytes())
    }

    /// Byte-slice variant of [`is_match`](Self::is_match).
    #[must_use]
    pub fn is_match_bytes(&self, candidate: &[u8]) -> bool {
        let mut stack = Vec::new();
        let mut next = Some(Frame::Walk {
            at: 0,
            node: NodeIndex::ROOT,
        });

        while let Some(frame) = next.take().or_else(|| stack.pop()) {
            let matched = match frame {
                Frame::Walk { at, node } => self.check_path(candidate, at, node, &mut stack),
                Frame::Literal { at, node } => {
                    let byte = self.fold(candidate[at]);
                    if let Some(child) = self.step(node, byte) {
                        next = Some(Frame::Walk {
                            at: at + 1,
                            node: child,
                        });
                    }
                    false
                }
                Frame::Glob { from, glob } => {
                    self.glob_consume(candidate, from, glob, &mut stack)
                }
            };
            if matched {
                return true;
            }
        }

        false
    }

    /// Follow literal edges from `(start, from)` until the candidate ends,
    /// the branch dead-ends, or a wildcard edge forks the walk. A fork pushes
    /// the literal alternative and then the wildcard, so the wildcard runs
    /// first.
    fn check_path(
        &self,
        s: &[u8],
        start: usize,
        from: NodeIndex,
        stack: &mut Vec<Frame>,
    ) -> bool {
        let mut current = from;

        for (i, &raw) in s.iter().enumerate().skip(start) {
            let node = self.raw(current);

            // The wildcard may swallow zero bytes, so it starts at `i` itself.
            if node.attrs.contains(Attributes::GLOB_CHILD) {
                if let Some(glob) = self.arena.find_child(current, Label::Glob) {
                    stack.push(Frame::Literal {
                        at: i,
                        node: current,
                    });
                    stack.push(Frame::Glob { from: i, glob });
                    return false;
                }
            }

            match self.step(current, self.fold(raw)) {
                Some(next) => current = next,
                None => return false,
            }
        }

        self.accepts_end(current)
    }

    /// Literal edge out of `index` for an already folded `byte`.
    #[inline]
    fn step(&self, index: NodeIndex, byte: u8) -> Option<NodeIndex> {
        let node = self.raw(index);

        if node.attrs.contains(Attributes::ONE_SHOT) {
            if let Some(&only) = node.children.first() {
                // A wildcard-only node has no literal edge.
                return match self.raw(only).label {
                    Label::Byte(b) if b == byte => Some(only),
                    _ => None,
                };
            }
        }

        self.arena.find_child(index, Label::Byte(byte))
    }

    /// Scan from `start` for the first byte that continues past `glob`. On a
    /// hit the scan re-queues itself one byte further, then queues the
    /// continuation on top so it is explored first.
    fn glob_consume(
        &self,
        s: &[u8],
        start: usize,
        glob: NodeIndex,
        stack: &mut Vec<Frame>,
    ) -> bool {
        let node = self.raw(glob);

        // Nothing follows the wildcard: it takes the rest of the candidate.
        if node.attrs.contains(Attributes::CAN_MATCH) {
            return true;
        }

        // Common `.../*/...` shape: skip straight to the one literal that can
        // end the wildcard.
        let only_literal = if node.attrs.contains(Attributes::ONE_SHOT) {
            node.children
                .first()
                .and_then(|&child| match self.raw(child).label {
                    Label::Byte(b) => Some(b),
                    _ => None,
                })
        } else {
            None
        };

        for (i, &raw) in s.iter().enumerate().skip(start) {
            let byte = self.fold(raw);

            if only_literal.is_some_and(|b| b != byte) {
                continue;
            }

            // Children are unique by label, so at most one continues here.
            let hit = node
                .children
                .iter()
                .copied()
                .find(|&child| self.raw(child).label == Label::Byte(byte));

            if let Some(child) = hit {
                stack.push(Frame::Glob { from: i + 1, glob });
                stack.push(Frame::Walk {
                    at: i + 1,
                    node: child,
                });
                return false;
            }
        }

        false
    }

    /// Whether the walk may stop at `index` with the candidate exhausted.
    fn accepts_end(&self, index: NodeIndex) -> bool {
        let node = self.raw(index);
        if node.attrs.intersects(Attributes::GLOB | Attributes::CAN_MATCH) {
            return true;
        }

        // A trailing wildcard may match the empty suffix.
        node.attrs.contains(Attributes::GLOB_CHILD)
            && self
                .arena
                .find_child(index, Label::Glob)
                .is_some_and(|glob| self.raw(glob).attrs.contains(Attributes::CAN_MATCH))
    }
}
