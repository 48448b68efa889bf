//! `Attributes` - per-node flag set
//!
//! Every node in the arena carries one byte of flags describing how the
//! matcher may treat it. The four flags are independent; only
//! [`ONE_SHOT`](Attributes::ONE_SHOT) is ever cleared once set.
//!
//! # Rendering
//!
//! `Display` lists the active flags in declaration order, joined with `|`:
//!
//! ```
//! use globtrie::Attributes;
//!
//! let attrs = Attributes::GLOB | Attributes::CAN_MATCH;
//! assert_eq!(attrs.to_string(), "glob|can-match");
//! assert_eq!(Attributes::from_bits(0x10).to_string(), "<unknown key: 16>");
//! ```

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Flag set attached to every trie node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes(u8);

impl Attributes {
    /// Node was reached through a wildcard edge.
    pub const GLOB: Self = Self(1 << 0);
    /// Some pattern terminates exactly at this node.
    pub const CAN_MATCH: Self = Self(1 << 1);
    /// At least one direct child is a wildcard node.
    pub const GLOB_CHILD: Self = Self(1 << 2);
    /// Node currently has exactly one child.
    pub const ONE_SHOT: Self = Self(1 << 3);

    /// Every named flag, in rendering order.
    const NAMED: [(Self, &'static str); 4] = [
        (Self::GLOB, "glob"),
        (Self::CAN_MATCH, "can-match"),
        (Self::GLOB_CHILD, "glob-child"),
        (Self::ONE_SHOT, "one-shot"),
    ];

    const KNOWN_BITS: u8 = 0b1111;

    /// The empty flag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap a raw value. Bits outside the named flags are kept so that
    /// rendering can report them.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any flag in `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Set the flags in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the flags in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Set or clear the flags in `other`.
    pub fn set(&mut self, other: Self, value: bool) {
        if value {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }

    fn is_known(self) -> bool {
        self.0 & !Self::KNOWN_BITS == 0
    }
}

impl BitOr for Attributes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Attributes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_known() {
            return write!(f, "<unknown key: {}>", self.0);
        }

        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attributes({self})")
    }
}
