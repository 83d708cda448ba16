//! Behavioral node flags and the flag evaluator
//!
//! Flags are orthogonal to the semantic type: they capture properties a
//! category alone cannot express (keyword-ness, whether a definition carries
//! a body). `EMBODIED` and `DECLARATION_ONLY` are mutually exclusive on a
//! rule; the registry loader rejects rules that set both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Bitset of per-node behavioral flags
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeFlags(u8);

impl NodeFlags {
    pub const NONE: NodeFlags = NodeFlags(0);

    /// Semantic language construct (not bare punctuation or a helper token)
    pub const CONSTRUCT: NodeFlags = NodeFlags(0x01);

    /// Reserved word of the language
    pub const KEYWORD: NodeFlags = NodeFlags(0x02);

    /// Construct carries a body/implementation
    pub const EMBODIED: NodeFlags = NodeFlags(0x04);

    /// Forward declaration / prototype with no body
    pub const DECLARATION_ONLY: NodeFlags = NodeFlags(0x08);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: NodeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 | other.0)
    }

    pub const fn without(self, other: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 & !other.0)
    }

    pub const fn is_construct(self) -> bool {
        self.contains(Self::CONSTRUCT)
    }

    pub const fn is_keyword(self) -> bool {
        self.contains(Self::KEYWORD)
    }

    pub const fn is_embodied(self) -> bool {
        self.contains(Self::EMBODIED)
    }

    pub const fn is_declaration_only(self) -> bool {
        self.contains(Self::DECLARATION_ONLY)
    }
}

impl BitOr for NodeFlags {
    type Output = NodeFlags;

    fn bitor(self, rhs: NodeFlags) -> NodeFlags {
        self.union(rhs)
    }
}

impl fmt::Debug for NodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        if self.is_construct() {
            set.entry(&"CONSTRUCT");
        }
        if self.is_keyword() {
            set.entry(&"KEYWORD");
        }
        if self.is_embodied() {
            set.entry(&"EMBODIED");
        }
        if self.is_declaration_only() {
            set.entry(&"DECLARATION_ONLY");
        }
        set.finish()
    }
}

/// Produce final node flags from a rule's static flags plus what the
/// classifier observed on the concrete node.
///
/// A rule marked `DECLARATION_ONLY` applied to a node that structurally has
/// a body flips to `EMBODIED`. Grammars frequently reuse one production for
/// both a prototype and a defined form (Java `method_declaration` covers
/// interface signatures and bodied methods alike), so the static table
/// cannot always decide this without inspecting the node.
pub fn evaluate(rule_flags: NodeFlags, has_body: bool) -> NodeFlags {
    if has_body && rule_flags.is_declaration_only() {
        rule_flags
            .without(NodeFlags::DECLARATION_ONLY)
            .union(NodeFlags::EMBODIED)
    } else {
        rule_flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_operations() {
        let flags = NodeFlags::CONSTRUCT | NodeFlags::EMBODIED;
        assert!(flags.is_construct());
        assert!(flags.is_embodied());
        assert!(!flags.is_keyword());
        assert_eq!(flags.without(NodeFlags::EMBODIED), NodeFlags::CONSTRUCT);
    }

    #[test]
    fn test_declaration_override() {
        let rule = NodeFlags::CONSTRUCT | NodeFlags::DECLARATION_ONLY;

        // No body: the static flags stand
        let no_body = evaluate(rule, false);
        assert!(no_body.is_declaration_only());
        assert!(!no_body.is_embodied());

        // Body present: declaration-only flips to embodied
        let with_body = evaluate(rule, true);
        assert!(with_body.is_embodied());
        assert!(!with_body.is_declaration_only());
        assert!(with_body.is_construct());
    }

    #[test]
    fn test_embodied_rule_unchanged_by_body() {
        let rule = NodeFlags::CONSTRUCT | NodeFlags::EMBODIED;
        assert_eq!(evaluate(rule, true), rule);
        assert_eq!(evaluate(rule, false), rule);
    }
}
