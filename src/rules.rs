//! Classification rules: the per-raw-type mapping unit
//!
//! A `NodeTypeRule` binds one raw grammar node type to a semantic type, a
//! name extraction strategy, an optional rich-context strategy, and flags.
//! Raw types whose meaning depends on their surroundings carry a
//! `ContextPredicate`; the registry keeps those ordered most-specific-first
//! ahead of the unconditional fallback.

use crate::flags::NodeFlags;
use crate::semantic::SemanticType;

/// How to pull a human-meaningful name out of a node's local tree context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// No name; punctuation, operators, structural nodes
    None,
    /// The node's own source text, verbatim (atomic tokens)
    NodeText,
    /// First direct child registered as an identifier-like leaf
    FindIdentifier,
    /// Textual target of an invocation (plain call, `receiver.method`,
    /// constructor, macro)
    FindCallTarget,
    /// Left-hand identifier of the enclosing assignment/declarator, for
    /// anonymous constructs bound to a name; `None` when not in assignment
    /// position
    FindAssignmentTarget,
    /// Accessed member name of a field/property access shape
    FindProperty,
    /// Named per-language routine registered with the rule table
    Custom(&'static str),
}

/// Structured payload shapes the rich context assembler can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeStrategy {
    /// Name + ordered parameters + return type + modifiers
    FunctionSignature,
    /// Name + base types + method names
    ClassSummary,
    /// Name + type annotation + initializer
    VariableBinding,
}

/// Structural context of a node under classification
///
/// Built by the classifier for every node before rule lookup; predicates
/// match against it, extraction strategies may consult it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextSnapshot<'a> {
    /// Raw type of the parent node, `None` at the root
    pub parent_kind: Option<&'a str>,
    /// Position of this node among the parent's children
    pub child_index: usize,
    /// Union of the evaluated flags of all ancestors
    pub ancestor_flags: NodeFlags,
}

/// Disambiguates raw types whose meaning is position-dependent
///
/// Evaluated most-specific-first; the first satisfied predicate wins and an
/// unconditional rule (no predicate) is the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextPredicate {
    /// Parent raw type equals the given kind
    ParentIs(&'static str),
    /// Parent raw type is one of the given kinds
    ParentIn(&'static [&'static str]),
    /// This node is the Nth child of its parent
    ChildIndexIs(usize),
    /// Parent kind and child position both match
    ParentIsAndChildIndex {
        parent: &'static str,
        index: usize,
    },
    /// Some ancestor's evaluated flags include the given flag
    AncestorHasFlag(NodeFlags),
}

impl ContextPredicate {
    /// Rank used to order conditional rules; higher matches first
    pub fn specificity(&self) -> u8 {
        match self {
            Self::ParentIsAndChildIndex { .. } => 3,
            Self::ParentIs(_) => 2,
            Self::ParentIn(_) => 2,
            Self::ChildIndexIs(_) => 1,
            Self::AncestorHasFlag(_) => 1,
        }
    }

    pub fn matches(&self, snapshot: &ContextSnapshot<'_>) -> bool {
        match self {
            Self::ParentIs(kind) => snapshot.parent_kind == Some(kind),
            Self::ParentIn(kinds) => snapshot
                .parent_kind
                .map(|parent| kinds.contains(&parent))
                .unwrap_or(false),
            Self::ChildIndexIs(index) => snapshot.child_index == *index,
            Self::ParentIsAndChildIndex { parent, index } => {
                snapshot.parent_kind == Some(parent) && snapshot.child_index == *index
            }
            Self::AncestorHasFlag(flag) => snapshot.ancestor_flags.contains(*flag),
        }
    }
}

/// One classification rule for a raw grammar node type
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTypeRule {
    pub raw_type: String,
    pub context: Option<ContextPredicate>,
    pub semantic_type: SemanticType,
    pub name_extraction: ExtractionStrategy,
    pub native_extraction: Option<NativeStrategy>,
    pub flags: NodeFlags,
}

impl NodeTypeRule {
    pub fn new(
        raw_type: impl Into<String>,
        semantic_type: SemanticType,
        name_extraction: ExtractionStrategy,
    ) -> Self {
        Self {
            raw_type: raw_type.into(),
            context: None,
            semantic_type,
            name_extraction,
            native_extraction: None,
            flags: NodeFlags::NONE,
        }
    }

    /// Attach a context predicate, making this a conditional rule
    pub fn when(mut self, context: ContextPredicate) -> Self {
        self.context = Some(context);
        self
    }

    /// Declare a rich-context payload for this rule
    pub fn native(mut self, strategy: NativeStrategy) -> Self {
        self.native_extraction = Some(strategy);
        self
    }

    pub fn flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Shorthand: semantic construct with a body
    pub fn embodied(self) -> Self {
        let flags = self.flags | NodeFlags::CONSTRUCT | NodeFlags::EMBODIED;
        self.flags(flags)
    }

    /// Shorthand: semantic construct without a body (prototype form)
    pub fn declaration_only(self) -> Self {
        let flags = self.flags | NodeFlags::CONSTRUCT | NodeFlags::DECLARATION_ONLY;
        self.flags(flags)
    }

    /// Shorthand: reserved word
    pub fn keyword(self) -> Self {
        let flags = self.flags | NodeFlags::KEYWORD;
        self.flags(flags)
    }

    /// Shorthand: semantic construct
    pub fn construct(self) -> Self {
        let flags = self.flags | NodeFlags::CONSTRUCT;
        self.flags(flags)
    }

    pub fn is_unconditional(&self) -> bool {
        self.context.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::Category;

    fn snapshot(parent: Option<&str>, index: usize) -> ContextSnapshot<'_> {
        ContextSnapshot {
            parent_kind: parent,
            child_index: index,
            ancestor_flags: NodeFlags::NONE,
        }
    }

    #[test]
    fn test_predicate_matching() {
        let parent_is = ContextPredicate::ParentIs("ternary_expression");
        assert!(parent_is.matches(&snapshot(Some("ternary_expression"), 1)));
        assert!(!parent_is.matches(&snapshot(Some("nullable_type"), 1)));
        assert!(!parent_is.matches(&snapshot(None, 0)));

        let parent_in = ContextPredicate::ParentIn(&["optional_parameter", "property_signature"]);
        assert!(parent_in.matches(&snapshot(Some("property_signature"), 2)));
        assert!(!parent_in.matches(&snapshot(Some("ternary_expression"), 2)));

        let both = ContextPredicate::ParentIsAndChildIndex {
            parent: "parameters",
            index: 0,
        };
        assert!(both.matches(&snapshot(Some("parameters"), 0)));
        assert!(!both.matches(&snapshot(Some("parameters"), 1)));
    }

    #[test]
    fn test_ancestor_flag_predicate() {
        let pred = ContextPredicate::AncestorHasFlag(NodeFlags::EMBODIED);
        let mut snap = snapshot(Some("block"), 0);
        assert!(!pred.matches(&snap));
        snap.ancestor_flags = NodeFlags::CONSTRUCT | NodeFlags::EMBODIED;
        assert!(pred.matches(&snap));
    }

    #[test]
    fn test_specificity_ordering() {
        let joint = ContextPredicate::ParentIsAndChildIndex {
            parent: "x",
            index: 0,
        };
        assert!(joint.specificity() > ContextPredicate::ParentIs("x").specificity());
        assert!(
            ContextPredicate::ParentIs("x").specificity()
                > ContextPredicate::ChildIndexIs(0).specificity()
        );
    }

    #[test]
    fn test_rule_builder() {
        let rule = NodeTypeRule::new(
            "function_definition",
            SemanticType::new(Category::DefinitionFunction),
            ExtractionStrategy::FindIdentifier,
        )
        .native(NativeStrategy::FunctionSignature)
        .embodied();

        assert!(rule.is_unconditional());
        assert!(rule.flags.is_embodied());
        assert!(rule.flags.is_construct());
        assert_eq!(rule.native_extraction, Some(NativeStrategy::FunctionSignature));
    }
}
