//! Output model: the semantic forest handed to downstream consumers
//!
//! A `SemanticNode` forest is shape-isomorphic to the raw syntax tree it was
//! classified from and owns all of its data — no references into the raw
//! tree or the registry survive classification. JSON via serde is the
//! reference encoding; any encoding that can represent category, refinement,
//! flags, name, and native context is acceptable.

use serde::{Deserialize, Serialize};

use crate::flags::NodeFlags;
use crate::semantic::SemanticType;

/// Source location of a node (bytes and row/column points)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
    pub start_row: usize,
    pub start_column: usize,
    pub end_row: usize,
    pub end_column: usize,
}

impl Span {
    pub fn from_node(node: &tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_row: start.row,
            start_column: start.column,
            end_row: end.row,
            end_column: end.column,
        }
    }
}

/// One function/method parameter inside a `FunctionSignature` payload
///
/// Every field is optional: untyped grammars still produce a valid entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Structured payload for rules that declare a native extraction strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum NativeContext {
    FunctionSignature {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        parameters: Vec<ParameterInfo>,

        #[serde(skip_serializing_if = "Option::is_none")]
        return_type: Option<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        modifiers: Vec<String>,
    },
    ClassSummary {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        bases: Vec<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        methods: Vec<String>,
    },
    VariableBinding {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        type_annotation: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        initializer: Option<String>,
    },
}

/// Classification result for one syntax-tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticNode {
    /// Raw grammar node type this node was classified from
    pub raw_kind: String,

    pub span: Span,

    /// Packed `(category, refinement)` byte
    pub semantic_type: SemanticType,

    pub flags: NodeFlags,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_context: Option<NativeContext>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SemanticNode>,
}

impl SemanticNode {
    /// Pre-order traversal over the forest, root first
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Total node count, this node included
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Canonical name of this node's semantic category
    pub fn type_name(&self) -> &'static str {
        self.semantic_type.name()
    }
}

/// Iterator state for [`SemanticNode::walk`]
pub struct Walk<'a> {
    stack: Vec<&'a SemanticNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a SemanticNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so children pop in document order
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::Category;

    fn leaf(kind: &str) -> SemanticNode {
        SemanticNode {
            raw_kind: kind.to_string(),
            span: Span::default(),
            semantic_type: SemanticType::new(Category::NameIdentifier),
            flags: NodeFlags::NONE,
            name: None,
            native_context: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_walk_preorder() {
        let mut root = leaf("root");
        let mut a = leaf("a");
        a.children.push(leaf("a1"));
        a.children.push(leaf("a2"));
        root.children.push(a);
        root.children.push(leaf("b"));

        let order: Vec<&str> = root.walk().map(|n| n.raw_kind.as_str()).collect();
        assert_eq!(order, ["root", "a", "a1", "a2", "b"]);
        assert_eq!(root.node_count(), 5);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut node = leaf("identifier");
        node.name = Some("add".to_string());
        node.native_context = Some(NativeContext::FunctionSignature {
            name: Some("add".to_string()),
            parameters: vec![ParameterInfo {
                name: Some("a".to_string()),
                type_annotation: Some("i32".to_string()),
                default_value: None,
            }],
            return_type: Some("i32".to_string()),
            modifiers: vec![],
        });

        let json = serde_json::to_string(&node).unwrap();
        let back: SemanticNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
