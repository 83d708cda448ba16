//! Shared helpers for integration tests

#![allow(dead_code)]

use sematree::{classify, registry, Lang, SemanticNode};
use tree_sitter::{Node, Parser, Tree};

/// Parse source text with the given language's grammar
pub fn parse(lang: Lang, source: &str) -> Tree {
    let mut parser = Parser::new();
    parser
        .set_language(&lang.tree_sitter_language())
        .expect("grammar loads");
    parser.parse(source, None).expect("source parses")
}

/// Parse and classify against the default registry
pub fn classify_source(lang: Lang, source: &str) -> SemanticNode {
    let tree = parse(lang, source);
    classify(tree.root_node(), source, lang.registry_id(), registry())
}

/// Count every node in a raw tree, anonymous tokens included
pub fn raw_node_count(node: Node<'_>) -> usize {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    1 + children.into_iter().map(raw_node_count).sum::<usize>()
}

/// First semantic node with the given raw kind, preorder
pub fn find_kind<'a>(forest: &'a SemanticNode, raw_kind: &str) -> Option<&'a SemanticNode> {
    forest.walk().find(|node| node.raw_kind == raw_kind)
}

/// All semantic nodes with the given raw kind, preorder
pub fn find_all_kinds<'a>(forest: &'a SemanticNode, raw_kind: &str) -> Vec<&'a SemanticNode> {
    forest.walk().filter(|node| node.raw_kind == raw_kind).collect()
}
