//! Node classifier: the depth-first walk that turns a raw syntax tree into
//! a semantic forest
//!
//! The walk is pure and synchronous: per node it builds a
//! [`ContextSnapshot`], consults the registry, evaluates flags against the
//! concrete node, and runs the extraction passes the matched rule asks for.
//! Classification is total — unmapped raw types degrade to `UNCLASSIFIED`,
//! grammar ERROR nodes become `PARSER_SYNTAX`, and the output forest always
//! mirrors the shape of the input tree.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};
use tree_sitter::Node;

use crate::error::EngineError;
use crate::extract::extract_name;
use crate::flags::{self, NodeFlags};
use crate::native::assemble;
use crate::registry::{LanguageRegistry, LanguageRules};
use crate::rules::ContextSnapshot;
use crate::schema::{SemanticNode, Span};
use crate::semantic::SemanticType;

/// Child kinds that count as a body when the grammar has no `body` field
pub(crate) const BODY_KINDS: &[&str] = &[
    "block",
    "compound_statement",
    "statement_block",
    "class_body",
    "declaration_list",
    "field_declaration_list",
    "enum_body",
    "interface_body",
    "body_statement",
    "do_block",
    "constructor_body",
    "enum_class_body",
    "function_body",
];

/// Cooperative cancellation flag, checked between sibling subtrees.
///
/// Cloning shares the flag; any clone can cancel. A partially classified
/// forest is never returned — cancellation surfaces as
/// [`EngineError::Cancelled`] and the caller discards the run.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Coverage counters for one classification run
#[derive(Debug, Clone, Default)]
pub struct ClassifyStats {
    /// Total nodes classified (equals the input tree's node count)
    pub node_count: usize,
    /// Grammar ERROR / missing nodes mapped to `PARSER_SYNTAX`
    pub error_node_count: usize,
    /// Distinct raw types that had no rule, for registry auditing
    pub unmapped_kinds: Vec<String>,
}

/// Classify a raw syntax tree into a semantic forest.
///
/// Total and deterministic: the same tree and registry always produce the
/// same forest, and no input shape aborts the walk. An unregistered
/// `language_id` yields an all-`UNCLASSIFIED` forest (logged once) rather
/// than an error.
pub fn classify(
    root: Node<'_>,
    source: &str,
    language_id: &str,
    registry: &LanguageRegistry,
) -> SemanticNode {
    let (node, _) = classify_inner(root, source, language_id, registry, None)
        .expect("classification without a token cannot be cancelled");
    node
}

/// Like [`classify`], also returning coverage counters
pub fn classify_with_stats(
    root: Node<'_>,
    source: &str,
    language_id: &str,
    registry: &LanguageRegistry,
) -> (SemanticNode, ClassifyStats) {
    classify_inner(root, source, language_id, registry, None)
        .expect("classification without a token cannot be cancelled")
}

/// Like [`classify`], checking `token` between sibling subtrees.
///
/// Returns [`EngineError::Cancelled`] once the token fires; the partial
/// forest is dropped, not returned.
pub fn classify_with_cancel(
    root: Node<'_>,
    source: &str,
    language_id: &str,
    registry: &LanguageRegistry,
    token: &CancelToken,
) -> Result<SemanticNode, EngineError> {
    classify_inner(root, source, language_id, registry, Some(token)).map(|(node, _)| node)
}

fn classify_inner(
    root: Node<'_>,
    source: &str,
    language_id: &str,
    registry: &LanguageRegistry,
    token: Option<&CancelToken>,
) -> Result<(SemanticNode, ClassifyStats), EngineError> {
    let lang = registry.language(language_id);
    if lang.is_none() {
        warn!(language = language_id, "no rule table for language; forest degrades to UNCLASSIFIED");
    }

    let mut stats = ClassifyStats::default();
    let snapshot = ContextSnapshot::default();
    let node = classify_node(root, source, language_id, lang, snapshot, token, &mut stats)?;
    Ok((node, stats))
}

#[allow(clippy::too_many_arguments)]
fn classify_node(
    node: Node<'_>,
    source: &str,
    language_id: &str,
    lang: Option<&LanguageRules>,
    snapshot: ContextSnapshot<'_>,
    token: Option<&CancelToken>,
    stats: &mut ClassifyStats,
) -> Result<SemanticNode, EngineError> {
    stats.node_count += 1;

    let kind = node.kind();
    let mut semantic_type = SemanticType::UNCLASSIFIED;
    let mut evaluated_flags = NodeFlags::NONE;
    let mut name = None;
    let mut native_context = None;

    if node.is_error() || node.is_missing() {
        // Keep the subtree: partially-malformed source still yields a
        // usable, if degraded, forest
        stats.error_node_count += 1;
        semantic_type = SemanticType::PARSER_SYNTAX;
    } else {
        match lang.map(|rules| (rules, rules.lookup(kind, &snapshot))) {
            Some((rules, Some(rule))) => {
                semantic_type = rule.semantic_type;
                evaluated_flags = flags::evaluate(rule.flags, has_body_child(node));
                name = extract_name(rule.name_extraction, node, &snapshot, source, rules);
                if let Some(strategy) = rule.native_extraction {
                    native_context =
                        assemble(strategy, node, &snapshot, source, rules, name.clone());
                }
            }
            _ => {
                if !stats.unmapped_kinds.iter().any(|k| k == kind) {
                    debug!(
                        raw_type = kind,
                        language = language_id,
                        "no rule for raw node type"
                    );
                    stats.unmapped_kinds.push(kind.to_string());
                }
            }
        }
    }

    let child_ancestor_flags = snapshot.ancestor_flags.union(evaluated_flags);
    let mut children = Vec::with_capacity(node.child_count());
    let mut cursor = node.walk();
    let raw_children: Vec<Node<'_>> = node.children(&mut cursor).collect();

    for (index, child) in raw_children.into_iter().enumerate() {
        if let Some(token) = token {
            if token.is_cancelled() {
                return Err(EngineError::Cancelled);
            }
        }
        let child_snapshot = ContextSnapshot {
            parent_kind: Some(kind),
            child_index: index,
            ancestor_flags: child_ancestor_flags,
        };
        children.push(classify_node(
            child,
            source,
            language_id,
            lang,
            child_snapshot,
            token,
            stats,
        )?);
    }

    Ok(SemanticNode {
        raw_kind: kind.to_string(),
        span: Span::from_node(&node),
        semantic_type,
        flags: evaluated_flags,
        name,
        native_context,
        children,
    })
}

/// Whether the concrete node carries a body child.
///
/// Drives the declaration/definition flag override for grammars that reuse
/// one production for both forms.
pub(crate) fn has_body_child(node: Node<'_>) -> bool {
    if node.child_by_field_name("body").is_some() {
        return true;
    }
    let mut cursor = node.walk();
    let has = node
        .children(&mut cursor)
        .any(|child| BODY_KINDS.contains(&child.kind()));
    has
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;
    use tree_sitter::Parser;

    fn parse(language: &tree_sitter::Language, source: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser.set_language(language).unwrap();
        parser.parse(source, None).unwrap()
    }

    fn raw_node_count(node: Node<'_>) -> usize {
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
        1 + children.into_iter().map(raw_node_count).sum::<usize>()
    }

    #[test]
    fn test_forest_mirrors_tree_shape() {
        let source = "pub fn add(a: i32, b: i32) -> i32 { a + b }\n";
        let tree = parse(&tree_sitter_rust::LANGUAGE.into(), source);

        let forest = classify(tree.root_node(), source, "rust", registry());
        assert_eq!(forest.node_count(), raw_node_count(tree.root_node()));
    }

    #[test]
    fn test_unknown_language_degrades() {
        let source = "x = 1\n";
        let tree = parse(&tree_sitter_python::LANGUAGE.into(), source);

        let forest = classify(tree.root_node(), source, "no_such_language", registry());
        assert!(forest
            .walk()
            .all(|node| node.semantic_type == SemanticType::UNCLASSIFIED));
        assert_eq!(forest.node_count(), raw_node_count(tree.root_node()));
    }

    #[test]
    fn test_cancellation_between_siblings() {
        let source = "fn a() {}\nfn b() {}\nfn c() {}\n";
        let tree = parse(&tree_sitter_rust::LANGUAGE.into(), source);

        let token = CancelToken::new();
        token.cancel();
        let result =
            classify_with_cancel(tree.root_node(), source, "rust", registry(), &token);
        assert!(matches!(result, Err(EngineError::Cancelled)));
    }

    #[test]
    fn test_stats_count_unmapped_once_per_kind() {
        let source = "x = 1\ny = 2\n";
        let tree = parse(&tree_sitter_python::LANGUAGE.into(), source);

        let (_, stats) =
            classify_with_stats(tree.root_node(), source, "no_such_language", registry());
        let identifiers = stats
            .unmapped_kinds
            .iter()
            .filter(|k| k.as_str() == "identifier")
            .count();
        assert_eq!(identifiers, 1);
        assert!(stats.node_count > 0);
    }
}
