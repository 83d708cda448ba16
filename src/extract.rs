//! Name extraction dispatcher
//!
//! Given a rule's extraction strategy plus the node and its structural
//! context, produce a human-meaningful name — or `None`. Extraction never
//! errors: a missing child or an unexpected shape resolves to `None` and
//! the surrounding classification continues.

use tree_sitter::Node;

use crate::registry::LanguageRules;
use crate::rules::{ContextSnapshot, ExtractionStrategy};

/// Fields that hold the callee of call-shaped nodes across grammars;
/// `type` last, for constructor shapes that name the constructed type
const CALLEE_FIELDS: &[&str] = &["function", "macro", "constructor", "name", "method", "type"];

/// Node kinds that disqualify an upward assignment-target search: the
/// construct sits in argument position and is anonymous by definition
const ARGUMENT_KINDS: &[&str] = &[
    "arguments",
    "argument_list",
    "call_expression",
    "call",
    "method_invocation",
    "invocation_expression",
];

/// Wrapper kinds skipped while climbing toward an enclosing assignment
const TRANSPARENT_KINDS: &[&str] = &["parenthesized_expression"];

/// Maximum ancestors visited by the upward assignment-target search
const MAX_ASSIGNMENT_CLIMB: usize = 3;

/// Extract the raw source text of a node; empty text resolves to `None`
pub(crate) fn node_text(node: Node<'_>, source: &str) -> Option<String> {
    let text = node.utf8_text(source.as_bytes()).ok()?;
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Kinds acceptable to the rightmost-segment and left-hand-side searches.
///
/// Wider than the per-language identifier set on purpose: a call target or
/// property segment may be spelled with a kind (`type_identifier`,
/// `property_identifier`) the language does not count as a plain
/// identifier leaf.
fn is_name_like(kind: &str, lang: &LanguageRules) -> bool {
    lang.is_identifier_kind(kind) || kind.ends_with("identifier")
}

/// Run one extraction strategy against a node.
///
/// `snapshot` is the node's structural context as built by the classifier;
/// custom hooks receive it unchanged.
pub fn extract_name(
    strategy: ExtractionStrategy,
    node: Node<'_>,
    snapshot: &ContextSnapshot<'_>,
    source: &str,
    lang: &LanguageRules,
) -> Option<String> {
    match strategy {
        ExtractionStrategy::None => None,
        ExtractionStrategy::NodeText => node_text(node, source),
        ExtractionStrategy::FindIdentifier => find_identifier_child(node, source, lang),
        ExtractionStrategy::FindCallTarget => find_call_target(node, source, lang),
        ExtractionStrategy::FindAssignmentTarget => find_assignment_target(node, source, lang),
        ExtractionStrategy::FindProperty => find_property(node, source, lang),
        ExtractionStrategy::Custom(hook_id) => {
            let hook = lang.hook(hook_id)?;
            hook(node, snapshot, source)
        }
    }
}

/// First direct child whose kind is registered as identifier-like.
///
/// Deliberately does not descend: a function's parameters live one level
/// down and must not shadow the function's own name.
pub(crate) fn find_identifier_child(
    node: Node<'_>,
    source: &str,
    lang: &LanguageRules,
) -> Option<String> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|child| lang.is_identifier_kind(child.kind()));
    found.and_then(|child| node_text(child, source))
}

/// Textual target of an invocation.
///
/// Locates the callee child (by field name, falling back to the first
/// child), then takes the rightmost identifier-like segment so that
/// `obj.method(...)`, `new Thing(...)`, and `println!(...)` all resolve to
/// the invoked name rather than the receiver chain.
fn find_call_target(node: Node<'_>, source: &str, lang: &LanguageRules) -> Option<String> {
    let callee = CALLEE_FIELDS
        .iter()
        .find_map(|field| node.child_by_field_name(field))
        .or_else(|| node.child(0))?;
    rightmost_identifier(callee, source, lang, 8)
}

/// Rightmost identifier-like node within a callee expression, descending
/// through member/scoped chains a bounded number of levels
fn rightmost_identifier(
    node: Node<'_>,
    source: &str,
    lang: &LanguageRules,
    depth: usize,
) -> Option<String> {
    if is_name_like(node.kind(), lang) {
        return node_text(node, source);
    }
    if depth == 0 {
        return None;
    }

    // Prefer the last identifier-like direct child (the member name in
    // `receiver.member` shapes), otherwise descend into the last named
    // child (chained expressions)
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    if let Some(found) = children
        .iter()
        .rev()
        .find(|child| is_name_like(child.kind(), lang))
    {
        return node_text(*found, source);
    }
    children
        .iter()
        .rev()
        .find(|child| child.is_named())
        .and_then(|child| rightmost_identifier(*child, source, lang, depth - 1))
}

/// Walk upward from an anonymous construct to the enclosing
/// assignment/declarator and take its left-hand identifier.
///
/// Returns `None` when the construct is not in assignment position (for
/// example, passed directly as a call argument) — the caller treats that
/// as "anonymous", not as an error.
fn find_assignment_target(node: Node<'_>, source: &str, lang: &LanguageRules) -> Option<String> {
    let mut current = node;
    for _ in 0..=MAX_ASSIGNMENT_CLIMB {
        let parent = current.parent()?;
        let kind = parent.kind();

        if TRANSPARENT_KINDS.contains(&kind) {
            current = parent;
            continue;
        }
        if ARGUMENT_KINDS.contains(&kind) {
            return None;
        }
        if is_assignment_kind(kind) {
            return lhs_identifier(parent, current, source, lang);
        }
        current = parent;
    }
    None
}

fn is_assignment_kind(kind: &str) -> bool {
    kind.contains("declarator")
        || kind.contains("assignment")
        || kind == "binary_operator"
        || kind == "let_declaration"
        || kind == "short_var_declaration"
        || kind == "property_declaration"
}

/// First identifier-like node on the left-hand side of an assignment.
///
/// Searches the assignment's direct children that start before the bound
/// construct, descending one level for grammars that group the left-hand
/// side in a list node (Go `expression_list`, tuple patterns).
fn lhs_identifier(
    assignment: Node<'_>,
    bound: Node<'_>,
    source: &str,
    lang: &LanguageRules,
) -> Option<String> {
    let mut cursor = assignment.walk();
    for child in assignment.children(&mut cursor) {
        if child.start_byte() >= bound.start_byte() {
            break;
        }
        if is_name_like(child.kind(), lang) {
            return node_text(child, source);
        }
        let mut inner_cursor = child.walk();
        let found = child
            .children(&mut inner_cursor)
            .find(|grandchild| is_name_like(grandchild.kind(), lang));
        if let Some(found) = found {
            return node_text(found, source);
        }
    }
    None
}

/// Accessed member name of a field/property access shape: the rightmost
/// identifier-like direct child, independent of the receiver's complexity
fn find_property(node: Node<'_>, source: &str, lang: &LanguageRules) -> Option<String> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .iter()
        .rev()
        .find(|child| is_name_like(child.kind(), lang))
        .and_then(|child| node_text(*child, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;
    use tree_sitter::{Parser, Tree};

    fn parse(language: &tree_sitter::Language, source: &str) -> Tree {
        let mut parser = Parser::new();
        parser.set_language(language).unwrap();
        parser.parse(source, None).unwrap()
    }

    fn first_of_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
        if node.kind() == kind {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'a>> = node.children(&mut cursor).collect();
        children.into_iter().find_map(|child| first_of_kind(child, kind))
    }

    #[test]
    fn test_find_identifier_stays_shallow() {
        let source = "def add(a, b):\n    return a + b\n";
        let tree = parse(&tree_sitter_python::LANGUAGE.into(), source);
        let lang = registry().language("python").unwrap();
        let func = first_of_kind(tree.root_node(), "function_definition").unwrap();

        // The function's own name, not the first parameter
        assert_eq!(
            find_identifier_child(func, source, lang),
            Some("add".to_string())
        );
    }

    #[test]
    fn test_call_target_plain_and_method() {
        let source = "foo(1); obj.bar(2);\n";
        let tree = parse(&tree_sitter_javascript::LANGUAGE.into(), source);
        let lang = registry().language("javascript").unwrap();

        let calls: Vec<Node<'_>> = {
            fn collect<'a>(node: Node<'a>, out: &mut Vec<Node<'a>>) {
                if node.kind() == "call_expression" {
                    out.push(node);
                }
                let mut cursor = node.walk();
                let children: Vec<Node<'a>> = node.children(&mut cursor).collect();
                for child in children {
                    collect(child, out);
                }
            }
            let mut out = Vec::new();
            collect(tree.root_node(), &mut out);
            out
        };
        assert_eq!(calls.len(), 2);
        assert_eq!(
            find_call_target(calls[0], source, lang),
            Some("foo".to_string())
        );
        assert_eq!(
            find_call_target(calls[1], source, lang),
            Some("bar".to_string())
        );
    }

    #[test]
    fn test_assignment_target_for_bound_lambda() {
        let source = "const f = () => 1;\n";
        let tree = parse(&tree_sitter_javascript::LANGUAGE.into(), source);
        let lang = registry().language("javascript").unwrap();
        let arrow = first_of_kind(tree.root_node(), "arrow_function").unwrap();

        assert_eq!(
            find_assignment_target(arrow, source, lang),
            Some("f".to_string())
        );
    }

    #[test]
    fn test_assignment_target_none_in_argument_position() {
        let source = "setTimeout(() => 1, 10);\n";
        let tree = parse(&tree_sitter_javascript::LANGUAGE.into(), source);
        let lang = registry().language("javascript").unwrap();
        let arrow = first_of_kind(tree.root_node(), "arrow_function").unwrap();

        assert_eq!(find_assignment_target(arrow, source, lang), None);
    }

    #[test]
    fn test_property_extraction() {
        let source = "a.b.c;\n";
        let tree = parse(&tree_sitter_javascript::LANGUAGE.into(), source);
        let lang = registry().language("javascript").unwrap();
        let member = first_of_kind(tree.root_node(), "member_expression").unwrap();

        // Outermost member expression: the accessed member is `c`
        assert_eq!(find_property(member, source, lang), Some("c".to_string()));
    }
}
