//! Rich context assembler
//!
//! Second-pass extraction for rules that declare a native strategy:
//! composes the name dispatcher with direct tree inspection to build
//! structured payloads (a function's full signature, a class's base and
//! method lists). Tolerates partial information — a grammar without return
//! types or parameter types still yields a valid, partially-populated
//! payload. Assembly never influences the node's semantic type.

use tree_sitter::Node;

use crate::classify::BODY_KINDS;
use crate::extract::{find_identifier_child, node_text};
use crate::registry::LanguageRules;
use crate::rules::{ContextSnapshot, NativeStrategy};
use crate::schema::{NativeContext, ParameterInfo};

/// Child kinds that hold a parameter list when the grammar has no
/// `parameters` field
const PARAM_LIST_KINDS: &[&str] = &[
    "parameters",
    "formal_parameters",
    "parameter_list",
    "lambda_parameters",
    "method_parameters",
    "closure_parameters",
];

/// Kinds parameter names are spelled with, across grammars
const PARAM_NAME_KINDS: &[&str] = &["identifier", "simple_identifier", "word", "variable_name"];

/// Fields that hold a function's return type
const RETURN_TYPE_FIELDS: &[&str] = &["return_type", "result", "type"];

/// Child kinds that carry modifiers worth surfacing on a signature
const MODIFIER_KINDS: &[&str] = &[
    "visibility_modifier",
    "modifiers",
    "storage_class_specifier",
    "access_specifier",
    "decorator",
    "annotation",
    "marker_annotation",
    "attribute_item",
    "attribute_list",
    "async",
    "static",
    "abstract",
    "extern",
];

/// Child kinds that introduce a class's base types
const BASE_CLAUSE_KINDS: &[&str] = &[
    "superclass",
    "superclasses",
    "base_class_clause",
    "class_heritage",
    "extends_clause",
    "super_interfaces",
    "base_list",
];

const MAX_INITIALIZER_LEN: usize = 120;

/// Build the structured payload a rule's native strategy asks for.
///
/// `name` is the result the name dispatcher already produced for this node;
/// the assembler reuses it rather than re-deriving it so that custom-hook
/// names flow into the payload unchanged.
pub fn assemble(
    strategy: NativeStrategy,
    node: Node<'_>,
    _snapshot: &ContextSnapshot<'_>,
    source: &str,
    lang: &LanguageRules,
    name: Option<String>,
) -> Option<NativeContext> {
    match strategy {
        NativeStrategy::FunctionSignature => Some(function_signature(node, source, lang, name)),
        NativeStrategy::ClassSummary => Some(class_summary(node, source, lang, name)),
        NativeStrategy::VariableBinding => Some(variable_binding(node, source, lang, name)),
    }
}

fn function_signature(
    node: Node<'_>,
    source: &str,
    lang: &LanguageRules,
    name: Option<String>,
) -> NativeContext {
    let parameters = parameter_list(node)
        .map(|list| extract_parameters(list, source, lang))
        .unwrap_or_default();

    let return_type = RETURN_TYPE_FIELDS
        .iter()
        .find_map(|field| node.child_by_field_name(field))
        .and_then(|type_node| node_text(type_node, source))
        .map(|text| normalize_whitespace(&text));

    NativeContext::FunctionSignature {
        name,
        parameters,
        return_type,
        modifiers: collect_modifiers(node, source),
    }
}

fn class_summary(
    node: Node<'_>,
    source: &str,
    lang: &LanguageRules,
    name: Option<String>,
) -> NativeContext {
    NativeContext::ClassSummary {
        name,
        bases: collect_bases(node, source, lang),
        methods: collect_methods(node, source, lang),
    }
}

fn variable_binding(
    node: Node<'_>,
    source: &str,
    lang: &LanguageRules,
    name: Option<String>,
) -> NativeContext {
    let name = name.or_else(|| find_identifier_child(node, source, lang));

    let type_annotation = node
        .child_by_field_name("type")
        .and_then(|type_node| node_text(type_node, source))
        .map(|text| normalize_whitespace(&text));

    let initializer = node
        .child_by_field_name("value")
        .or_else(|| node.child_by_field_name("right"))
        .and_then(|value_node| node_text(value_node, source))
        .map(|text| {
            let normalized = normalize_whitespace(&text);
            if normalized.len() > MAX_INITIALIZER_LEN {
                format!(
                    "{}...",
                    truncate_to_char_boundary(&normalized, MAX_INITIALIZER_LEN)
                )
            } else {
                normalized
            }
        });

    NativeContext::VariableBinding {
        name,
        type_annotation,
        initializer,
    }
}

/// The node holding a function's ordered parameters, by field first, by
/// well-known child kinds otherwise
fn parameter_list<'a>(node: Node<'a>) -> Option<Node<'a>> {
    if let Some(list) = node.child_by_field_name("parameters") {
        return Some(list);
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|child| PARAM_LIST_KINDS.contains(&child.kind()));
    found
}

fn extract_parameters(list: Node<'_>, source: &str, lang: &LanguageRules) -> Vec<ParameterInfo> {
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| ParameterInfo {
            name: param_name(child, source, lang),
            type_annotation: child
                .child_by_field_name("type")
                .and_then(|type_node| node_text(type_node, source))
                .map(|text| normalize_whitespace(&text)),
            default_value: child
                .child_by_field_name("value")
                .or_else(|| child.child_by_field_name("default_value"))
                .and_then(|value_node| node_text(value_node, source)),
        })
        .collect()
}

/// A parameter's name: the node itself when it is a bare identifier,
/// otherwise the first plainly-named descendant in document order (bounded
/// depth — enough to see through declarators and typed patterns)
fn param_name(node: Node<'_>, source: &str, lang: &LanguageRules) -> Option<String> {
    if lang.is_identifier_kind(node.kind()) {
        return node_text(node, source);
    }
    first_descendant_of_kinds(node, PARAM_NAME_KINDS, 3).and_then(|found| node_text(found, source))
}

fn first_descendant_of_kinds<'a>(
    node: Node<'a>,
    kinds: &[&str],
    depth: usize,
) -> Option<Node<'a>> {
    if depth == 0 {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'a>> = node.children(&mut cursor).collect();
    for child in &children {
        if kinds.contains(&child.kind()) {
            return Some(*child);
        }
    }
    children
        .into_iter()
        .filter(|child| child.is_named())
        .find_map(|child| first_descendant_of_kinds(child, kinds, depth - 1))
}

fn collect_modifiers(node: Node<'_>, source: &str) -> Vec<String> {
    let mut modifiers = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if MODIFIER_KINDS.contains(&child.kind()) {
            if let Some(text) = node_text(child, source) {
                modifiers.push(normalize_whitespace(&text));
            }
        }
    }

    // Python attaches decorators to a wrapping decorated_definition
    if let Some(parent) = node.parent() {
        if parent.kind() == "decorated_definition" {
            let mut parent_cursor = parent.walk();
            for child in parent.children(&mut parent_cursor) {
                if child.kind() == "decorator" {
                    if let Some(text) = node_text(child, source) {
                        modifiers.push(normalize_whitespace(&text));
                    }
                }
            }
        }
    }

    modifiers
}

fn collect_bases(node: Node<'_>, source: &str, lang: &LanguageRules) -> Vec<String> {
    let clause = node
        .child_by_field_name("superclasses")
        .or_else(|| node.child_by_field_name("superclass"))
        .or_else(|| {
            let mut cursor = node.walk();
            let found = node
                .children(&mut cursor)
                .find(|child| BASE_CLAUSE_KINDS.contains(&child.kind()));
            found
        });

    let Some(clause) = clause else {
        return Vec::new();
    };

    let mut bases = Vec::new();
    collect_base_names(clause, source, lang, 2, &mut bases);
    bases
}

fn collect_base_names(
    node: Node<'_>,
    source: &str,
    lang: &LanguageRules,
    depth: usize,
    out: &mut Vec<String>,
) {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    for child in children {
        let kind = child.kind();
        if lang.is_identifier_kind(kind) || kind.ends_with("identifier") || kind == "constant" {
            if let Some(text) = node_text(child, source) {
                out.push(text);
            }
        } else if depth > 0 {
            collect_base_names(child, source, lang, depth - 1, out);
        }
    }
}

fn collect_methods(node: Node<'_>, source: &str, lang: &LanguageRules) -> Vec<String> {
    let body = node.child_by_field_name("body").or_else(|| {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| BODY_KINDS.contains(&child.kind()));
        found
    });

    let Some(body) = body else {
        return Vec::new();
    };

    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        // Decorated members wrap the real definition one level down
        let member = if child.kind() == "decorated_definition" {
            child.child_by_field_name("definition").unwrap_or(child)
        } else {
            child
        };

        let kind = member.kind();
        if kind.contains("function") || kind.contains("method") || kind.contains("constructor") {
            if let Some(name) = find_identifier_child(member, source, lang) {
                methods.push(name);
            }
        }
    }
    methods
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate at a UTF-8 char boundary at or before `max_bytes`
fn truncate_to_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
