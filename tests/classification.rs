//! Classification engine integration tests
//!
//! Covers the engine's contract properties: totality, determinism,
//! graceful degradation, the declaration/definition override, and
//! context-dependent token disambiguation.

mod common;

use common::{classify_source, find_all_kinds, find_kind, parse, raw_node_count};
use sematree::semantic::refinement;
use sematree::{
    classify, classify_with_cancel, classify_with_stats, registry, CancelToken, Category,
    EngineError, ExtractionStrategy, Lang, LanguageRegistry, LanguageSpec, NodeTypeRule,
    RegistryError, SemanticType,
};

const SNIPPETS: &[(Lang, &str)] = &[
    (Lang::Rust, "pub fn add(a: i32, b: i32) -> i32 { a + b }\n"),
    (Lang::Python, "def add(a, b):\n    return a + b\n"),
    (Lang::JavaScript, "function add(a, b) { return a + b; }\n"),
    (Lang::TypeScript, "function add(a: number, b: number): number { return a + b; }\n"),
    (Lang::Go, "package main\n\nfunc add(a, b int) int { return a + b }\n"),
    (Lang::Java, "class Math { int add(int a, int b) { return a + b; } }\n"),
    (Lang::C, "int add(int a, int b) { return a + b; }\n"),
    (Lang::Cpp, "int add(int a, int b) { return a + b; }\n"),
    (Lang::CSharp, "class Math { int Add(int a, int b) { return a + b; } }\n"),
    (Lang::Kotlin, "fun add(a: Int, b: Int): Int { return a + b }\n"),
    (Lang::Bash, "add() {\n  echo $(($1 + $2))\n}\n"),
    (Lang::Ruby, "def add(a, b)\n  a + b\nend\n"),
];

// =============================================================================
// Totality and shape preservation
// =============================================================================

#[test]
fn test_forest_shape_matches_input_for_every_language() {
    for (lang, source) in SNIPPETS {
        let tree = parse(*lang, source);
        let forest = classify(tree.root_node(), source, lang.registry_id(), registry());
        assert_eq!(
            forest.node_count(),
            raw_node_count(tree.root_node()),
            "{} forest shape diverged from input tree",
            lang.name()
        );
    }
}

#[test]
fn test_function_definitions_classified_across_languages() {
    for (lang, source) in SNIPPETS {
        let forest = classify_source(*lang, source);
        let found = forest.walk().any(|node| {
            node.semantic_type.category() == Category::DefinitionFunction
                && node.name.as_deref() == Some("add")
                || node.name.as_deref() == Some("Add")
        });
        assert!(found, "{}: no named function definition found", lang.name());
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_repeated_classification_is_byte_identical() {
    for (lang, source) in SNIPPETS {
        let first = serde_json::to_string(&classify_source(*lang, source)).unwrap();
        let second = serde_json::to_string(&classify_source(*lang, source)).unwrap();
        assert_eq!(first, second, "{} output not deterministic", lang.name());
    }
}

// =============================================================================
// Graceful degradation
// =============================================================================

#[test]
fn test_unmapped_raw_types_degrade_to_unclassified() {
    // A deliberately sparse language: only the function node is mapped
    let mut sparse = LanguageRegistry::new();
    sparse
        .register(
            "python-sparse",
            LanguageSpec {
                rules: vec![NodeTypeRule::new(
                    "function_definition",
                    SemanticType::new(Category::DefinitionFunction),
                    ExtractionStrategy::FindIdentifier,
                )
                .embodied()],
                identifier_kinds: &["identifier"],
                hooks: Vec::new(),
            },
        )
        .unwrap();

    let source = "def solo(x):\n    return x\n";
    let tree = parse(Lang::Python, source);
    let forest = classify(tree.root_node(), source, "python-sparse", &sparse);

    // Shape intact, the mapped node classified, its siblings degraded
    assert_eq!(forest.node_count(), raw_node_count(tree.root_node()));
    let func = find_kind(&forest, "function_definition").unwrap();
    assert_eq!(func.semantic_type.category(), Category::DefinitionFunction);
    assert_eq!(func.name.as_deref(), Some("solo"));
    let identifier = find_kind(&forest, "identifier").unwrap();
    assert_eq!(identifier.semantic_type, SemanticType::UNCLASSIFIED);
}

#[test]
fn test_syntax_errors_become_parser_syntax_nodes() {
    let source = "function { invalid syntax\n";
    let tree = parse(Lang::TypeScript, source);
    let (forest, stats) =
        classify_with_stats(tree.root_node(), source, "typescript", registry());

    assert_eq!(forest.node_count(), raw_node_count(tree.root_node()));
    assert!(stats.error_node_count > 0);
    assert!(forest
        .walk()
        .any(|node| node.semantic_type == SemanticType::PARSER_SYNTAX));
}

#[test]
fn test_stats_surface_unmapped_kinds_for_auditing() {
    let source = "x = 1\n";
    let tree = parse(Lang::Python, source);
    let (_, stats) = classify_with_stats(tree.root_node(), source, "no_such_language", registry());
    assert!(stats.unmapped_kinds.iter().any(|k| k == "identifier"));
}

// =============================================================================
// Declaration/definition override
// =============================================================================

#[test]
fn test_java_method_declaration_override() {
    // One grammar production covers interface prototypes and bodied methods
    let source = "\
interface Greeter {
    String greet(String name);
}

class Impl {
    int add(int a, int b) { return a + b; }
}
";
    let forest = classify_source(Lang::Java, source);
    let methods = find_all_kinds(&forest, "method_declaration");
    assert_eq!(methods.len(), 2);

    let prototype = methods[0];
    assert!(prototype.flags.is_declaration_only());
    assert!(!prototype.flags.is_embodied());

    let defined = methods[1];
    assert!(defined.flags.is_embodied());
    assert!(!defined.flags.is_declaration_only());
}

#[test]
fn test_rust_trait_signature_stays_declaration_only() {
    let source = "trait Speak { fn speak(&self); }\nfn talk() {}\n";
    let forest = classify_source(Lang::Rust, source);

    let signature = find_kind(&forest, "function_signature_item").unwrap();
    assert!(signature.flags.is_declaration_only());

    let function = find_kind(&forest, "function_item").unwrap();
    assert!(function.flags.is_embodied());
}

#[test]
fn test_c_struct_forward_declaration_vs_definition() {
    let source = "struct point;\nstruct point { int x; int y; };\n";
    let forest = classify_source(Lang::C, source);
    let structs = find_all_kinds(&forest, "struct_specifier");
    assert_eq!(structs.len(), 2);

    assert!(structs[0].flags.is_declaration_only());
    assert!(structs[1].flags.is_embodied());
}

// =============================================================================
// Context-dependent tokens
// =============================================================================

#[test]
fn test_question_mark_ternary_vs_optional_marker() {
    let ternary_source = "const x = a ? b : c;\n";
    let forest = classify_source(Lang::TypeScript, ternary_source);
    let question = find_kind(&forest, "?").unwrap();
    assert_eq!(question.semantic_type.category(), Category::FlowConditional);
    assert_eq!(
        question.semantic_type.refinement(),
        refinement::conditional::TERNARY
    );

    let optional_source = "function f(y?: number) {}\n";
    let forest = classify_source(Lang::TypeScript, optional_source);
    let question = find_kind(&forest, "?").unwrap();
    assert_eq!(question.semantic_type.category(), Category::TypeReference);
}

#[test]
fn test_rust_question_mark_is_error_propagation() {
    let source = "fn get(v: Option<u8>) -> Option<u8> { let x = v?; Some(x) }\n";
    let forest = classify_source(Lang::Rust, source);
    let question = find_kind(&forest, "?").unwrap();
    assert_eq!(question.semantic_type.category(), Category::ErrorThrow);
}

#[test]
fn test_js_class_keyword_vs_class_expression() {
    let source = "class Widget {}\nconst W = class {};\n";
    let forest = classify_source(Lang::JavaScript, source);

    // The token inside class_declaration is a keyword; the anonymous class
    // expression is a definition named via its declarator
    let tokens = find_all_kinds(&forest, "class");
    assert_eq!(tokens.len(), 3);
    assert!(tokens[0].flags.is_keyword());

    let expression = tokens
        .iter()
        .find(|node| node.semantic_type.category() == Category::DefinitionClass)
        .expect("class expression classified as definition");
    assert_eq!(expression.name.as_deref(), Some("W"));
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn test_cancelled_token_aborts_with_error() {
    let source = "fn a() {}\nfn b() {}\n";
    let tree = parse(Lang::Rust, source);
    let token = CancelToken::new();
    token.cancel();

    let result = classify_with_cancel(tree.root_node(), source, "rust", registry(), &token);
    assert!(matches!(result, Err(EngineError::Cancelled)));
}

#[test]
fn test_fresh_token_classifies_normally() {
    let source = "fn a() {}\n";
    let tree = parse(Lang::Rust, source);
    let token = CancelToken::new();

    let forest =
        classify_with_cancel(tree.root_node(), source, "rust", registry(), &token).unwrap();
    assert_eq!(forest.node_count(), raw_node_count(tree.root_node()));
}

// =============================================================================
// Registry invariants (load-time failure taxonomy)
// =============================================================================

#[test]
fn test_duplicate_unconditional_rules_fail_load() {
    let mut registry = LanguageRegistry::new();
    let result = registry.register(
        "dup",
        LanguageSpec {
            rules: vec![
                NodeTypeRule::new(
                    "node",
                    SemanticType::new(Category::ComputationCall),
                    ExtractionStrategy::None,
                ),
                NodeTypeRule::new(
                    "node",
                    SemanticType::new(Category::ExecutionInvocation),
                    ExtractionStrategy::None,
                ),
            ],
            identifier_kinds: &["identifier"],
            hooks: Vec::new(),
        },
    );
    assert!(matches!(result, Err(RegistryError::AmbiguousRule { .. })));
}

#[test]
fn test_failed_language_does_not_poison_registry() {
    let mut reg = LanguageRegistry::new();
    let bad = reg.register(
        "broken",
        LanguageSpec {
            rules: vec![NodeTypeRule::new(
                "x",
                SemanticType::refined(Category::ComputationAccess, 1),
                ExtractionStrategy::None,
            )],
            identifier_kinds: &["identifier"],
            hooks: Vec::new(),
        },
    );
    assert!(matches!(
        bad,
        Err(RegistryError::InvalidTaxonomyUse { .. })
    ));
    assert!(reg.language("broken").is_none());

    // A good language still registers and classifies afterwards
    reg.register(
        "tiny",
        LanguageSpec {
            rules: vec![NodeTypeRule::new(
                "identifier",
                SemanticType::new(Category::NameIdentifier),
                ExtractionStrategy::NodeText,
            )],
            identifier_kinds: &["identifier"],
            hooks: Vec::new(),
        },
    )
    .unwrap();
    let source = "x\n";
    let tree = parse(Lang::Python, source);
    let forest = classify(tree.root_node(), source, "tiny", &reg);
    let identifier = find_kind(&forest, "identifier").unwrap();
    assert_eq!(identifier.name.as_deref(), Some("x"));
}
