//! sematree: language-agnostic semantic classification of syntax trees
//!
//! This library normalizes concrete syntax trees produced by per-language
//! tree-sitter grammars into one bounded semantic model: every node gets a
//! `(category, refinement)` pair from a closed 8-bit taxonomy, behavioral
//! flags, an extracted name where one exists, and optionally a structured
//! payload (function signature, class summary). Downstream tools consume
//! this uniform model instead of dozens of incompatible grammars.
//!
//! # Example
//!
//! ```ignore
//! use sematree::{classify, registry, Lang};
//!
//! let source = "pub fn add(a: i32, b: i32) -> i32 { a + b }";
//! let lang = Lang::Rust;
//!
//! let mut parser = tree_sitter::Parser::new();
//! parser.set_language(&lang.tree_sitter_language())?;
//! let tree = parser.parse(source, None).unwrap();
//!
//! let forest = classify(tree.root_node(), source, lang.registry_id(), registry());
//! for node in forest.walk() {
//!     println!("{} -> {}", node.raw_kind, node.type_name());
//! }
//! ```
//!
//! Classification is total and deterministic: the forest always mirrors the
//! input tree's shape, unmapped node types degrade to `UNCLASSIFIED`, and
//! grammar-level errors become `PARSER_SYNTAX` nodes. Only registry
//! configuration problems surface as `Result::Err`.

pub mod classify;
pub mod error;
pub mod extract;
pub mod flags;
pub mod lang;
pub mod languages;
pub mod native;
pub mod parsing;
pub mod registry;
pub mod rules;
pub mod schema;
pub mod semantic;

// Re-export commonly used types
pub use classify::{classify, classify_with_cancel, classify_with_stats, CancelToken, ClassifyStats};
pub use error::{EngineError, RegistryError, Result};
pub use flags::NodeFlags;
pub use lang::Lang;
pub use parsing::{classify_sources, parse_and_classify, parse_and_classify_with};
pub use registry::{registry, LanguageRegistry, LanguageSpec, NameHook};
pub use rules::{ContextPredicate, ContextSnapshot, ExtractionStrategy, NativeStrategy, NodeTypeRule};
pub use schema::{NativeContext, ParameterInfo, SemanticNode, Span};
pub use semantic::{refinement, Category, Kind, SemanticType, SuperKind};
