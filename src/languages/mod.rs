//! Bundled per-language rule tables
//!
//! Each module maps one grammar's raw node types onto the semantic
//! taxonomy: a declarative rule list, the language's identifier-kind set,
//! and any custom name hooks its grammar shapes require. Dialects that
//! share a grammar's node vocabulary share a table (TSX rides on the
//! TypeScript table, JSX on the JavaScript one).
//!
//! # Adding a language
//!
//! 1. Add the tree-sitter grammar to `Cargo.toml` and a `Lang` variant
//! 2. Write a module here with a `spec()` returning its `LanguageSpec`
//! 3. Register it in [`bundled`]
//!
//! Tables do not need to be exhaustive: raw types without a rule degrade
//! to `UNCLASSIFIED` at classification time, and the classifier's stats
//! report them for coverage auditing.

pub mod bash;
pub mod c;
pub mod cpp;
pub mod csharp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod kotlin;
pub mod python;
pub mod ruby;
pub mod rust;
pub mod typescript;

use crate::registry::LanguageSpec;
use crate::rules::{ExtractionStrategy, NodeTypeRule};
use crate::semantic::{Category, SemanticType};

/// All bundled languages, keyed by registry id
pub(crate) fn bundled() -> Vec<(&'static str, LanguageSpec)> {
    vec![
        ("rust", rust::spec()),
        ("python", python::spec()),
        ("javascript", javascript::spec()),
        ("typescript", typescript::spec()),
        ("go", go::spec()),
        ("java", java::spec()),
        ("c", c::spec()),
        ("cpp", cpp::spec()),
        ("csharp", csharp::spec()),
        ("kotlin", kotlin::spec()),
        ("bash", bash::spec()),
        ("ruby", ruby::spec()),
    ]
}

// Table-building shorthand shared by all language modules

pub(crate) fn t(category: Category) -> SemanticType {
    SemanticType::new(category)
}

pub(crate) fn tr(category: Category, refinement: u8) -> SemanticType {
    SemanticType::refined(category, refinement)
}

pub(crate) fn rule(
    raw_type: &'static str,
    semantic_type: SemanticType,
    name: ExtractionStrategy,
) -> NodeTypeRule {
    NodeTypeRule::new(raw_type, semantic_type, name)
}

/// Reserved word mapped to its own text
pub(crate) fn kw(raw_type: &'static str) -> NodeTypeRule {
    rule(
        raw_type,
        t(Category::NameKeyword),
        ExtractionStrategy::NodeText,
    )
    .keyword()
}

/// Nameless punctuation token
pub(crate) fn punct(raw_type: &'static str) -> NodeTypeRule {
    rule(
        raw_type,
        t(Category::ParserPunctuation),
        ExtractionStrategy::None,
    )
}
