//! Parse-and-classify convenience layer
//!
//! Glues the external parser (tree-sitter) to the classifier for callers
//! that start from source text rather than an already-parsed tree, and
//! fans independent files out across a thread pool. The registry is shared
//! read-only; every run allocates its own forest.

use std::path::Path;

use rayon::prelude::*;

use crate::classify::classify;
use crate::error::{EngineError, Result};
use crate::lang::Lang;
use crate::registry::{registry, LanguageRegistry};
use crate::schema::SemanticNode;

/// Parse source code and classify it against the default registry.
///
/// The language is detected from the file path's extension.
pub fn parse_and_classify(file_path: &Path, source: &str) -> Result<SemanticNode> {
    let lang = Lang::from_path(file_path)?;
    parse_and_classify_with(file_path, source, lang, registry())
}

/// Parse source code and classify it against an explicit registry.
///
/// # Errors
///
/// Returns `EngineError::ParseFailure` when the grammar cannot be loaded
/// or the source cannot be parsed. Classification itself never fails:
/// unmapped node types and grammar errors degrade inside the forest.
pub fn parse_and_classify_with(
    file_path: &Path,
    source: &str,
    lang: Lang,
    registry: &LanguageRegistry,
) -> Result<SemanticNode> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&lang.tree_sitter_language())
        .map_err(|e| EngineError::ParseFailure {
            message: format!(
                "failed to set language for {}: {:?}",
                file_path.display(),
                e
            ),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| EngineError::ParseFailure {
            message: format!("failed to parse file: {}", file_path.display()),
        })?;

    Ok(classify(tree.root_node(), source, lang.registry_id(), registry))
}

/// Classify many independent sources in parallel.
///
/// Each `(path, source)` pair is parsed and classified on the rayon pool;
/// results keep input order. Per-file failures stay per-file.
pub fn classify_sources(sources: &[(&Path, &str)]) -> Vec<Result<SemanticNode>> {
    sources
        .par_iter()
        .map(|(path, source)| parse_and_classify(path, source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_and_classify_typescript() {
        let source = "export function hello(): string { return 'world'; }";
        let forest = parse_and_classify(Path::new("test.ts"), source).unwrap();

        assert!(forest
            .walk()
            .any(|node| node.name.as_deref() == Some("hello")));
    }

    #[test]
    fn test_parse_and_classify_rust() {
        let source = "pub fn greet() -> &'static str { \"hello\" }";
        let forest = parse_and_classify(Path::new("test.rs"), source).unwrap();

        assert!(forest
            .walk()
            .any(|node| node.name.as_deref() == Some("greet")));
    }

    #[test]
    fn test_unsupported_extension_errors() {
        let result = parse_and_classify(Path::new("test.xyz"), "whatever");
        assert!(matches!(
            result,
            Err(EngineError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn test_parallel_classification_keeps_order() {
        let inputs: Vec<(&Path, &str)> = vec![
            (Path::new("a.py"), "def a():\n    pass\n"),
            (Path::new("b.rs"), "fn b() {}\n"),
            (Path::new("c.js"), "function c() {}\n"),
        ];
        let results = classify_sources(&inputs);
        assert_eq!(results.len(), 3);

        let names: Vec<Option<String>> = results
            .iter()
            .map(|result| {
                result.as_ref().ok().and_then(|forest| {
                    forest
                        .walk()
                        .find_map(|node| node.name.clone().filter(|n| n.len() == 1))
                })
            })
            .collect();
        assert_eq!(
            names,
            vec![
                Some("a".to_string()),
                Some("b".to_string()),
                Some("c".to_string())
            ]
        );
    }
}
