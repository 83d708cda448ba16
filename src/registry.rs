//! Language registry: validated, immutable rule tables per language
//!
//! A `LanguageRegistry` is built once at process start from the bundled
//! declarative tables (plus any caller-supplied languages), validated at
//! registration time, and shared read-only across classification runs.
//! Registration failures are per-language: a rejected table leaves the rest
//! of the registry fully usable.

use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use tracing::warn;

use crate::error::RegistryError;
use crate::rules::{ContextSnapshot, ExtractionStrategy, NodeTypeRule};

/// Per-language custom name extraction routine
///
/// Registered alongside the declarative table for grammar shapes too
/// irregular for the generic strategies; referenced from rules by
/// `ExtractionStrategy::Custom(hook_id)`.
pub type NameHook = fn(tree_sitter::Node<'_>, &ContextSnapshot<'_>, &str) -> Option<String>;

/// Everything a language contributes to the registry
pub struct LanguageSpec {
    /// Classification rules, order significant only among equal-specificity
    /// conditional rules for the same raw type
    pub rules: Vec<NodeTypeRule>,
    /// Raw node types that count as identifier-like leaves for
    /// `FindIdentifier` and related strategies
    pub identifier_kinds: &'static [&'static str],
    /// Named custom extraction routines
    pub hooks: Vec<(&'static str, NameHook)>,
}

/// Rules for one raw node type: conditional rules most-specific-first,
/// then the unconditional fallback
#[derive(Default)]
struct RuleSet {
    conditional: Vec<NodeTypeRule>,
    fallback: Option<NodeTypeRule>,
}

/// Validated rule table for one language
pub struct LanguageRules {
    rules: AHashMap<String, RuleSet>,
    identifier_kinds: AHashSet<&'static str>,
    hooks: AHashMap<&'static str, NameHook>,
}

impl LanguageRules {
    pub fn is_identifier_kind(&self, kind: &str) -> bool {
        self.identifier_kinds.contains(kind)
    }

    pub fn hook(&self, id: &str) -> Option<NameHook> {
        self.hooks.get(id).copied()
    }

    /// Number of distinct raw node types this language maps
    pub fn mapped_type_count(&self) -> usize {
        self.rules.len()
    }

    /// Find the rule governing `raw_type` in the given structural context.
    ///
    /// Conditional rules are consulted most-specific-first; the first whose
    /// predicate holds wins, the unconditional rule is the fallback.
    pub fn lookup(
        &self,
        raw_type: &str,
        snapshot: &ContextSnapshot<'_>,
    ) -> Option<&NodeTypeRule> {
        let set = self.rules.get(raw_type)?;
        set.conditional
            .iter()
            .find(|rule| {
                rule.context
                    .as_ref()
                    .map(|context| context.matches(snapshot))
                    .unwrap_or(false)
            })
            .or(set.fallback.as_ref())
    }
}

/// Registry of per-language rule tables, immutable once constructed
#[derive(Default)]
pub struct LanguageRegistry {
    languages: AHashMap<String, LanguageRules>,
}

impl LanguageRegistry {
    /// Empty registry; languages are added via [`register`](Self::register)
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every bundled language loaded
    ///
    /// A bundled table failing validation is a bug in the table; it is
    /// logged and skipped so the remaining languages stay usable.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (language_id, spec) in crate::languages::bundled() {
            if let Err(error) = registry.register(language_id, spec) {
                warn!(language = language_id, %error, "skipping bundled language");
            }
        }
        registry
    }

    /// Validate and install one language's rule table.
    ///
    /// Rejects: two unconditional rules for one raw type, undeclared
    /// `(category, refinement)` combinations, rules flagged both embodied
    /// and declaration-only, and `Custom` strategies naming no registered
    /// hook. On error the language is not installed.
    pub fn register(
        &mut self,
        language_id: impl Into<String>,
        spec: LanguageSpec,
    ) -> Result<(), RegistryError> {
        let language_id = language_id.into();
        let hooks: AHashMap<&'static str, NameHook> = spec.hooks.into_iter().collect();

        let mut rules: AHashMap<String, RuleSet> = AHashMap::new();
        for rule in spec.rules {
            validate_rule(&language_id, &rule, &hooks)?;

            let set = rules.entry(rule.raw_type.clone()).or_default();
            if rule.is_unconditional() {
                if set.fallback.is_some() {
                    return Err(RegistryError::AmbiguousRule {
                        language: language_id,
                        raw_type: rule.raw_type,
                    });
                }
                set.fallback = Some(rule);
            } else {
                set.conditional.push(rule);
            }
        }

        // Most-specific-context-first; declaration order breaks ties
        for set in rules.values_mut() {
            set.conditional.sort_by(|a, b| {
                let sa = a.context.as_ref().map(|c| c.specificity()).unwrap_or(0);
                let sb = b.context.as_ref().map(|c| c.specificity()).unwrap_or(0);
                sb.cmp(&sa)
            });
        }

        self.languages.insert(
            language_id,
            LanguageRules {
                rules,
                identifier_kinds: spec.identifier_kinds.iter().copied().collect(),
                hooks,
            },
        );
        Ok(())
    }

    pub fn language(&self, language_id: &str) -> Option<&LanguageRules> {
        self.languages.get(language_id)
    }

    pub fn supported_languages(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Find the rule governing `raw_type` in the given structural context.
    ///
    /// `None` means the language or the raw type is wholly unmapped — the
    /// classifier then degrades to `UNCLASSIFIED` rather than failing.
    pub fn lookup(
        &self,
        language_id: &str,
        raw_type: &str,
        snapshot: &ContextSnapshot<'_>,
    ) -> Option<&NodeTypeRule> {
        self.languages.get(language_id)?.lookup(raw_type, snapshot)
    }
}

fn validate_rule(
    language: &str,
    rule: &NodeTypeRule,
    hooks: &AHashMap<&'static str, NameHook>,
) -> Result<(), RegistryError> {
    if rule.flags.is_embodied() && rule.flags.is_declaration_only() {
        return Err(RegistryError::ConflictingFlags {
            language: language.to_string(),
            raw_type: rule.raw_type.clone(),
        });
    }

    let semantic_type = rule.semantic_type;
    let refinement = semantic_type.refinement();
    if refinement != 0 && semantic_type.category().refinement_names().is_empty() {
        return Err(RegistryError::InvalidTaxonomyUse {
            language: language.to_string(),
            raw_type: rule.raw_type.clone(),
            category: semantic_type.name(),
            refinement,
        });
    }

    if let ExtractionStrategy::Custom(hook_id) = rule.name_extraction {
        if !hooks.contains_key(hook_id) {
            return Err(RegistryError::UnknownHook {
                language: language.to_string(),
                raw_type: rule.raw_type.clone(),
                hook: hook_id.to_string(),
            });
        }
    }

    Ok(())
}

static DEFAULT_REGISTRY: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::with_defaults);

/// Process-wide registry holding the bundled languages.
///
/// Built on first use and immutable thereafter; safe to share across
/// threads. Callers needing custom languages build their own
/// [`LanguageRegistry`] instead.
pub fn registry() -> &'static LanguageRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::NodeFlags;
    use crate::rules::ContextPredicate;
    use crate::semantic::{Category, SemanticType};

    fn spec(rules: Vec<NodeTypeRule>) -> LanguageSpec {
        LanguageSpec {
            rules,
            identifier_kinds: &["identifier"],
            hooks: Vec::new(),
        }
    }

    fn snapshot(parent: Option<&str>) -> ContextSnapshot<'_> {
        ContextSnapshot {
            parent_kind: parent,
            child_index: 0,
            ancestor_flags: NodeFlags::NONE,
        }
    }

    #[test]
    fn test_duplicate_unconditional_rule_rejected() {
        let mut registry = LanguageRegistry::new();
        let result = registry.register(
            "toy",
            spec(vec![
                NodeTypeRule::new(
                    "call",
                    SemanticType::new(Category::ComputationCall),
                    ExtractionStrategy::FindCallTarget,
                ),
                NodeTypeRule::new(
                    "call",
                    SemanticType::new(Category::ExecutionInvocation),
                    ExtractionStrategy::None,
                ),
            ]),
        );
        assert!(matches!(
            result,
            Err(RegistryError::AmbiguousRule { ref raw_type, .. }) if raw_type == "call"
        ));
        // The failed language was not installed
        assert!(registry.language("toy").is_none());
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        let mut registry = LanguageRegistry::new();
        let result = registry.register(
            "toy",
            spec(vec![NodeTypeRule::new(
                "function_definition",
                SemanticType::new(Category::DefinitionFunction),
                ExtractionStrategy::FindIdentifier,
            )
            .flags(NodeFlags::EMBODIED | NodeFlags::DECLARATION_ONLY)]),
        );
        assert!(matches!(result, Err(RegistryError::ConflictingFlags { .. })));
    }

    #[test]
    fn test_undeclared_refinement_rejected() {
        let mut registry = LanguageRegistry::new();
        // ComputationAccess declares no refinement set: refinement 2 is invalid
        let result = registry.register(
            "toy",
            spec(vec![NodeTypeRule::new(
                "member_access",
                SemanticType::refined(Category::ComputationAccess, 2),
                ExtractionStrategy::FindProperty,
            )]),
        );
        assert!(matches!(
            result,
            Err(RegistryError::InvalidTaxonomyUse { refinement: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_hook_rejected() {
        let mut registry = LanguageRegistry::new();
        let result = registry.register(
            "toy",
            spec(vec![NodeTypeRule::new(
                "weird_node",
                SemanticType::new(Category::ParserConstruct),
                ExtractionStrategy::Custom("no_such_hook"),
            )]),
        );
        assert!(matches!(
            result,
            Err(RegistryError::UnknownHook { ref hook, .. }) if hook == "no_such_hook"
        ));
    }

    #[test]
    fn test_failed_registration_leaves_other_languages_usable() {
        let mut registry = LanguageRegistry::new();
        registry
            .register(
                "good",
                spec(vec![NodeTypeRule::new(
                    "identifier",
                    SemanticType::new(Category::NameIdentifier),
                    ExtractionStrategy::NodeText,
                )]),
            )
            .unwrap();
        let _ = registry.register(
            "bad",
            spec(vec![NodeTypeRule::new(
                "x",
                SemanticType::refined(Category::ComputationAccess, 3),
                ExtractionStrategy::None,
            )]),
        );

        assert!(registry.language("good").is_some());
        assert!(registry.language("bad").is_none());
        assert!(registry
            .lookup("good", "identifier", &snapshot(None))
            .is_some());
    }

    #[test]
    fn test_lookup_context_order() {
        let mut registry = LanguageRegistry::new();
        registry
            .register(
                "toy",
                spec(vec![
                    // Fallback first in declaration order; lookup must still
                    // prefer the conditional rules
                    NodeTypeRule::new(
                        "?",
                        SemanticType::new(Category::ParserPunctuation),
                        ExtractionStrategy::None,
                    ),
                    NodeTypeRule::new(
                        "?",
                        SemanticType::new(Category::FlowConditional),
                        ExtractionStrategy::None,
                    )
                    .when(ContextPredicate::ParentIs("conditional_expression")),
                    NodeTypeRule::new(
                        "?",
                        SemanticType::new(Category::TypeReference),
                        ExtractionStrategy::None,
                    )
                    .when(ContextPredicate::ParentIs("nullable_type")),
                ]),
            )
            .unwrap();

        let ternary = registry
            .lookup("toy", "?", &snapshot(Some("conditional_expression")))
            .unwrap();
        assert_eq!(
            ternary.semantic_type,
            SemanticType::new(Category::FlowConditional)
        );

        let nullable = registry
            .lookup("toy", "?", &snapshot(Some("nullable_type")))
            .unwrap();
        assert_eq!(
            nullable.semantic_type,
            SemanticType::new(Category::TypeReference)
        );

        let bare = registry.lookup("toy", "?", &snapshot(Some("block"))).unwrap();
        assert_eq!(
            bare.semantic_type,
            SemanticType::new(Category::ParserPunctuation)
        );
    }

    #[test]
    fn test_unmapped_raw_type_returns_none() {
        let mut registry = LanguageRegistry::new();
        registry.register("toy", spec(Vec::new())).unwrap();
        assert!(registry
            .lookup("toy", "__unknown_node__", &snapshot(None))
            .is_none());
        assert!(registry
            .lookup("missing_language", "identifier", &snapshot(None))
            .is_none());
    }

    #[test]
    fn test_default_registry_has_bundled_languages() {
        let registry = registry();
        for id in ["rust", "python", "javascript", "typescript", "go", "java"] {
            assert!(registry.language(id).is_some(), "{id} missing");
        }
    }
}
