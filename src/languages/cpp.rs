//! C++ rule table
//!
//! Layered on the C table: the C++ grammar is a superset of C's node
//! vocabulary. Shares the declarator hook, which also understands
//! `qualified_identifier` for out-of-line member definitions.

use super::{c, kw, rule, t, tr};
use crate::registry::{LanguageSpec, NameHook};
use crate::rules::{ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    call, class, function, identifier, import, looping, organization, string,
};
use crate::semantic::Category as C;

const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "field_identifier",
    "statement_identifier",
    "namespace_identifier",
    "destructor_name",
    "operator_name",
];

pub(crate) fn spec() -> LanguageSpec {
    let mut rules = c::base_rules();
    rules.extend(cpp_rules());
    LanguageSpec {
        rules,
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: vec![("declarator_name", c::declarator_name as NameHook)],
    }
}

fn cpp_rules() -> Vec<NodeTypeRule> {
    vec![
        // Classes, namespaces, templates
        rule("class_specifier", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .declaration_only(),
        rule("namespace_definition", t(C::DefinitionModule), E::FindIdentifier).embodied(),
        rule("template_declaration", t(C::TypeGeneric), E::None).construct(),
        rule("template_function", t(C::TypeGeneric), E::FindIdentifier),
        rule("template_type", t(C::TypeGeneric), E::FindIdentifier),
        rule("base_class_clause", t(C::TypeReference), E::None),
        rule("access_specifier", t(C::NameKeyword), E::NodeText).keyword(),
        rule("friend_declaration", t(C::ExecutionDeclaration), E::None),
        rule("using_declaration", tr(C::ExternalImport, import::WILDCARD), E::None).construct(),
        rule("alias_declaration", t(C::TypeComposite), E::FindIdentifier),
        // Members
        rule("field_initializer_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("reference_declarator", t(C::ParserConstruct), E::None),
        rule("structured_binding_declarator", t(C::PatternDestructure), E::None),
        rule("qualified_identifier", t(C::NameQualified), E::FindProperty),
        rule("namespace_identifier", tr(C::NameIdentifier, identifier::TYPE), E::NodeText),
        rule("destructor_name", tr(C::NameIdentifier, identifier::FUNCTION), E::NodeText),
        rule("operator_name", tr(C::NameIdentifier, identifier::FUNCTION), E::NodeText),
        rule("this", t(C::NameScoped), E::NodeText).keyword(),
        // Lambdas and calls
        rule("lambda_expression", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        rule("lambda_capture_specifier", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("new_expression", tr(C::ComputationCall, call::CONSTRUCTOR), E::FindCallTarget)
            .construct(),
        rule("delete_expression", t(C::ExecutionMutation), E::None).construct(),
        // Error handling (C has none; C++ adds it)
        rule("try_statement", t(C::ErrorTry), E::None).construct(),
        rule("catch_clause", t(C::ErrorCatch), E::None),
        rule("throw_statement", t(C::ErrorThrow), E::None).construct(),
        // Coroutines
        rule("co_await_expression", t(C::FlowSync), E::None).construct(),
        rule("co_return_statement", t(C::FlowSync), E::None).construct(),
        rule("co_yield_statement", t(C::FlowSync), E::None).construct(),
        // Range-for and misc
        rule("for_range_loop", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("condition_clause", t(C::PatternGuard), E::None),
        rule("auto", t(C::TypePrimitive), E::NodeText),
        rule("raw_string_literal", tr(C::LiteralString, string::RAW), E::NodeText),
        rule("nullptr", t(C::LiteralAtomic), E::NodeText),
        // Keywords beyond C
        kw("class"),
        kw("namespace"),
        kw("template"),
        kw("typename"),
        kw("public"),
        kw("private"),
        kw("protected"),
        kw("virtual"),
        kw("override"),
        kw("try"),
        kw("catch"),
        kw("throw"),
        kw("new"),
        kw("delete"),
        kw("using"),
        kw("operator"),
        kw("constexpr"),
        kw("noexcept"),
    ]
}
