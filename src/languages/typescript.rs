//! TypeScript (and TSX) rule table
//!
//! Layered on the JavaScript table: the TS grammar keeps JavaScript's node
//! vocabulary and adds type-level constructs. `?` picks up a second
//! context-qualified meaning here — optional-member marker against the
//! ternary operator the base table already maps.

use super::{javascript, rule, t, tr};
use crate::registry::LanguageSpec;
use crate::rules::{ContextPredicate, ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{class, function, identifier, organization, variable};
use crate::semantic::Category as C;

const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "statement_identifier",
    "type_identifier",
];

pub(crate) fn spec() -> LanguageSpec {
    let mut rules = javascript::base_rules();
    rules.extend(typescript_rules());
    LanguageSpec {
        rules,
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: Vec::new(),
    }
}

fn typescript_rules() -> Vec<NodeTypeRule> {
    vec![
        // Type-level definitions
        rule("interface_declaration", tr(C::DefinitionClass, class::ABSTRACT), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .construct(),
        rule("interface_body", t(C::OrganizationBlock), E::None),
        rule("abstract_class_declaration", tr(C::DefinitionClass, class::ABSTRACT), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        rule("enum_declaration", tr(C::DefinitionClass, class::ENUM), E::FindIdentifier)
            .embodied(),
        rule("enum_body", t(C::OrganizationBlock), E::None),
        rule("type_alias_declaration", t(C::TypeGeneric), E::FindIdentifier).construct(),
        rule("internal_module", t(C::DefinitionModule), E::FindIdentifier).embodied(),
        // Declaration-only members: bodied forms are flipped by the
        // classifier's body check
        rule("method_signature", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .declaration_only(),
        rule("abstract_method_signature", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .declaration_only(),
        rule("function_signature", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .declaration_only(),
        rule("property_signature", tr(C::DefinitionVariable, variable::FIELD), E::FindIdentifier),
        rule("public_field_definition", tr(C::DefinitionVariable, variable::FIELD), E::FindIdentifier),
        // Parameters
        rule("required_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("optional_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        // The optional marker: same token as the ternary operator, parent
        // decides which meaning applies
        rule("?", t(C::TypeReference), E::None).when(ContextPredicate::ParentIn(&[
            "optional_parameter",
            "property_signature",
            "method_signature",
            "optional_type",
            "public_field_definition",
        ])),
        // Types
        rule("type_annotation", t(C::TypeReference), E::None),
        rule("predefined_type", t(C::TypePrimitive), E::NodeText),
        rule("type_identifier", tr(C::NameIdentifier, identifier::TYPE), E::NodeText),
        rule("nested_type_identifier", t(C::NameQualified), E::FindProperty),
        rule("generic_type", t(C::TypeGeneric), E::FindIdentifier),
        rule("union_type", t(C::TypeComposite), E::None),
        rule("intersection_type", t(C::TypeComposite), E::None),
        rule("literal_type", t(C::TypePrimitive), E::NodeText),
        rule("type_arguments", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("type_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("type_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        // Expressions
        rule("as_expression", t(C::ComputationExpression), E::None),
        rule("satisfies_expression", t(C::ComputationExpression), E::None),
        rule("non_null_expression", t(C::ComputationExpression), E::None),
        // Metadata
        rule("decorator", t(C::MetadataAnnotation), E::FindIdentifier),
        rule("implements_clause", t(C::TypeReference), E::None),
        rule("extends_clause", t(C::TypeReference), E::None),
    ]
}
