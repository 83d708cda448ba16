//! Kotlin rule table
//!
//! Grammar notes: expressions dominate (if/when/try are expressions), and
//! a single `jump_expression` production covers return/break/continue/throw.

use super::{kw, rule, t, tr};
use crate::registry::LanguageSpec;
use crate::rules::{ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    assignment, call, class, conditional, function, identifier, import, jump, looping, number,
    organization, string, variable,
};
use crate::semantic::Category as C;

const IDENTIFIER_KINDS: &[&str] = &["simple_identifier", "type_identifier"];

pub(crate) fn spec() -> LanguageSpec {
    LanguageSpec {
        rules: rules(),
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: Vec::new(),
    }
}

fn rules() -> Vec<NodeTypeRule> {
    vec![
        rule("source_file", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        rule("package_header", t(C::DefinitionModule), E::None).construct(),
        rule("import_header", tr(C::ExternalImport, import::MODULE), E::None).construct(),
        // Definitions
        rule("function_declaration", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .declaration_only(),
        rule("class_declaration", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .construct(),
        rule("object_declaration", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .embodied(),
        rule("companion_object", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier),
        rule("primary_constructor", tr(C::DefinitionFunction, function::CONSTRUCTOR), E::None),
        rule("secondary_constructor", tr(C::DefinitionFunction, function::CONSTRUCTOR), E::None)
            .embodied(),
        rule("anonymous_function", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        rule("lambda_literal", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        // Variables
        rule("property_declaration", tr(C::DefinitionVariable, variable::IMMUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("variable_declaration", tr(C::DefinitionVariable, variable::MUTABLE), E::FindIdentifier),
        rule("class_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        // Calls and access
        rule("call_expression", tr(C::ComputationCall, call::FUNCTION), E::FindCallTarget)
            .construct(),
        rule("navigation_expression", t(C::ComputationAccess), E::FindProperty),
        rule("navigation_suffix", t(C::ComputationAccess), E::FindProperty),
        rule("indexing_expression", t(C::ComputationAccess), E::None),
        // Control flow
        rule("if_expression", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("when_expression", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("when_entry", t(C::PatternMatch), E::None),
        rule("for_statement", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("while_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("do_while_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("jump_expression", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        // Error handling
        rule("try_expression", t(C::ErrorTry), E::None).construct(),
        rule("catch_block", t(C::ErrorCatch), E::None),
        rule("finally_block", t(C::ErrorFinally), E::None),
        // Operators and expressions
        rule("assignment", tr(C::OperatorAssignment, assignment::SIMPLE), E::None).construct(),
        rule("additive_expression", t(C::ComputationExpression), E::None),
        rule("multiplicative_expression", t(C::ComputationExpression), E::None),
        rule("comparison_expression", t(C::ComputationExpression), E::None),
        rule("equality_expression", t(C::ComputationExpression), E::None),
        rule("conjunction_expression", t(C::ComputationExpression), E::None),
        rule("disjunction_expression", t(C::ComputationExpression), E::None),
        rule("prefix_expression", t(C::ComputationExpression), E::None),
        rule("postfix_expression", t(C::ComputationExpression), E::None),
        rule("range_expression", t(C::ComputationExpression), E::None),
        rule("elvis_expression", t(C::OperatorLogical), E::None),
        // Names
        rule("simple_identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("type_identifier", tr(C::NameIdentifier, identifier::TYPE), E::NodeText),
        rule("this_expression", t(C::NameScoped), E::NodeText).keyword(),
        rule("super_expression", t(C::NameScoped), E::NodeText).keyword(),
        // Types
        rule("user_type", t(C::TypeReference), E::FindIdentifier),
        rule("nullable_type", t(C::TypeReference), E::None),
        rule("function_type", t(C::TypeComposite), E::None),
        // Literals
        rule("integer_literal", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("long_literal", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("real_literal", tr(C::LiteralNumber, number::FLOAT), E::NodeText),
        rule("string_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("character_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("boolean_literal", t(C::LiteralAtomic), E::NodeText),
        rule("null", t(C::LiteralAtomic), E::NodeText),
        rule("collection_literal", t(C::LiteralStructured), E::None),
        // Organization
        rule("class_body", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("function_body", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("statements", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("control_structure_body", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("function_value_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("value_arguments", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("type_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        // Metadata
        rule("line_comment", t(C::MetadataComment), E::None),
        rule("multiline_comment", t(C::MetadataComment), E::None),
        rule("annotation", t(C::MetadataAnnotation), E::None),
        rule("modifiers", t(C::ParserConstruct), E::None),
        rule("visibility_modifier", t(C::NameKeyword), E::NodeText).keyword(),
        // Keywords
        kw("fun"),
        kw("val"),
        kw("var"),
        kw("class"),
        kw("object"),
        kw("interface"),
        kw("if"),
        kw("else"),
        kw("when"),
        kw("for"),
        kw("while"),
        kw("do"),
        kw("return"),
        kw("import"),
        kw("package"),
        kw("try"),
        kw("catch"),
        kw("finally"),
        kw("throw"),
        kw("suspend"),
        kw("override"),
        kw("data"),
        kw("companion"),
        kw("in"),
        kw("is"),
    ]
}
