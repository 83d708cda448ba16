//! Java rule table
//!
//! Grammar notes: one `method_declaration` production covers interface
//! prototypes and bodied methods alike, so the rule is declaration-only and
//! relies on the classifier's body check to flip defined forms to embodied.

use super::{kw, punct, rule, t, tr};
use crate::registry::LanguageSpec;
use crate::rules::{ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    assignment, call, class, comparison, conditional, function, identifier, import, jump, looping,
    number, organization, string, variable,
};
use crate::semantic::Category as C;

// Declarations name themselves with plain `identifier` nodes;
// `type_identifier` is deliberately excluded so a method's return type
// never shadows its name in the shallow identifier scan
const IDENTIFIER_KINDS: &[&str] = &["identifier"];

pub(crate) fn spec() -> LanguageSpec {
    LanguageSpec {
        rules: rules(),
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: Vec::new(),
    }
}

fn rules() -> Vec<NodeTypeRule> {
    vec![
        rule("program", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        rule("package_declaration", t(C::DefinitionModule), E::FindIdentifier).construct(),
        rule("import_declaration", tr(C::ExternalImport, import::SELECTIVE), E::None).construct(),
        // Type definitions
        rule("class_declaration", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        rule("interface_declaration", tr(C::DefinitionClass, class::ABSTRACT), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        rule("enum_declaration", tr(C::DefinitionClass, class::ENUM), E::FindIdentifier)
            .embodied(),
        rule("record_declaration", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .embodied(),
        rule("annotation_type_declaration", tr(C::DefinitionClass, class::ABSTRACT), E::FindIdentifier),
        // Members: one production covers prototype and defined forms
        rule("method_declaration", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .declaration_only(),
        rule("constructor_declaration", tr(C::DefinitionFunction, function::CONSTRUCTOR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("compact_constructor_declaration", tr(C::DefinitionFunction, function::CONSTRUCTOR), E::FindIdentifier)
            .embodied(),
        rule("field_declaration", tr(C::DefinitionVariable, variable::FIELD), E::None),
        rule("local_variable_declaration", t(C::ExecutionDeclaration), E::None).construct(),
        rule("variable_declarator", tr(C::DefinitionVariable, variable::MUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("formal_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("spread_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        // Calls and access
        rule("method_invocation", tr(C::ComputationCall, call::METHOD), E::FindCallTarget)
            .construct(),
        rule("object_creation_expression", tr(C::ComputationCall, call::CONSTRUCTOR), E::FindCallTarget)
            .construct(),
        rule("explicit_constructor_invocation", tr(C::ComputationCall, call::CONSTRUCTOR), E::None),
        rule("field_access", t(C::ComputationAccess), E::FindProperty),
        rule("array_access", t(C::ComputationAccess), E::None),
        rule("method_reference", t(C::ComputationLambda), E::FindProperty),
        rule("lambda_expression", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        // Control flow
        rule("if_statement", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("switch_expression", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("switch_block_statement_group", t(C::PatternMatch), E::None),
        rule("switch_rule", t(C::PatternMatch), E::None),
        rule("switch_label", t(C::PatternMatch), E::None),
        rule("ternary_expression", tr(C::FlowConditional, conditional::TERNARY), E::None),
        rule("for_statement", tr(C::FlowLoop, looping::COUNTER), E::None).construct(),
        rule("enhanced_for_statement", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("while_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("do_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("return_statement", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        rule("break_statement", tr(C::FlowJump, jump::BREAK), E::None).construct(),
        rule("continue_statement", tr(C::FlowJump, jump::CONTINUE), E::None).construct(),
        rule("yield_statement", t(C::FlowSync), E::None).construct(),
        rule("synchronized_statement", t(C::FlowSync), E::None).construct(),
        rule("labeled_statement", tr(C::FlowJump, jump::GOTO), E::None),
        // Error handling
        rule("try_statement", t(C::ErrorTry), E::None).construct(),
        rule("try_with_resources_statement", t(C::ErrorTry), E::None).construct(),
        rule("catch_clause", t(C::ErrorCatch), E::None),
        rule("finally_clause", t(C::ErrorFinally), E::None),
        rule("throw_statement", t(C::ErrorThrow), E::None).construct(),
        // Operators and expressions
        rule("assignment_expression", tr(C::OperatorAssignment, assignment::SIMPLE), E::None)
            .construct(),
        rule("binary_expression", t(C::ComputationExpression), E::None),
        rule("unary_expression", t(C::ComputationExpression), E::None),
        rule("update_expression", t(C::ComputationExpression), E::None),
        rule("cast_expression", t(C::ComputationExpression), E::None),
        rule("instanceof_expression", tr(C::OperatorComparison, comparison::MEMBERSHIP), E::None),
        rule("=", tr(C::OperatorAssignment, assignment::SIMPLE), E::NodeText),
        rule("==", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("!=", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("&&", t(C::OperatorLogical), E::NodeText),
        rule("||", t(C::OperatorLogical), E::NodeText),
        // Names
        rule("identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("type_identifier", tr(C::NameIdentifier, identifier::TYPE), E::NodeText),
        rule("scoped_identifier", t(C::NameQualified), E::FindProperty),
        rule("this", t(C::NameScoped), E::NodeText).keyword(),
        rule("super", t(C::NameScoped), E::NodeText).keyword(),
        // Types
        rule("void_type", t(C::TypePrimitive), E::NodeText),
        rule("integral_type", t(C::TypePrimitive), E::NodeText),
        rule("floating_point_type", t(C::TypePrimitive), E::NodeText),
        rule("boolean_type", t(C::TypePrimitive), E::NodeText),
        rule("array_type", t(C::TypeComposite), E::None),
        rule("generic_type", t(C::TypeGeneric), E::None),
        rule("superclass", t(C::TypeReference), E::None),
        rule("super_interfaces", t(C::TypeReference), E::None),
        // Literals
        rule("decimal_integer_literal", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("hex_integer_literal", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("decimal_floating_point_literal", tr(C::LiteralNumber, number::FLOAT), E::NodeText),
        rule("string_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("character_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("true", t(C::LiteralAtomic), E::NodeText),
        rule("false", t(C::LiteralAtomic), E::NodeText),
        rule("null_literal", t(C::LiteralAtomic), E::NodeText),
        rule("array_initializer", t(C::LiteralStructured), E::None),
        // Organization
        rule("block", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("class_body", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("interface_body", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("enum_body", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("constructor_body", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("formal_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("argument_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("type_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("type_arguments", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("expression_statement", t(C::ExecutionStatement), E::None),
        rule("modifiers", t(C::ParserConstruct), E::None),
        // Metadata
        rule("line_comment", t(C::MetadataComment), E::None),
        rule("block_comment", t(C::MetadataComment), E::None),
        rule("annotation", t(C::MetadataAnnotation), E::FindIdentifier),
        rule("marker_annotation", t(C::MetadataAnnotation), E::FindIdentifier),
        // Keywords
        kw("class"),
        kw("interface"),
        kw("enum"),
        kw("record"),
        kw("public"),
        kw("private"),
        kw("protected"),
        kw("static"),
        kw("final"),
        kw("abstract"),
        kw("new"),
        kw("return"),
        kw("if"),
        kw("else"),
        kw("for"),
        kw("while"),
        kw("do"),
        kw("switch"),
        kw("case"),
        kw("default"),
        kw("try"),
        kw("catch"),
        kw("finally"),
        kw("throw"),
        kw("throws"),
        kw("import"),
        kw("package"),
        kw("extends"),
        kw("implements"),
        kw("synchronized"),
        kw("instanceof"),
        punct(";"),
        punct(","),
    ]
}
