//! Rust rule table
//!
//! Grammar notes: trait method prototypes surface as
//! `function_signature_item` (no body), `?` is error propagation inside a
//! `try_expression`, and `impl` blocks name their self type behind possible
//! generic arguments — the latter needs a custom hook.

use super::{kw, punct, rule, t, tr};
use crate::extract::node_text;
use crate::registry::{LanguageSpec, NameHook};
use crate::rules::{ContextPredicate, ContextSnapshot, ExtractionStrategy as E, NativeStrategy};
use crate::semantic::refinement::{
    arithmetic, assignment, call, class, comparison, conditional, function, identifier, import,
    jump, looping, number, organization, string, structured, variable,
};
use crate::semantic::Category as C;

const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "field_identifier",
    "shorthand_field_identifier",
];

pub(crate) fn spec() -> LanguageSpec {
    LanguageSpec {
        rules: rules(),
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: vec![("impl_type_name", impl_type_name as NameHook)],
    }
}

fn rules() -> Vec<crate::rules::NodeTypeRule> {
    vec![
        rule("source_file", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        // Definitions
        rule("function_item", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("function_signature_item", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .declaration_only(),
        rule("closure_expression", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        rule("struct_item", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .construct(),
        rule("enum_item", tr(C::DefinitionClass, class::ENUM), E::FindIdentifier).embodied(),
        rule("union_item", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier).embodied(),
        rule("trait_item", tr(C::DefinitionClass, class::ABSTRACT), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        rule("impl_item", t(C::OrganizationSection), E::Custom("impl_type_name")).embodied(),
        rule("mod_item", t(C::DefinitionModule), E::FindIdentifier).declaration_only(),
        rule("macro_definition", t(C::ParserConstruct), E::FindIdentifier).embodied(),
        rule("type_item", t(C::TypeComposite), E::FindIdentifier).construct(),
        // Variables and fields
        rule("let_declaration", tr(C::DefinitionVariable, variable::IMMUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("const_item", tr(C::DefinitionVariable, variable::IMMUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("static_item", tr(C::DefinitionVariable, variable::MUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("field_declaration", tr(C::DefinitionVariable, variable::FIELD), E::FindIdentifier),
        rule("parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("enum_variant", tr(C::DefinitionVariable, variable::FIELD), E::FindIdentifier),
        // Imports
        rule("use_declaration", tr(C::ExternalImport, import::MODULE), E::None).construct(),
        rule("extern_crate_declaration", tr(C::ExternalImport, import::MODULE), E::FindIdentifier),
        rule("use_wildcard", tr(C::ExternalImport, import::WILDCARD), E::None),
        // Calls and access
        rule("call_expression", tr(C::ComputationCall, call::FUNCTION), E::FindCallTarget)
            .construct(),
        rule("macro_invocation", tr(C::ComputationCall, call::MACRO), E::FindCallTarget)
            .construct(),
        rule("field_expression", t(C::ComputationAccess), E::FindProperty),
        rule("index_expression", t(C::ComputationAccess), E::None),
        rule("await_expression", t(C::FlowSync), E::None).construct(),
        // Control flow
        rule("if_expression", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("else_clause", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("match_expression", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("match_arm", t(C::PatternMatch), E::None),
        rule("match_pattern", t(C::PatternMatch), E::None),
        rule("for_expression", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("while_expression", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("loop_expression", tr(C::FlowLoop, looping::INFINITE), E::None).construct(),
        rule("return_expression", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        rule("break_expression", tr(C::FlowJump, jump::BREAK), E::None).construct(),
        rule("continue_expression", tr(C::FlowJump, jump::CONTINUE), E::None).construct(),
        // Error propagation
        rule("try_expression", t(C::ErrorThrow), E::None).construct(),
        rule("?", t(C::ErrorThrow), E::None)
            .when(ContextPredicate::ParentIs("try_expression"))
            .construct(),
        punct("?"),
        // Operators and expressions
        rule("binary_expression", t(C::ComputationExpression), E::None),
        rule("unary_expression", t(C::ComputationExpression), E::None),
        rule("reference_expression", t(C::ComputationExpression), E::None),
        rule("assignment_expression", tr(C::OperatorAssignment, assignment::SIMPLE), E::None)
            .construct(),
        rule("compound_assignment_expr", tr(C::OperatorAssignment, assignment::COMPOUND), E::None)
            .construct(),
        rule("range_expression", tr(C::OperatorArithmetic, arithmetic::RANGE), E::None),
        rule("+", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("-", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("*", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("/", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("%", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("==", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("!=", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("<", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule(">", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule("<=", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule(">=", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule("&&", t(C::OperatorLogical), E::NodeText),
        rule("||", t(C::OperatorLogical), E::NodeText),
        rule("=", tr(C::OperatorAssignment, assignment::SIMPLE), E::NodeText),
        // Names
        rule("identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("type_identifier", tr(C::NameIdentifier, identifier::TYPE), E::NodeText),
        rule("field_identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("scoped_identifier", t(C::NameQualified), E::FindProperty),
        rule("scoped_type_identifier", t(C::NameQualified), E::FindProperty),
        rule("self", t(C::NameScoped), E::NodeText).keyword(),
        rule("super", t(C::NameScoped), E::NodeText).keyword(),
        rule("crate", t(C::NameScoped), E::NodeText).keyword(),
        // Literals
        rule("integer_literal", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("float_literal", tr(C::LiteralNumber, number::FLOAT), E::NodeText),
        rule("string_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("raw_string_literal", tr(C::LiteralString, string::RAW), E::NodeText),
        rule("char_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("boolean_literal", t(C::LiteralAtomic), E::NodeText),
        rule("array_expression", tr(C::LiteralStructured, structured::SEQUENCE), E::None),
        rule("tuple_expression", tr(C::LiteralStructured, structured::SEQUENCE), E::None),
        // Types
        rule("primitive_type", t(C::TypePrimitive), E::NodeText),
        rule("reference_type", t(C::TypeReference), E::None),
        rule("pointer_type", t(C::TypeReference), E::None),
        rule("generic_type", t(C::TypeGeneric), E::FindIdentifier),
        // Organization
        rule("block", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("declaration_list", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("field_declaration_list", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("arguments", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("type_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("type_arguments", tr(C::OrganizationList, organization::COLLECTION), E::None),
        // Metadata
        rule("line_comment", t(C::MetadataComment), E::None),
        rule("block_comment", t(C::MetadataComment), E::None),
        rule("attribute_item", t(C::MetadataAnnotation), E::None).construct(),
        rule("inner_attribute_item", t(C::MetadataAnnotation), E::None).construct(),
        rule("visibility_modifier", t(C::NameKeyword), E::NodeText).keyword(),
        // Keywords
        kw("fn"),
        kw("let"),
        kw("struct"),
        kw("enum"),
        kw("trait"),
        kw("impl"),
        kw("mod"),
        kw("use"),
        kw("match"),
        kw("if"),
        kw("else"),
        kw("for"),
        kw("while"),
        kw("loop"),
        kw("return"),
        kw("async"),
        kw("await"),
        kw("move"),
        kw("mut"),
        kw("const"),
        kw("static"),
        kw("unsafe"),
        kw("pub"),
        kw("where"),
        kw("dyn"),
    ]
}

/// `impl` blocks name their self type, which may sit behind generic
/// arguments (`impl<T> Stack<T>` names `Stack`)
fn impl_type_name(
    node: tree_sitter::Node<'_>,
    _snapshot: &ContextSnapshot<'_>,
    source: &str,
) -> Option<String> {
    let mut ty = node.child_by_field_name("type")?;
    if ty.kind() == "generic_type" {
        ty = ty.child_by_field_name("type").unwrap_or(ty);
    }
    node_text(ty, source)
}
