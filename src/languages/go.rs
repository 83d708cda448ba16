//! Go rule table
//!
//! Grammar notes: `:=` declarations put their targets inside an
//! `expression_list`, out of reach of the shallow identifier scan — a
//! custom hook digs the first target out. Go's single `for` covers every
//! loop form.

use super::{kw, punct, rule, t, tr};
use crate::extract::node_text;
use crate::registry::{LanguageSpec, NameHook};
use crate::rules::{ContextSnapshot, ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    arithmetic, assignment, call, class, comparison, conditional, function, identifier, import,
    jump, looping, number, organization, string, structured, variable,
};
use crate::semantic::Category as C;

const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "field_identifier",
    "package_identifier",
];

pub(crate) fn spec() -> LanguageSpec {
    LanguageSpec {
        rules: rules(),
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: vec![("short_var_name", short_var_name as NameHook)],
    }
}

fn rules() -> Vec<NodeTypeRule> {
    vec![
        rule("source_file", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        rule("package_clause", t(C::DefinitionModule), E::FindIdentifier).construct(),
        // Definitions
        rule("function_declaration", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("method_declaration", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("func_literal", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        rule("type_declaration", t(C::ExecutionDeclaration), E::None).construct(),
        rule("type_spec", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier).construct(),
        rule("struct_type", t(C::TypeComposite), E::None),
        rule("interface_type", t(C::TypeComposite), E::None),
        rule("field_declaration", tr(C::DefinitionVariable, variable::FIELD), E::FindIdentifier),
        // Variables
        rule("var_declaration", t(C::ExecutionDeclaration), E::None).construct(),
        rule("const_declaration", t(C::ExecutionDeclaration), E::None).construct(),
        rule("var_spec", tr(C::DefinitionVariable, variable::MUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("const_spec", tr(C::DefinitionVariable, variable::IMMUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("short_var_declaration", tr(C::DefinitionVariable, variable::MUTABLE), E::Custom("short_var_name"))
            .construct(),
        rule("parameter_declaration", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("variadic_parameter_declaration", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        // Calls and access
        rule("call_expression", tr(C::ComputationCall, call::FUNCTION), E::FindCallTarget)
            .construct(),
        rule("selector_expression", t(C::ComputationAccess), E::FindProperty),
        rule("index_expression", t(C::ComputationAccess), E::None),
        // Concurrency
        rule("go_statement", t(C::FlowSync), E::None).construct(),
        rule("defer_statement", t(C::ErrorFinally), E::None).construct(),
        rule("send_statement", t(C::FlowSync), E::None).construct(),
        rule("channel_type", t(C::TypeReference), E::None),
        // Control flow
        rule("if_statement", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("expression_switch_statement", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("type_switch_statement", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("select_statement", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("expression_case", t(C::PatternMatch), E::None),
        rule("type_case", t(C::PatternMatch), E::None),
        rule("default_case", t(C::PatternMatch), E::None),
        rule("communication_case", t(C::PatternMatch), E::None),
        rule("for_statement", tr(C::FlowLoop, looping::COUNTER), E::None).construct(),
        rule("range_clause", tr(C::FlowLoop, looping::ITERATOR), E::None),
        rule("return_statement", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        rule("break_statement", tr(C::FlowJump, jump::BREAK), E::None).construct(),
        rule("continue_statement", tr(C::FlowJump, jump::CONTINUE), E::None).construct(),
        rule("goto_statement", tr(C::FlowJump, jump::GOTO), E::None).construct(),
        rule("labeled_statement", tr(C::FlowJump, jump::GOTO), E::None),
        // Imports
        rule("import_declaration", tr(C::ExternalImport, import::MODULE), E::None).construct(),
        rule("import_spec", tr(C::ExternalImport, import::MODULE), E::None),
        rule("import_spec_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        // Names
        rule("identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("type_identifier", tr(C::NameIdentifier, identifier::TYPE), E::NodeText),
        rule("field_identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("package_identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("label_name", tr(C::NameIdentifier, identifier::LABEL), E::NodeText),
        // Literals
        rule("int_literal", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("float_literal", tr(C::LiteralNumber, number::FLOAT), E::NodeText),
        rule("imaginary_literal", tr(C::LiteralNumber, number::COMPLEX), E::NodeText),
        rule("interpreted_string_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("raw_string_literal", tr(C::LiteralString, string::RAW), E::NodeText),
        rule("rune_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("true", t(C::LiteralAtomic), E::NodeText),
        rule("false", t(C::LiteralAtomic), E::NodeText),
        rule("nil", t(C::LiteralAtomic), E::NodeText),
        rule("composite_literal", tr(C::LiteralStructured, structured::GENERIC), E::None),
        // Expressions and operators
        rule("binary_expression", t(C::ComputationExpression), E::None),
        rule("unary_expression", t(C::ComputationExpression), E::None),
        rule("assignment_statement", tr(C::OperatorAssignment, assignment::SIMPLE), E::None)
            .construct(),
        rule("inc_statement", tr(C::OperatorArithmetic, arithmetic::UNARY), E::None),
        rule("dec_statement", tr(C::OperatorArithmetic, arithmetic::UNARY), E::None),
        rule(":=", tr(C::OperatorAssignment, assignment::SIMPLE), E::NodeText),
        rule("=", tr(C::OperatorAssignment, assignment::SIMPLE), E::NodeText),
        rule("==", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("!=", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("&&", t(C::OperatorLogical), E::NodeText),
        rule("||", t(C::OperatorLogical), E::NodeText),
        rule("<-", t(C::FlowSync), E::NodeText),
        // Organization
        rule("block", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("parameter_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("argument_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("expression_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("field_declaration_list", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("expression_statement", t(C::ExecutionStatement), E::None),
        // Metadata
        rule("comment", t(C::MetadataComment), E::None),
        // Keywords
        kw("func"),
        kw("type"),
        kw("struct"),
        kw("interface"),
        kw("package"),
        kw("import"),
        kw("return"),
        kw("if"),
        kw("else"),
        kw("for"),
        kw("range"),
        kw("switch"),
        kw("case"),
        kw("default"),
        kw("go"),
        kw("defer"),
        kw("select"),
        kw("var"),
        kw("const"),
        kw("chan"),
        kw("map"),
        kw("break"),
        kw("continue"),
        kw("goto"),
        punct("{"),
        punct("}"),
    ]
}

/// `a, b := ...` keeps its targets in an `expression_list`; surface the
/// first one as the declaration's name
fn short_var_name(
    node: tree_sitter::Node<'_>,
    _snapshot: &ContextSnapshot<'_>,
    source: &str,
) -> Option<String> {
    let left = node.child_by_field_name("left")?;
    let mut cursor = left.walk();
    let found = left
        .children(&mut cursor)
        .find(|child| child.kind() == "identifier")?;
    node_text(found, source)
}
