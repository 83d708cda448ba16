//! C rule table
//!
//! Grammar notes: names live behind declarator chains
//! (`function_declarator`, `pointer_declarator`, `init_declarator`), so
//! definitions and declarations share a custom hook that unwraps them.
//! Struct/union/enum specifiers are declaration-only by default — the
//! classifier's body check flips full definitions to embodied.

use super::{kw, punct, rule, t, tr};
use crate::extract::node_text;
use crate::registry::{LanguageSpec, NameHook};
use crate::rules::{ContextPredicate, ContextSnapshot, ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    arithmetic, assignment, call, class, comparison, conditional, function, identifier, import,
    jump, looping, number, organization, string, variable,
};
use crate::semantic::Category as C;

pub(crate) const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "field_identifier",
    "statement_identifier",
];

pub(crate) fn spec() -> LanguageSpec {
    LanguageSpec {
        rules: base_rules(),
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: vec![("declarator_name", declarator_name as NameHook)],
    }
}

/// The C table; the C++ table layers on top of this
pub(crate) fn base_rules() -> Vec<NodeTypeRule> {
    vec![
        rule("translation_unit", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        // Definitions and declarations
        rule("function_definition", tr(C::DefinitionFunction, function::REGULAR), E::Custom("declarator_name"))
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("declaration", t(C::ExecutionDeclaration), E::Custom("declarator_name")).construct(),
        rule("struct_specifier", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .declaration_only(),
        rule("union_specifier", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .declaration_only(),
        rule("enum_specifier", tr(C::DefinitionClass, class::ENUM), E::FindIdentifier)
            .declaration_only(),
        rule("type_definition", t(C::TypeComposite), E::FindIdentifier).construct(),
        rule("field_declaration", tr(C::DefinitionVariable, variable::FIELD), E::Custom("declarator_name")),
        rule("init_declarator", tr(C::DefinitionVariable, variable::MUTABLE), E::Custom("declarator_name"))
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("parameter_declaration", tr(C::DefinitionVariable, variable::PARAMETER), E::Custom("declarator_name")),
        rule("enumerator", tr(C::DefinitionVariable, variable::IMMUTABLE), E::FindIdentifier),
        rule("function_declarator", t(C::ParserConstruct), E::None),
        rule("pointer_declarator", t(C::ParserConstruct), E::None),
        rule("array_declarator", t(C::ParserConstruct), E::None),
        // Preprocessor
        rule("preproc_include", tr(C::ExternalImport, import::MODULE), E::None).construct(),
        rule("preproc_def", t(C::MetadataDirective), E::FindIdentifier).construct(),
        rule("preproc_function_def", t(C::MetadataDirective), E::FindIdentifier).construct(),
        rule("preproc_ifdef", t(C::MetadataDirective), E::None),
        rule("preproc_if", t(C::MetadataDirective), E::None),
        rule("preproc_else", t(C::MetadataDirective), E::None),
        rule("preproc_call", t(C::MetadataDirective), E::None),
        // Calls and access
        rule("call_expression", tr(C::ComputationCall, call::FUNCTION), E::FindCallTarget)
            .construct(),
        rule("field_expression", t(C::ComputationAccess), E::FindProperty),
        rule("subscript_expression", t(C::ComputationAccess), E::None),
        rule("pointer_expression", t(C::ComputationExpression), E::None),
        rule("cast_expression", t(C::ComputationExpression), E::None),
        rule("sizeof_expression", tr(C::OperatorArithmetic, arithmetic::UNARY), E::None),
        // Control flow
        rule("if_statement", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("else_clause", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("switch_statement", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("case_statement", t(C::PatternMatch), E::None),
        rule("conditional_expression", tr(C::FlowConditional, conditional::TERNARY), E::None),
        rule("?", tr(C::FlowConditional, conditional::TERNARY), E::None)
            .when(ContextPredicate::ParentIs("conditional_expression")),
        punct("?"),
        rule("for_statement", tr(C::FlowLoop, looping::COUNTER), E::None).construct(),
        rule("while_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("do_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("return_statement", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        rule("break_statement", tr(C::FlowJump, jump::BREAK), E::None).construct(),
        rule("continue_statement", tr(C::FlowJump, jump::CONTINUE), E::None).construct(),
        rule("goto_statement", tr(C::FlowJump, jump::GOTO), E::FindIdentifier).construct(),
        rule("labeled_statement", tr(C::FlowJump, jump::GOTO), E::FindIdentifier),
        // Operators and expressions
        rule("assignment_expression", tr(C::OperatorAssignment, assignment::SIMPLE), E::None)
            .construct(),
        rule("binary_expression", t(C::ComputationExpression), E::None),
        rule("unary_expression", t(C::ComputationExpression), E::None),
        rule("update_expression", t(C::ComputationExpression), E::None),
        rule("comma_expression", t(C::ComputationExpression), E::None),
        rule("parenthesized_expression", t(C::ComputationExpression), E::None),
        rule("=", tr(C::OperatorAssignment, assignment::SIMPLE), E::NodeText),
        rule("==", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("!=", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("<", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule(">", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule("&&", t(C::OperatorLogical), E::NodeText),
        rule("||", t(C::OperatorLogical), E::NodeText),
        rule("+", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("-", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("*", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("/", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("%", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("<<", tr(C::OperatorArithmetic, arithmetic::BITWISE), E::NodeText),
        rule(">>", tr(C::OperatorArithmetic, arithmetic::BITWISE), E::NodeText),
        // Names
        rule("identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("type_identifier", tr(C::NameIdentifier, identifier::TYPE), E::NodeText),
        rule("field_identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("statement_identifier", tr(C::NameIdentifier, identifier::LABEL), E::NodeText),
        // Types
        rule("primitive_type", t(C::TypePrimitive), E::NodeText),
        rule("sized_type_specifier", t(C::TypePrimitive), E::NodeText),
        rule("storage_class_specifier", t(C::NameKeyword), E::NodeText).keyword(),
        rule("type_qualifier", t(C::NameKeyword), E::NodeText).keyword(),
        // Literals
        rule("number_literal", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("string_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("char_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("concatenated_string", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("true", t(C::LiteralAtomic), E::NodeText),
        rule("false", t(C::LiteralAtomic), E::NodeText),
        rule("null", t(C::LiteralAtomic), E::NodeText),
        rule("initializer_list", t(C::LiteralStructured), E::None),
        // Organization
        rule("compound_statement", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("field_declaration_list", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("enumerator_list", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("parameter_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("argument_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("expression_statement", t(C::ExecutionStatement), E::None),
        // Metadata
        rule("comment", t(C::MetadataComment), E::None),
        // Keywords
        kw("struct"),
        kw("union"),
        kw("enum"),
        kw("typedef"),
        kw("return"),
        kw("if"),
        kw("else"),
        kw("for"),
        kw("while"),
        kw("do"),
        kw("switch"),
        kw("case"),
        kw("default"),
        kw("break"),
        kw("continue"),
        kw("goto"),
        kw("sizeof"),
        kw("static"),
        kw("extern"),
        kw("const"),
        kw("inline"),
        kw("volatile"),
    ]
}

/// Unwrap a declarator chain to the declared name.
///
/// Handles `int *p`, `int f(void)`, `T (*fp)(int)`, and C++'s
/// `Type Class::method(...)` (via `qualified_identifier`).
pub(crate) fn declarator_name(
    node: tree_sitter::Node<'_>,
    _snapshot: &ContextSnapshot<'_>,
    source: &str,
) -> Option<String> {
    let mut current = node.child_by_field_name("declarator")?;
    for _ in 0..6 {
        match current.kind() {
            "identifier" | "field_identifier" | "type_identifier" | "operator_name"
            | "destructor_name" => return node_text(current, source),
            "qualified_identifier" => {
                current = current.child_by_field_name("name")?;
            }
            _ => {
                if let Some(inner) = current.child_by_field_name("declarator") {
                    current = inner;
                } else {
                    let mut cursor = current.walk();
                    let found = current.children(&mut cursor).find(|child| {
                        matches!(child.kind(), "identifier" | "field_identifier")
                    })?;
                    return node_text(found, source);
                }
            }
        }
    }
    None
}
