//! JavaScript (and JSX) rule table
//!
//! Grammar notes: `class` is both the keyword token and the
//! class-expression node kind — a context rule keeps the token inside
//! `class_declaration` a keyword while the bare kind stays a definition.
//! Anonymous functions take their name from an enclosing declarator.

use super::{kw, punct, rule, t, tr};
use crate::registry::LanguageSpec;
use crate::rules::{ContextPredicate, ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    arithmetic, assignment, call, class, comparison, conditional, function, identifier, import,
    jump, looping, number, organization, string, structured, variable,
};
use crate::semantic::Category as C;

pub(crate) const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "statement_identifier",
];

pub(crate) fn spec() -> LanguageSpec {
    LanguageSpec {
        rules: base_rules(),
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: Vec::new(),
    }
}

/// The JS table; TypeScript layers its own rules on top of this
pub(crate) fn base_rules() -> Vec<NodeTypeRule> {
    vec![
        rule("program", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        // Definitions
        rule("function_declaration", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("generator_function_declaration", tr(C::DefinitionFunction, function::ASYNC), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("function_expression", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        rule("generator_function", tr(C::DefinitionFunction, function::ASYNC), E::FindAssignmentTarget)
            .construct(),
        rule("arrow_function", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .native(NativeStrategy::FunctionSignature)
            .construct(),
        rule("method_definition", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("class_declaration", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        // `class` the keyword vs `class` the expression node
        rule("class", t(C::NameKeyword), E::NodeText)
            .when(ContextPredicate::ParentIs("class_declaration"))
            .keyword(),
        rule("class", tr(C::DefinitionClass, class::REGULAR), E::FindAssignmentTarget).construct(),
        rule("class_heritage", t(C::TypeReference), E::None),
        // Variables
        rule("variable_declaration", t(C::ExecutionDeclaration), E::None).construct(),
        rule("lexical_declaration", t(C::ExecutionDeclaration), E::None).construct(),
        rule("variable_declarator", tr(C::DefinitionVariable, variable::MUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("formal_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        // Calls and access
        rule("call_expression", tr(C::ComputationCall, call::FUNCTION), E::FindCallTarget)
            .construct(),
        rule("new_expression", tr(C::ComputationCall, call::CONSTRUCTOR), E::FindCallTarget)
            .construct(),
        rule("member_expression", t(C::ComputationAccess), E::FindProperty),
        rule("subscript_expression", t(C::ComputationAccess), E::None),
        rule("await_expression", t(C::FlowSync), E::None).construct(),
        rule("yield_expression", t(C::FlowSync), E::None).construct(),
        // Control flow
        rule("if_statement", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("else_clause", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("switch_statement", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("switch_case", t(C::PatternMatch), E::None),
        rule("switch_default", t(C::PatternMatch), E::None),
        rule("ternary_expression", tr(C::FlowConditional, conditional::TERNARY), E::None),
        rule("?", tr(C::FlowConditional, conditional::TERNARY), E::None)
            .when(ContextPredicate::ParentIs("ternary_expression")),
        punct("?"),
        rule("for_statement", tr(C::FlowLoop, looping::COUNTER), E::None).construct(),
        rule("for_in_statement", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("while_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("do_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("return_statement", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        rule("break_statement", tr(C::FlowJump, jump::BREAK), E::None).construct(),
        rule("continue_statement", tr(C::FlowJump, jump::CONTINUE), E::None).construct(),
        rule("labeled_statement", tr(C::FlowJump, jump::GOTO), E::FindIdentifier),
        // Error handling
        rule("try_statement", t(C::ErrorTry), E::None).construct(),
        rule("catch_clause", t(C::ErrorCatch), E::None),
        rule("finally_clause", t(C::ErrorFinally), E::None),
        rule("throw_statement", t(C::ErrorThrow), E::None).construct(),
        // Imports and exports
        rule("import_statement", tr(C::ExternalImport, import::SELECTIVE), E::None).construct(),
        rule("import_clause", tr(C::ExternalImport, import::SELECTIVE), E::None),
        rule("namespace_import", tr(C::ExternalImport, import::WILDCARD), E::None),
        rule("export_statement", t(C::ExternalExport), E::None).construct(),
        // Assignments and operators
        rule("assignment_expression", tr(C::OperatorAssignment, assignment::SIMPLE), E::None)
            .construct(),
        rule("augmented_assignment_expression", tr(C::OperatorAssignment, assignment::COMPOUND), E::None)
            .construct(),
        rule("binary_expression", t(C::ComputationExpression), E::None),
        rule("unary_expression", t(C::ComputationExpression), E::None),
        rule("update_expression", t(C::ComputationExpression), E::None),
        rule("parenthesized_expression", t(C::ComputationExpression), E::None),
        rule("sequence_expression", t(C::ComputationExpression), E::None),
        rule("+", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("-", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("*", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("/", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("%", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("==", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("===", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("!=", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("!==", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("<", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule(">", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule("<=", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule(">=", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule("&&", t(C::OperatorLogical), E::NodeText),
        rule("||", t(C::OperatorLogical), E::NodeText),
        rule("??", t(C::OperatorLogical), E::NodeText),
        rule("=", tr(C::OperatorAssignment, assignment::SIMPLE), E::NodeText),
        // Patterns
        rule("object_pattern", t(C::PatternDestructure), E::None),
        rule("array_pattern", t(C::PatternDestructure), E::None),
        rule("spread_element", t(C::PatternDestructure), E::None),
        rule("rest_pattern", t(C::PatternDestructure), E::None),
        // Names
        rule("identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("property_identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("shorthand_property_identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("this", t(C::NameScoped), E::NodeText).keyword(),
        rule("super", t(C::NameScoped), E::NodeText).keyword(),
        // Literals
        rule("number", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("string", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("template_string", tr(C::LiteralString, string::TEMPLATE), E::NodeText),
        rule("regex", tr(C::LiteralString, string::REGEX), E::NodeText),
        rule("true", t(C::LiteralAtomic), E::NodeText),
        rule("false", t(C::LiteralAtomic), E::NodeText),
        rule("null", t(C::LiteralAtomic), E::NodeText),
        rule("undefined", t(C::LiteralAtomic), E::NodeText),
        rule("array", tr(C::LiteralStructured, structured::SEQUENCE), E::None),
        rule("object", tr(C::LiteralStructured, structured::MAPPING), E::None),
        rule("pair", tr(C::OrganizationList, organization::MAPPING), E::None),
        // Organization
        rule("statement_block", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("class_body", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("arguments", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("expression_statement", t(C::ExecutionStatement), E::None),
        // Metadata
        rule("comment", t(C::MetadataComment), E::None),
        // Keywords
        kw("function"),
        kw("const"),
        kw("let"),
        kw("var"),
        kw("return"),
        kw("if"),
        kw("else"),
        kw("for"),
        kw("while"),
        kw("do"),
        kw("switch"),
        kw("case"),
        kw("default"),
        kw("new"),
        kw("try"),
        kw("catch"),
        kw("finally"),
        kw("throw"),
        kw("import"),
        kw("export"),
        kw("from"),
        kw("async"),
        kw("await"),
        kw("of"),
        kw("in"),
        kw("typeof"),
        kw("instanceof"),
        kw("delete"),
        kw("yield"),
        kw("extends"),
        kw("static"),
        kw("get"),
        kw("set"),
    ]
}
