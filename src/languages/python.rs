//! Python rule table
//!
//! Grammar notes: decorated definitions wrap the real definition one level
//! down (custom hook pulls the inner name), lambdas bind their name only
//! through an enclosing assignment, and `async`/`await` share spellings
//! between keyword tokens and expression nodes.

use super::{kw, punct, rule, t, tr};
use crate::extract::node_text;
use crate::registry::{LanguageSpec, NameHook};
use crate::rules::{ContextSnapshot, ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    arithmetic, assignment, call, class, comparison, conditional, function, identifier, import,
    iteration, jump, looping, number, organization, string, structured, variable,
};
use crate::semantic::Category as C;

const IDENTIFIER_KINDS: &[&str] = &["identifier"];

pub(crate) fn spec() -> LanguageSpec {
    LanguageSpec {
        rules: rules(),
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: vec![("decorated_name", decorated_name as NameHook)],
    }
}

fn rules() -> Vec<NodeTypeRule> {
    vec![
        rule("module", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        // Definitions
        rule("function_definition", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("lambda", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        rule("class_definition", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        rule("decorated_definition", t(C::MetadataAnnotation), E::Custom("decorated_name"))
            .construct(),
        rule("decorator", t(C::MetadataAnnotation), E::FindIdentifier),
        // Assignments and parameters
        rule("assignment", tr(C::OperatorAssignment, assignment::SIMPLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("augmented_assignment", tr(C::OperatorAssignment, assignment::COMPOUND), E::FindIdentifier)
            .construct(),
        rule("typed_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("default_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("typed_default_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("global_statement", t(C::ExecutionMutation), E::None),
        rule("nonlocal_statement", t(C::ExecutionMutation), E::None),
        // Calls and access
        rule("call", tr(C::ComputationCall, call::FUNCTION), E::FindCallTarget).construct(),
        rule("attribute", t(C::ComputationAccess), E::FindProperty),
        rule("subscript", t(C::ComputationAccess), E::None),
        // Control flow
        rule("if_statement", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("elif_clause", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("else_clause", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("conditional_expression", tr(C::FlowConditional, conditional::TERNARY), E::None),
        rule("match_statement", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("case_clause", t(C::PatternMatch), E::None),
        rule("case_pattern", t(C::PatternMatch), E::None),
        rule("for_statement", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("while_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("return_statement", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        rule("break_statement", tr(C::FlowJump, jump::BREAK), E::None).construct(),
        rule("continue_statement", tr(C::FlowJump, jump::CONTINUE), E::None).construct(),
        rule("pass_statement", t(C::ExecutionStatement), E::None),
        rule("with_statement", t(C::ExecutionStatement), E::None).construct(),
        rule("await", t(C::FlowSync), E::None).construct(),
        rule("yield", t(C::FlowSync), E::None).construct(),
        // Comprehensions
        rule("list_comprehension", tr(C::TransformIteration, iteration::MAP), E::None).construct(),
        rule("set_comprehension", tr(C::TransformIteration, iteration::MAP), E::None).construct(),
        rule("dictionary_comprehension", tr(C::TransformIteration, iteration::MAP), E::None)
            .construct(),
        rule("generator_expression", tr(C::TransformIteration, iteration::MAP), E::None)
            .construct(),
        // Error handling
        rule("try_statement", t(C::ErrorTry), E::None).construct(),
        rule("except_clause", t(C::ErrorCatch), E::None),
        rule("finally_clause", t(C::ErrorFinally), E::None),
        rule("raise_statement", t(C::ErrorThrow), E::None).construct(),
        // Imports
        rule("import_statement", tr(C::ExternalImport, import::MODULE), E::None).construct(),
        rule("import_from_statement", tr(C::ExternalImport, import::SELECTIVE), E::None)
            .construct(),
        rule("wildcard_import", tr(C::ExternalImport, import::WILDCARD), E::None),
        rule("aliased_import", tr(C::ExternalImport, import::SELECTIVE), E::FindIdentifier),
        // Names
        rule("identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("dotted_name", t(C::NameQualified), E::FindProperty),
        // Literals
        rule("integer", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("float", tr(C::LiteralNumber, number::FLOAT), E::NodeText),
        rule("string", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("true", t(C::LiteralAtomic), E::NodeText),
        rule("false", t(C::LiteralAtomic), E::NodeText),
        rule("none", t(C::LiteralAtomic), E::NodeText),
        rule("ellipsis", t(C::LiteralAtomic), E::NodeText),
        rule("list", tr(C::LiteralStructured, structured::SEQUENCE), E::None),
        rule("tuple", tr(C::LiteralStructured, structured::SEQUENCE), E::None),
        rule("dictionary", tr(C::LiteralStructured, structured::MAPPING), E::None),
        rule("set", tr(C::LiteralStructured, structured::SET), E::None),
        rule("pair", tr(C::OrganizationList, organization::MAPPING), E::None),
        // Expressions and operators
        rule("binary_operator", t(C::ComputationExpression), E::None),
        rule("boolean_operator", t(C::ComputationExpression), E::None),
        rule("comparison_operator", t(C::ComputationExpression), E::None),
        rule("not_operator", t(C::ComputationExpression), E::None),
        rule("unary_operator", t(C::ComputationExpression), E::None),
        rule("expression_statement", t(C::ExecutionStatement), E::None),
        rule("+", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("-", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("*", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("/", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("//", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("%", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("**", tr(C::OperatorArithmetic, arithmetic::BINARY), E::NodeText),
        rule("==", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("!=", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("<", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule(">", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule("<=", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule(">=", tr(C::OperatorComparison, comparison::RELATIONAL), E::NodeText),
        rule("=", tr(C::OperatorAssignment, assignment::SIMPLE), E::NodeText),
        rule("and", t(C::OperatorLogical), E::NodeText).keyword(),
        rule("or", t(C::OperatorLogical), E::NodeText).keyword(),
        rule("not", t(C::OperatorLogical), E::NodeText).keyword(),
        rule("in", tr(C::OperatorComparison, comparison::MEMBERSHIP), E::NodeText).keyword(),
        rule("is", tr(C::OperatorComparison, comparison::MEMBERSHIP), E::NodeText).keyword(),
        // Organization
        rule("block", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("lambda_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("argument_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("keyword_argument", tr(C::OrganizationList, organization::MAPPING), E::FindIdentifier),
        // Metadata
        rule("comment", t(C::MetadataComment), E::None),
        // Keywords
        kw("def"),
        kw("class"),
        kw("if"),
        kw("elif"),
        kw("else"),
        kw("for"),
        kw("while"),
        kw("return"),
        kw("import"),
        kw("from"),
        kw("try"),
        kw("except"),
        kw("finally"),
        kw("raise"),
        kw("async"),
        kw("with"),
        kw("as"),
        kw("pass"),
        kw("global"),
        kw("nonlocal"),
        kw("match"),
        kw("case"),
        punct(":"),
        punct(","),
    ]
}

/// Decorated definitions wrap the real definition; the name lives on the
/// inner `function_definition`/`class_definition`
fn decorated_name(
    node: tree_sitter::Node<'_>,
    _snapshot: &ContextSnapshot<'_>,
    source: &str,
) -> Option<String> {
    let definition = node.child_by_field_name("definition")?;
    let mut cursor = definition.walk();
    let found = definition
        .children(&mut cursor)
        .find(|child| child.kind() == "identifier")?;
    node_text(found, source)
}
