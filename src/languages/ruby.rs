//! Ruby rule table
//!
//! Grammar notes: control-flow node kinds are bare words (`if`, `while`,
//! `case`), classes name themselves with `constant` nodes, and blocks
//! (`do_block`/`block`) are the language's pervasive closure shape.

use super::{kw, rule, t, tr};
use crate::registry::LanguageSpec;
use crate::rules::{ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    arithmetic, assignment, call, class, conditional, function, identifier, jump, looping, number,
    organization, string, structured, variable,
};
use crate::semantic::Category as C;

const IDENTIFIER_KINDS: &[&str] = &["identifier", "constant"];

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
        // Definitions
        rule("method", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("singleton_method", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .embodied(),
        rule("class", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        rule("singleton_class", tr(C::DefinitionClass, class::REGULAR), E::None).embodied(),
        rule("module", t(C::DefinitionModule), E::FindIdentifier).embodied(),
        rule("superclass", t(C::TypeReference), E::None),
        rule("lambda", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        rule("block", tr(C::DefinitionFunction, function::LAMBDA), E::None).construct(),
        rule("do_block", tr(C::DefinitionFunction, function::LAMBDA), E::None).construct(),
        // Calls and access
        rule("call", tr(C::ComputationCall, call::METHOD), E::FindCallTarget).construct(),
        rule("element_reference", t(C::ComputationAccess), E::None),
        rule("scope_resolution", t(C::NameQualified), E::FindProperty),
        // Assignments
        rule("assignment", tr(C::OperatorAssignment, assignment::SIMPLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("operator_assignment", tr(C::OperatorAssignment, assignment::COMPOUND), E::FindIdentifier)
            .construct(),
        rule("multiple_assignment", tr(C::OperatorAssignment, assignment::DESTRUCTURE), E::None),
        // Parameters
        rule("method_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("block_parameters", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("optional_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("keyword_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("splat_parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        // Control flow
        rule("if", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("unless", tr(C::FlowConditional, conditional::GUARD), E::None).construct(),
        rule("elsif", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("else", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("if_modifier", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("unless_modifier", tr(C::FlowConditional, conditional::GUARD), E::None),
        rule("conditional", tr(C::FlowConditional, conditional::TERNARY), E::None),
        rule("case", tr(C::FlowConditional, conditional::MULTIWAY), E::None).construct(),
        rule("when", t(C::PatternMatch), E::None),
        rule("in_clause", t(C::PatternMatch), E::None),
        rule("while", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("until", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("while_modifier", tr(C::FlowLoop, looping::CONDITIONAL), E::None),
        rule("for", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("return", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        rule("break", tr(C::FlowJump, jump::BREAK), E::None).construct(),
        rule("next", tr(C::FlowJump, jump::CONTINUE), E::None).construct(),
        rule("redo", tr(C::FlowJump, jump::CONTINUE), E::None),
        rule("retry", tr(C::FlowJump, jump::GOTO), E::None),
        rule("yield", t(C::FlowSync), E::None).construct(),
        // Error handling
        rule("begin", t(C::ErrorTry), E::None).construct(),
        rule("rescue", t(C::ErrorCatch), E::None),
        rule("rescue_modifier", t(C::ErrorCatch), E::None),
        rule("ensure", t(C::ErrorFinally), E::None),
        // Names
        rule("identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("constant", tr(C::NameIdentifier, identifier::TYPE), E::NodeText),
        rule("instance_variable", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("class_variable", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("global_variable", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("self", t(C::NameScoped), E::NodeText).keyword(),
        // Literals
        rule("integer", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("float", tr(C::LiteralNumber, number::FLOAT), E::NodeText),
        rule("string", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("heredoc_body", tr(C::LiteralString, string::RAW), E::None),
        rule("regex", tr(C::LiteralString, string::REGEX), E::NodeText),
        rule("simple_symbol", t(C::LiteralAtomic), E::NodeText),
        rule("symbol", t(C::LiteralAtomic), E::NodeText),
        rule("true", t(C::LiteralAtomic), E::NodeText),
        rule("false", t(C::LiteralAtomic), E::NodeText),
        rule("nil", t(C::LiteralAtomic), E::NodeText),
        rule("array", tr(C::LiteralStructured, structured::SEQUENCE), E::None),
        rule("hash", tr(C::LiteralStructured, structured::MAPPING), E::None),
        rule("pair", tr(C::OrganizationList, organization::MAPPING), E::None),
        // Expressions
        rule("binary", t(C::ComputationExpression), E::None),
        rule("unary", t(C::ComputationExpression), E::None),
        rule("range", tr(C::OperatorArithmetic, arithmetic::RANGE), E::None),
        rule("parenthesized_statements", t(C::ComputationExpression), E::None),
        // Organization
        rule("body_statement", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("argument_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("then", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        // Metadata
        rule("comment", t(C::MetadataComment), E::None),
        // Keywords (most Ruby keyword spellings double as named node kinds
        // and are mapped above; only the pure tokens are listed here)
        kw("def"),
        kw("end"),
        kw("do"),
    ]
}
