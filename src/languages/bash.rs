//! Bash rule table
//!
//! Grammar notes: functions come in two spellings (`function foo { }` and
//! `foo() { }`) whose name node sits in different positions — a custom
//! hook covers both. Commands are the language's call shape.

use super::{kw, rule, t, tr};
use crate::extract::node_text;
use crate::registry::{LanguageSpec, NameHook};
use crate::rules::{ContextSnapshot, ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    assignment, call, conditional, function, identifier, looping, number, organization, string,
};
use crate::semantic::Category as C;

const IDENTIFIER_KINDS: &[&str] = &["word", "variable_name", "command_name"];

pub(crate) fn spec() -> LanguageSpec {
    LanguageSpec {
        rules: rules(),
        identifier_kinds: IDENTIFIER_KINDS,
        hooks: vec![("function_name", function_name as NameHook)],
    }
}

fn rules() -> Vec<NodeTypeRule> {
    vec![
        rule("program", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        // Functions and commands
        rule("function_definition", tr(C::DefinitionFunction, function::REGULAR), E::Custom("function_name"))
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("command", t(C::ExecutionInvocation), E::FindCallTarget).construct(),
        rule("command_name", tr(C::NameIdentifier, identifier::FUNCTION), E::NodeText),
        rule("command_substitution", tr(C::ComputationCall, call::FUNCTION), E::None).construct(),
        rule("process_substitution", tr(C::ComputationCall, call::FUNCTION), E::None),
        rule("pipeline", t(C::ComputationExpression), E::None).construct(),
        rule("list", t(C::ExecutionStatement), E::None),
        rule("redirected_statement", t(C::ExecutionStatement), E::None),
        rule("file_redirect", t(C::ExternalForeign), E::None),
        // Variables
        rule("variable_assignment", tr(C::OperatorAssignment, assignment::SIMPLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("variable_name", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("simple_expansion", t(C::ComputationAccess), E::NodeText),
        rule("expansion", t(C::ComputationAccess), E::NodeText),
        rule("declaration_command", t(C::ExecutionDeclaration), E::None).construct(),
        rule("unset_command", t(C::ExecutionMutation), E::None),
        // Control flow
        rule("if_statement", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("elif_clause", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("else_clause", tr(C::FlowConditional, conditional::BINARY), E::None),
        rule("case_statement", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("case_item", t(C::PatternMatch), E::None),
        rule("for_statement", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("c_style_for_statement", tr(C::FlowLoop, looping::COUNTER), E::None).construct(),
        rule("while_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("until_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("test_command", tr(C::FlowConditional, conditional::GUARD), E::None).construct(),
        // Words and literals
        rule("word", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("string", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("raw_string", tr(C::LiteralString, string::RAW), E::NodeText),
        rule("ansi_c_string", tr(C::LiteralString, string::RAW), E::NodeText),
        rule("number", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("concatenation", t(C::ComputationExpression), E::None),
        // Organization
        rule("compound_statement", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("subshell", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("do_group", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        // Metadata
        rule("comment", t(C::MetadataComment), E::None),
        // Keywords
        kw("if"),
        kw("then"),
        kw("else"),
        kw("elif"),
        kw("fi"),
        kw("for"),
        kw("while"),
        kw("until"),
        kw("do"),
        kw("done"),
        kw("case"),
        kw("esac"),
        kw("function"),
        kw("in"),
        kw("local"),
        kw("export"),
    ]
}

/// Both function spellings: `function foo { }` and `foo() { }`.
///
/// The grammar exposes a `name` field for both, but older grammar
/// revisions only attach it to one shape — fall back to the first `word`.
fn function_name(
    node: tree_sitter::Node<'_>,
    _snapshot: &ContextSnapshot<'_>,
    source: &str,
) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return node_text(name, source);
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|child| child.kind() == "word")?;
    node_text(found, source)
}
