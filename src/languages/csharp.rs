//! C# rule table
//!
//! Grammar notes: like Java, one `method_declaration` production covers
//! interface prototypes and bodied methods (expression-bodied members
//! included, via the `body` field), so the rule is declaration-only and
//! the classifier's body check flips defined forms.

use super::{kw, punct, rule, t, tr};
use crate::registry::LanguageSpec;
use crate::rules::{ExtractionStrategy as E, NativeStrategy, NodeTypeRule};
use crate::semantic::refinement::{
    assignment, call, class, comparison, conditional, function, identifier, import, jump, looping,
    number, organization, query, string, variable,
};
use crate::semantic::Category as C;

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
        rule("compilation_unit", tr(C::OrganizationContainer, organization::HIERARCHICAL), E::None),
        rule("namespace_declaration", t(C::DefinitionModule), E::FindIdentifier).embodied(),
        rule("file_scoped_namespace_declaration", t(C::DefinitionModule), E::FindIdentifier)
            .construct(),
        rule("using_directive", tr(C::ExternalImport, import::MODULE), E::None).construct(),
        // Type definitions
        rule("class_declaration", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        rule("struct_declaration", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .embodied(),
        rule("record_declaration", tr(C::DefinitionClass, class::REGULAR), E::FindIdentifier)
            .construct(),
        rule("interface_declaration", tr(C::DefinitionClass, class::ABSTRACT), E::FindIdentifier)
            .native(NativeStrategy::ClassSummary)
            .embodied(),
        rule("enum_declaration", tr(C::DefinitionClass, class::ENUM), E::FindIdentifier)
            .embodied(),
        rule("base_list", t(C::TypeReference), E::None),
        // Members
        rule("method_declaration", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .declaration_only(),
        rule("local_function_statement", tr(C::DefinitionFunction, function::REGULAR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("constructor_declaration", tr(C::DefinitionFunction, function::CONSTRUCTOR), E::FindIdentifier)
            .native(NativeStrategy::FunctionSignature)
            .embodied(),
        rule("destructor_declaration", tr(C::DefinitionFunction, function::CONSTRUCTOR), E::FindIdentifier)
            .embodied(),
        rule("property_declaration", tr(C::DefinitionVariable, variable::FIELD), E::FindIdentifier),
        rule("field_declaration", t(C::ExecutionDeclaration), E::None),
        rule("event_field_declaration", t(C::ExecutionDeclaration), E::None),
        rule("variable_declaration", t(C::ExecutionDeclaration), E::None),
        rule("variable_declarator", tr(C::DefinitionVariable, variable::MUTABLE), E::FindIdentifier)
            .native(NativeStrategy::VariableBinding)
            .construct(),
        rule("parameter", tr(C::DefinitionVariable, variable::PARAMETER), E::FindIdentifier),
        rule("accessor_declaration", tr(C::DefinitionFunction, function::REGULAR), E::None),
        // Calls and access
        rule("invocation_expression", tr(C::ComputationCall, call::METHOD), E::FindCallTarget)
            .construct(),
        rule("object_creation_expression", tr(C::ComputationCall, call::CONSTRUCTOR), E::FindCallTarget)
            .construct(),
        rule("member_access_expression", t(C::ComputationAccess), E::FindProperty),
        rule("element_access_expression", t(C::ComputationAccess), E::None),
        rule("lambda_expression", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .native(NativeStrategy::FunctionSignature)
            .construct(),
        rule("anonymous_method_expression", tr(C::DefinitionFunction, function::LAMBDA), E::FindAssignmentTarget)
            .construct(),
        rule("await_expression", t(C::FlowSync), E::None).construct(),
        // LINQ
        rule("query_expression", tr(C::TransformQuery, query::SIMPLE), E::None).construct(),
        rule("from_clause", tr(C::TransformQuery, query::SIMPLE), E::None),
        rule("where_clause", tr(C::TransformQuery, query::FILTERED), E::None),
        rule("select_clause", tr(C::TransformQuery, query::SIMPLE), E::None),
        rule("group_clause", tr(C::TransformQuery, query::GROUPED), E::None),
        // Control flow
        rule("if_statement", tr(C::FlowConditional, conditional::BINARY), E::None).construct(),
        rule("switch_statement", tr(C::FlowConditional, conditional::MULTIWAY), E::None)
            .construct(),
        rule("switch_expression", tr(C::FlowConditional, conditional::MULTIWAY), E::None),
        rule("switch_section", t(C::PatternMatch), E::None),
        rule("switch_expression_arm", t(C::PatternMatch), E::None),
        rule("conditional_expression", tr(C::FlowConditional, conditional::TERNARY), E::None),
        rule("for_statement", tr(C::FlowLoop, looping::COUNTER), E::None).construct(),
        rule("foreach_statement", tr(C::FlowLoop, looping::ITERATOR), E::None).construct(),
        rule("while_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("do_statement", tr(C::FlowLoop, looping::CONDITIONAL), E::None).construct(),
        rule("return_statement", tr(C::FlowJump, jump::RETURN), E::None).construct(),
        rule("break_statement", tr(C::FlowJump, jump::BREAK), E::None).construct(),
        rule("continue_statement", tr(C::FlowJump, jump::CONTINUE), E::None).construct(),
        rule("goto_statement", tr(C::FlowJump, jump::GOTO), E::None).construct(),
        rule("yield_statement", t(C::FlowSync), E::None).construct(),
        rule("lock_statement", t(C::FlowSync), E::None).construct(),
        // Error handling
        rule("try_statement", t(C::ErrorTry), E::None).construct(),
        rule("catch_clause", t(C::ErrorCatch), E::None),
        rule("finally_clause", t(C::ErrorFinally), E::None),
        rule("throw_statement", t(C::ErrorThrow), E::None).construct(),
        rule("throw_expression", t(C::ErrorThrow), E::None),
        // Operators and expressions
        rule("assignment_expression", tr(C::OperatorAssignment, assignment::SIMPLE), E::None)
            .construct(),
        rule("binary_expression", t(C::ComputationExpression), E::None),
        rule("prefix_unary_expression", t(C::ComputationExpression), E::None),
        rule("postfix_unary_expression", t(C::ComputationExpression), E::None),
        rule("is_pattern_expression", tr(C::OperatorComparison, comparison::MEMBERSHIP), E::None),
        rule("cast_expression", t(C::ComputationExpression), E::None),
        rule("=", tr(C::OperatorAssignment, assignment::SIMPLE), E::NodeText),
        rule("==", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("!=", tr(C::OperatorComparison, comparison::EQUALITY), E::NodeText),
        rule("&&", t(C::OperatorLogical), E::NodeText),
        rule("||", t(C::OperatorLogical), E::NodeText),
        rule("??", t(C::OperatorLogical), E::NodeText),
        // Names
        rule("identifier", tr(C::NameIdentifier, identifier::VARIABLE), E::NodeText),
        rule("qualified_name", t(C::NameQualified), E::FindProperty),
        rule("this_expression", t(C::NameScoped), E::NodeText).keyword(),
        rule("base_expression", t(C::NameScoped), E::NodeText).keyword(),
        // Types
        rule("predefined_type", t(C::TypePrimitive), E::NodeText),
        rule("nullable_type", t(C::TypeReference), E::None),
        rule("array_type", t(C::TypeComposite), E::None),
        rule("generic_name", t(C::TypeGeneric), E::FindIdentifier),
        // Literals
        rule("integer_literal", tr(C::LiteralNumber, number::INTEGER), E::NodeText),
        rule("real_literal", tr(C::LiteralNumber, number::FLOAT), E::NodeText),
        rule("string_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("verbatim_string_literal", tr(C::LiteralString, string::RAW), E::NodeText),
        rule("interpolated_string_expression", tr(C::LiteralString, string::TEMPLATE), E::NodeText),
        rule("character_literal", tr(C::LiteralString, string::LITERAL), E::NodeText),
        rule("boolean_literal", t(C::LiteralAtomic), E::NodeText),
        rule("null_literal", t(C::LiteralAtomic), E::NodeText),
        // Organization
        rule("block", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("declaration_list", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("enum_member_declaration_list", tr(C::OrganizationBlock, organization::SEQUENTIAL), E::None),
        rule("parameter_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("argument_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("type_argument_list", tr(C::OrganizationList, organization::COLLECTION), E::None),
        rule("expression_statement", t(C::ExecutionStatement), E::None),
        rule("arrow_expression_clause", t(C::OrganizationBlock), E::None),
        // Metadata
        rule("comment", t(C::MetadataComment), E::None),
        rule("attribute_list", t(C::MetadataAnnotation), E::None),
        rule("attribute", t(C::MetadataAnnotation), E::FindIdentifier),
        rule("modifier", t(C::NameKeyword), E::NodeText).keyword(),
        // Keywords
        kw("class"),
        kw("namespace"),
        kw("using"),
        kw("void"),
        kw("new"),
        kw("return"),
        kw("if"),
        kw("else"),
        kw("for"),
        kw("foreach"),
        kw("while"),
        kw("do"),
        kw("switch"),
        kw("case"),
        kw("default"),
        kw("try"),
        kw("catch"),
        kw("finally"),
        kw("throw"),
        kw("async"),
        kw("await"),
        kw("var"),
        kw("in"),
        kw("is"),
        kw("get"),
        kw("set"),
        punct(";"),
        punct(","),
    ]
}
