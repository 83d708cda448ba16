//! The 8-bit semantic taxonomy every language maps onto
//!
//! One byte per semantic type:
//!
//! ```text
//! [ ss kk cc rr ]
//! ss = super kind (bits 6-7): data structure, computation, control/effects, meta/external
//! kk = kind       (bits 4-5): 4 kinds within each super kind
//! cc = category   (bits 2-3): 4 categories within each kind
//! rr = refinement (bits 0-1): per-category sub-classification
//! ```
//!
//! Bits 2-7 together form the 6-bit category space (64 slots, all named).
//! The taxonomy is closed: languages map their raw node types onto it, they
//! never extend it. Two slots are reserved for the engine itself:
//! `Unclassified` (unmapped raw types) and `ParserSyntax` (grammar ERROR
//! nodes), so degraded input still lands inside the taxonomy.

use serde::{Deserialize, Serialize};

/// Top-level split of the taxonomy (bits 6-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuperKind {
    DataStructure,
    Computation,
    ControlEffects,
    MetaExternal,
}

impl SuperKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DataStructure => "DATA_STRUCTURE",
            Self::Computation => "COMPUTATION",
            Self::ControlEffects => "CONTROL_EFFECTS",
            Self::MetaExternal => "META_EXTERNAL",
        }
    }
}

/// Second-level grouping (bits 4-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Literal,
    Name,
    Pattern,
    Type,
    Operator,
    Computation,
    Transform,
    Definition,
    Execution,
    FlowControl,
    ErrorHandling,
    Organization,
    Metadata,
    External,
    ParserSpecific,
    Reserved,
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Literal => "LITERAL",
            Self::Name => "NAME",
            Self::Pattern => "PATTERN",
            Self::Type => "TYPE",
            Self::Operator => "OPERATOR",
            Self::Computation => "COMPUTATION_NODE",
            Self::Transform => "TRANSFORM",
            Self::Definition => "DEFINITION",
            Self::Execution => "EXECUTION",
            Self::FlowControl => "FLOW_CONTROL",
            Self::ErrorHandling => "ERROR_HANDLING",
            Self::Organization => "ORGANIZATION",
            Self::Metadata => "METADATA",
            Self::External => "EXTERNAL",
            Self::ParserSpecific => "PARSER_SPECIFIC",
            Self::Reserved => "RESERVED",
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits & 0xF0 {
            0x00 => Self::Literal,
            0x10 => Self::Name,
            0x20 => Self::Pattern,
            0x30 => Self::Type,
            0x40 => Self::Operator,
            0x50 => Self::Computation,
            0x60 => Self::Transform,
            0x70 => Self::Definition,
            0x80 => Self::Execution,
            0x90 => Self::FlowControl,
            0xA0 => Self::ErrorHandling,
            0xB0 => Self::Organization,
            0xC0 => Self::Metadata,
            0xD0 => Self::External,
            0xE0 => Self::ParserSpecific,
            _ => Self::Reserved,
        }
    }
}

macro_rules! categories {
    ($( $variant:ident = $byte:literal => $name:literal ),* $(,)?) => {
        /// The 64 semantic categories (6 bits, stored with refinement bits zeroed)
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum Category {
            $( $variant = $byte ),*
        }

        impl Category {
            /// All categories in byte order
            pub const ALL: &'static [Category] = &[ $( Category::$variant ),* ];

            /// Canonical upper-case name, as used in the reference tables
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name ),*
                }
            }

            /// Reverse lookup from a canonical name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Category for any byte value (refinement bits are masked off).
            ///
            /// Total: every 6-bit slot is named, so this cannot fail.
            pub const fn from_byte(byte: u8) -> Self {
                match byte & 0xFC {
                    $( $byte => Self::$variant, )*
                    _ => unreachable!(),
                }
            }
        }
    };
}

categories! {
    // DATA_STRUCTURE / LITERAL
    LiteralNumber = 0x00 => "LITERAL_NUMBER",
    LiteralString = 0x04 => "LITERAL_STRING",
    LiteralAtomic = 0x08 => "LITERAL_ATOMIC",
    LiteralStructured = 0x0C => "LITERAL_STRUCTURED",
    // DATA_STRUCTURE / NAME
    NameKeyword = 0x10 => "NAME_KEYWORD",
    NameIdentifier = 0x14 => "NAME_IDENTIFIER",
    NameQualified = 0x18 => "NAME_QUALIFIED",
    NameScoped = 0x1C => "NAME_SCOPED",
    // DATA_STRUCTURE / PATTERN
    PatternDestructure = 0x20 => "PATTERN_DESTRUCTURE",
    PatternMatch = 0x24 => "PATTERN_MATCH",
    PatternTemplate = 0x28 => "PATTERN_TEMPLATE",
    PatternGuard = 0x2C => "PATTERN_GUARD",
    // DATA_STRUCTURE / TYPE
    TypePrimitive = 0x30 => "TYPE_PRIMITIVE",
    TypeComposite = 0x34 => "TYPE_COMPOSITE",
    TypeReference = 0x38 => "TYPE_REFERENCE",
    TypeGeneric = 0x3C => "TYPE_GENERIC",
    // COMPUTATION / OPERATOR
    OperatorArithmetic = 0x40 => "OPERATOR_ARITHMETIC",
    OperatorLogical = 0x44 => "OPERATOR_LOGICAL",
    OperatorComparison = 0x48 => "OPERATOR_COMPARISON",
    OperatorAssignment = 0x4C => "OPERATOR_ASSIGNMENT",
    // COMPUTATION / COMPUTATION_NODE
    ComputationCall = 0x50 => "COMPUTATION_CALL",
    ComputationAccess = 0x54 => "COMPUTATION_ACCESS",
    ComputationExpression = 0x58 => "COMPUTATION_EXPRESSION",
    ComputationLambda = 0x5C => "COMPUTATION_LAMBDA",
    // COMPUTATION / TRANSFORM
    TransformQuery = 0x60 => "TRANSFORM_QUERY",
    TransformIteration = 0x64 => "TRANSFORM_ITERATION",
    TransformProjection = 0x68 => "TRANSFORM_PROJECTION",
    TransformAggregation = 0x6C => "TRANSFORM_AGGREGATION",
    // COMPUTATION / DEFINITION
    DefinitionFunction = 0x70 => "DEFINITION_FUNCTION",
    DefinitionVariable = 0x74 => "DEFINITION_VARIABLE",
    DefinitionClass = 0x78 => "DEFINITION_CLASS",
    DefinitionModule = 0x7C => "DEFINITION_MODULE",
    // CONTROL_EFFECTS / EXECUTION
    ExecutionStatement = 0x80 => "EXECUTION_STATEMENT",
    ExecutionDeclaration = 0x84 => "EXECUTION_DECLARATION",
    ExecutionInvocation = 0x88 => "EXECUTION_INVOCATION",
    ExecutionMutation = 0x8C => "EXECUTION_MUTATION",
    // CONTROL_EFFECTS / FLOW_CONTROL
    FlowConditional = 0x90 => "FLOW_CONDITIONAL",
    FlowLoop = 0x94 => "FLOW_LOOP",
    FlowJump = 0x98 => "FLOW_JUMP",
    FlowSync = 0x9C => "FLOW_SYNC",
    // CONTROL_EFFECTS / ERROR_HANDLING
    ErrorTry = 0xA0 => "ERROR_TRY",
    ErrorCatch = 0xA4 => "ERROR_CATCH",
    ErrorThrow = 0xA8 => "ERROR_THROW",
    ErrorFinally = 0xAC => "ERROR_FINALLY",
    // CONTROL_EFFECTS / ORGANIZATION
    OrganizationBlock = 0xB0 => "ORGANIZATION_BLOCK",
    OrganizationList = 0xB4 => "ORGANIZATION_LIST",
    OrganizationSection = 0xB8 => "ORGANIZATION_SECTION",
    OrganizationContainer = 0xBC => "ORGANIZATION_CONTAINER",
    // META_EXTERNAL / METADATA
    MetadataComment = 0xC0 => "METADATA_COMMENT",
    MetadataAnnotation = 0xC4 => "METADATA_ANNOTATION",
    MetadataDirective = 0xC8 => "METADATA_DIRECTIVE",
    MetadataDebug = 0xCC => "METADATA_DEBUG",
    // META_EXTERNAL / EXTERNAL
    ExternalImport = 0xD0 => "EXTERNAL_IMPORT",
    ExternalExport = 0xD4 => "EXTERNAL_EXPORT",
    ExternalForeign = 0xD8 => "EXTERNAL_FOREIGN",
    ExternalEmbed = 0xDC => "EXTERNAL_EMBED",
    // META_EXTERNAL / PARSER_SPECIFIC
    ParserPunctuation = 0xE0 => "PARSER_PUNCTUATION",
    ParserDelimiter = 0xE4 => "PARSER_DELIMITER",
    ParserSyntax = 0xE8 => "PARSER_SYNTAX",
    ParserConstruct = 0xEC => "PARSER_CONSTRUCT",
    // META_EXTERNAL / RESERVED (engine-owned slots)
    Unclassified = 0xF0 => "UNCLASSIFIED",
    ReservedFuture2 = 0xF4 => "RESERVED_FUTURE2",
    ReservedFuture3 = 0xF8 => "RESERVED_FUTURE3",
    ReservedFuture4 = 0xFC => "RESERVED_FUTURE4",
}

impl Category {
    pub const fn super_kind(self) -> SuperKind {
        match self as u8 & 0xC0 {
            0x00 => SuperKind::DataStructure,
            0x40 => SuperKind::Computation,
            0x80 => SuperKind::ControlEffects,
            _ => SuperKind::MetaExternal,
        }
    }

    pub const fn kind(self) -> Kind {
        Kind::from_bits(self as u8)
    }

    /// The 6-bit category code (byte value shifted past the refinement bits)
    pub const fn code(self) -> u8 {
        (self as u8) >> 2
    }

    /// Named refinement set for this category, empty when only the
    /// unrefined form (refinement 0) is declared.
    ///
    /// The registry loader uses this to reject `(category, refinement)`
    /// pairs the taxonomy never declared.
    pub const fn refinement_names(self) -> &'static [&'static str] {
        match self {
            Self::LiteralNumber => &["INTEGER", "FLOAT", "SCIENTIFIC", "COMPLEX"],
            Self::LiteralString => &["LITERAL", "TEMPLATE", "REGEX", "RAW"],
            Self::LiteralStructured => &["GENERIC", "SEQUENCE", "MAPPING", "SET"],
            Self::NameIdentifier => &["VARIABLE", "FUNCTION", "TYPE", "LABEL"],
            Self::OperatorArithmetic => &["BINARY", "UNARY", "BITWISE", "RANGE"],
            Self::OperatorComparison => &["EQUALITY", "RELATIONAL", "MEMBERSHIP", "PATTERN"],
            Self::OperatorAssignment => &["SIMPLE", "COMPOUND", "DESTRUCTURE", "AUGMENTED"],
            Self::ComputationCall => &["FUNCTION", "METHOD", "CONSTRUCTOR", "MACRO"],
            Self::TransformQuery => &["SIMPLE", "NESTED", "FILTERED", "GROUPED"],
            Self::TransformIteration => &["MAP", "FILTER", "REDUCE", "FLAT"],
            Self::TransformAggregation => &["SIMPLE", "CONDITIONAL", "WINDOWED", "GROUPED"],
            Self::DefinitionFunction => &["REGULAR", "LAMBDA", "CONSTRUCTOR", "ASYNC"],
            Self::DefinitionVariable => &["MUTABLE", "IMMUTABLE", "PARAMETER", "FIELD"],
            Self::DefinitionClass => &["REGULAR", "ABSTRACT", "GENERIC", "ENUM"],
            Self::FlowConditional => &["BINARY", "MULTIWAY", "GUARD", "TERNARY"],
            Self::FlowLoop => &["COUNTER", "ITERATOR", "CONDITIONAL", "INFINITE"],
            Self::FlowJump => &["RETURN", "BREAK", "CONTINUE", "GOTO"],
            Self::ExternalImport => &["MODULE", "SELECTIVE", "WILDCARD", "RELATIVE"],
            Self::OrganizationBlock
            | Self::OrganizationList
            | Self::OrganizationSection
            | Self::OrganizationContainer => {
                &["SEQUENTIAL", "COLLECTION", "MAPPING", "HIERARCHICAL"]
            }
            _ => &[],
        }
    }
}

/// Per-category refinement constants (bits 0-1)
///
/// Grouped by the category they refine; categories without a module here
/// only declare the unrefined form.
pub mod refinement {
    pub mod function {
        pub const REGULAR: u8 = 0x00;
        pub const LAMBDA: u8 = 0x01;
        pub const CONSTRUCTOR: u8 = 0x02;
        pub const ASYNC: u8 = 0x03;
    }

    pub mod number {
        pub const INTEGER: u8 = 0x00;
        pub const FLOAT: u8 = 0x01;
        pub const SCIENTIFIC: u8 = 0x02;
        pub const COMPLEX: u8 = 0x03;
    }

    pub mod string {
        pub const LITERAL: u8 = 0x00;
        pub const TEMPLATE: u8 = 0x01;
        pub const REGEX: u8 = 0x02;
        pub const RAW: u8 = 0x03;
    }

    pub mod structured {
        pub const GENERIC: u8 = 0x00;
        pub const SEQUENCE: u8 = 0x01;
        pub const MAPPING: u8 = 0x02;
        pub const SET: u8 = 0x03;
    }

    pub mod identifier {
        pub const VARIABLE: u8 = 0x00;
        pub const FUNCTION: u8 = 0x01;
        pub const TYPE: u8 = 0x02;
        pub const LABEL: u8 = 0x03;
    }

    pub mod arithmetic {
        pub const BINARY: u8 = 0x00;
        pub const UNARY: u8 = 0x01;
        pub const BITWISE: u8 = 0x02;
        pub const RANGE: u8 = 0x03;
    }

    pub mod comparison {
        pub const EQUALITY: u8 = 0x00;
        pub const RELATIONAL: u8 = 0x01;
        pub const MEMBERSHIP: u8 = 0x02;
        pub const PATTERN: u8 = 0x03;
    }

    pub mod assignment {
        pub const SIMPLE: u8 = 0x00;
        pub const COMPOUND: u8 = 0x01;
        pub const DESTRUCTURE: u8 = 0x02;
        pub const AUGMENTED: u8 = 0x03;
    }

    pub mod call {
        pub const FUNCTION: u8 = 0x00;
        pub const METHOD: u8 = 0x01;
        pub const CONSTRUCTOR: u8 = 0x02;
        pub const MACRO: u8 = 0x03;
    }

    pub mod variable {
        pub const MUTABLE: u8 = 0x00;
        pub const IMMUTABLE: u8 = 0x01;
        pub const PARAMETER: u8 = 0x02;
        pub const FIELD: u8 = 0x03;
    }

    pub mod class {
        pub const REGULAR: u8 = 0x00;
        pub const ABSTRACT: u8 = 0x01;
        pub const GENERIC: u8 = 0x02;
        pub const ENUM: u8 = 0x03;
    }

    pub mod conditional {
        pub const BINARY: u8 = 0x00;
        pub const MULTIWAY: u8 = 0x01;
        pub const GUARD: u8 = 0x02;
        pub const TERNARY: u8 = 0x03;
    }

    pub mod looping {
        pub const COUNTER: u8 = 0x00;
        pub const ITERATOR: u8 = 0x01;
        pub const CONDITIONAL: u8 = 0x02;
        pub const INFINITE: u8 = 0x03;
    }

    pub mod jump {
        pub const RETURN: u8 = 0x00;
        pub const BREAK: u8 = 0x01;
        pub const CONTINUE: u8 = 0x02;
        pub const GOTO: u8 = 0x03;
    }

    pub mod import {
        pub const MODULE: u8 = 0x00;
        pub const SELECTIVE: u8 = 0x01;
        pub const WILDCARD: u8 = 0x02;
        pub const RELATIVE: u8 = 0x03;
    }

    pub mod organization {
        pub const SEQUENTIAL: u8 = 0x00;
        pub const COLLECTION: u8 = 0x01;
        pub const MAPPING: u8 = 0x02;
        pub const HIERARCHICAL: u8 = 0x03;
    }

    pub mod query {
        pub const SIMPLE: u8 = 0x00;
        pub const NESTED: u8 = 0x01;
        pub const FILTERED: u8 = 0x02;
        pub const GROUPED: u8 = 0x03;
    }

    pub mod iteration {
        pub const MAP: u8 = 0x00;
        pub const FILTER: u8 = 0x01;
        pub const REDUCE: u8 = 0x02;
        pub const FLAT: u8 = 0x03;
    }

    pub mod aggregation {
        pub const SIMPLE: u8 = 0x00;
        pub const CONDITIONAL: u8 = 0x01;
        pub const WINDOWED: u8 = 0x02;
        pub const GROUPED: u8 = 0x03;
    }
}

/// A packed `(category, refinement)` pair — one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticType(u8);

impl SemanticType {
    /// Unrefined semantic type for a category
    pub const fn new(category: Category) -> Self {
        Self(category as u8)
    }

    /// Semantic type with an explicit refinement (masked to 2 bits here;
    /// validity against the declared taxonomy is checked at registry load)
    pub const fn refined(category: Category, refinement: u8) -> Self {
        Self(category as u8 | (refinement & 0x03))
    }

    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    pub const fn byte(self) -> u8 {
        self.0
    }

    pub const fn category(self) -> Category {
        Category::from_byte(self.0)
    }

    pub const fn refinement(self) -> u8 {
        self.0 & 0x03
    }

    pub const fn super_kind(self) -> SuperKind {
        self.category().super_kind()
    }

    pub const fn kind(self) -> Kind {
        self.category().kind()
    }

    /// Canonical category name
    pub const fn name(self) -> &'static str {
        self.category().name()
    }

    /// Name of the refinement when the category declares one, `None` for
    /// the unrefined form of a refinement-less category
    pub fn refinement_name(self) -> Option<&'static str> {
        self.category()
            .refinement_names()
            .get(self.refinement() as usize)
            .copied()
    }

    // Predicate queries used by downstream consumers

    pub const fn is_definition(self) -> bool {
        matches!(self.kind(), Kind::Definition)
    }

    pub const fn is_call(self) -> bool {
        matches!(
            self.category(),
            Category::ComputationCall | Category::ExecutionInvocation
        )
    }

    pub const fn is_control_flow(self) -> bool {
        matches!(self.kind(), Kind::FlowControl)
    }

    pub const fn is_identifier(self) -> bool {
        matches!(
            self.category(),
            Category::NameIdentifier | Category::NameQualified | Category::NameScoped
        )
    }

    pub const fn is_literal(self) -> bool {
        matches!(self.kind(), Kind::Literal)
    }

    pub const fn is_operator(self) -> bool {
        matches!(self.kind(), Kind::Operator)
    }

    pub const fn is_type(self) -> bool {
        matches!(self.kind(), Kind::Type)
    }

    pub const fn is_external(self) -> bool {
        matches!(self.kind(), Kind::External)
    }

    pub const fn is_error_handling(self) -> bool {
        matches!(self.kind(), Kind::ErrorHandling)
    }

    pub const fn is_metadata(self) -> bool {
        matches!(self.kind(), Kind::Metadata)
    }

    /// Fallback type for raw node types with no registered rule
    pub const UNCLASSIFIED: SemanticType = SemanticType::new(Category::Unclassified);

    /// Type assigned to grammar-level ERROR and missing nodes
    pub const PARSER_SYNTAX: SemanticType = SemanticType::new(Category::ParserSyntax);
}
