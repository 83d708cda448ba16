//! Error types for sematree operations

use thiserror::Error;

/// Errors detected while loading a language's rule table into the registry.
///
/// All of these are load-time: a failed registration leaves that language
/// unavailable but never affects classification with already-loaded languages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate unconditional rule for `{raw_type}` in language `{language}`")]
    AmbiguousRule { language: String, raw_type: String },

    #[error(
        "category `{category}` declares no refinement {refinement} (rule `{raw_type}` in `{language}`)"
    )]
    InvalidTaxonomyUse {
        language: String,
        raw_type: String,
        category: &'static str,
        refinement: u8,
    },

    #[error("rule `{raw_type}` in `{language}` is flagged both embodied and declaration-only")]
    ConflictingFlags { language: String, raw_type: String },

    #[error("rule `{raw_type}` in `{language}` references unknown name hook `{hook}`")]
    UnknownHook {
        language: String,
        raw_type: String,
        hook: String,
    },
}

/// Main error type for sematree operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unsupported language for extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("failed to parse source: {message}")]
    ParseFailure { message: String },

    #[error("classification cancelled")]
    Cancelled,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type alias for sematree operations
pub type Result<T> = std::result::Result<T, EngineError>;
