//! Error types for the declarehex engine.

use thiserror::Error;

/// Errors that can occur while validating settings or rewriting a stylesheet.
#[derive(Debug, Error)]
pub enum Error {
    /// A settings field holds a value outside its enumerated set.
    #[error("invalid value for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A dialect name outside the sigil table reached formatter construction.
    /// No fallback dialect is ever substituted.
    #[error("unsupported css preprocessor: '{0}'")]
    UnsupportedDialect(String),

    /// The target selector produced an uncompilable search pattern.
    #[error("invalid selector pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
