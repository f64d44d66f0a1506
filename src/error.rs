//! Error types for manifest loading and rule registration.

use thiserror::Error;

/// Raised when bytes handed to the engine are not manifest text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The bytes are not valid UTF-8.
    #[error("manifest is not valid UTF-8 (valid up to byte {valid_up_to})")]
    NotUtf8 { valid_up_to: usize },
    /// The bytes decode but contain a NUL, so they are binary content.
    #[error("manifest contains binary data (NUL byte at offset {offset})")]
    Binary { offset: usize },
}

/// Raised while building a rule set, before any manifest is checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("rule name must not be empty")]
    EmptyName,
    #[error("rule '{0}' has an empty message")]
    EmptyMessage(String),
    #[error("rule '{0}' has an empty needle")]
    EmptyNeedle(String),
    #[error("rule '{0}' is registered more than once")]
    Duplicate(String),
    #[error("cannot disable unknown rule '{0}'")]
    UnknownRule(String),
}
