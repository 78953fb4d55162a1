//! Construction and lookup errors.

use crate::key::EndingKey;

/// Malformed principal parts or metadata at entity construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidInputError(pub String);

impl InvalidInputError {
    pub fn new(message: impl Into<String>) -> Self {
        InvalidInputError(message.into())
    }
}

/// A paradigm lookup for a key the word does not carry. This signals a
/// programmer error upstream; it is never shown to a learner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no ending found for key '{key}' on word '{word}'")]
pub struct NoEndingError {
    pub word: String,
    pub key: EndingKey,
}

impl NoEndingError {
    pub fn new(word: impl Into<String>, key: EndingKey) -> Self {
        NoEndingError {
            word: word.into(),
            key,
        }
    }
}
