//! Recoverable lexical errors.

use super::Position;
use std::fmt;

/// A lexical error recorded at the point of detection.
///
/// Errors are additive: they never remove or replace tokens already
/// produced, and the token list remains usable alongside a non-empty error
/// list. Whether errors are fatal is the consumer's policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    message: String,
    position: Position,
}

impl LexError {
    pub(crate) fn new(what: &str, position: Position) -> Self {
        Self {
            message: format!("{what} at {position}"),
            position,
        }
    }

    /// The full message, `"<what> at line L, column C, offset O"`.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LexError {}
