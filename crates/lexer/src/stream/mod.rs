//! Backtracking cursor over a finished token list.
//!
//! The stream borrows the token list and never mutates it, so any number
//! of independent streams may read the same list. Speculative parsing uses
//! the mark protocol: `mark()` before a speculative path, `restore()` on
//! failure, `pop()` on success. Marks nest LIFO up to [`MAX_MARK_DEPTH`].
//!
//! Protocol misuse (restore or pop with no saved mark, marking past the
//! capacity bound) is a caller bug, not an input problem, and panics
//! rather than joining the recoverable-error channel.

use crate::shared::{Token, TokenKind};

#[cfg(test)]
mod tests;

/// Upper bound on nested speculative marks.
pub const MAX_MARK_DEPTH: usize = 128;

/// Cursor with 2-token lookahead over a finished token list.
///
/// The list must be fully materialized; constructing a stream over a
/// partially scanned list is a contract violation.
pub struct TokenStream<'t> {
    tokens: &'t [Token],
    cursor: usize,
    look: [Option<&'t Token>; 2],
    marks: Vec<usize>,
}

/// Diagnostic snapshot of a stream. Not part of the parsing contract.
#[derive(Clone, Copy, Debug)]
pub struct StreamStatus<'t> {
    pub tokens: &'t [Token],
    pub cursor: usize,
    pub len: usize,
    pub look: [Option<&'t Token>; 2],
    pub mark_depth: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            cursor: 0,
            look: [tokens.first(), tokens.get(1)],
            marks: Vec::new(),
        }
    }

    /// The token under the cursor, or `None` past the end.
    pub fn peek(&self) -> Option<&'t Token> {
        self.look[0]
    }

    /// One token past the cursor, or `None` past the end.
    pub fn peek_next(&self) -> Option<&'t Token> {
        self.look[1]
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.look[0].map(|t| t.kind)
    }

    pub fn peek_next_kind(&self) -> Option<TokenKind> {
        self.look[1].map(|t| t.kind)
    }

    /// Return the current token and advance.
    ///
    /// The cursor index pins at the final element; the lookahead window
    /// drains to `None` instead, mirroring the scanner's end-of-input
    /// idle behavior.
    pub fn consume(&mut self) -> Option<&'t Token> {
        let token = self.look[0];
        self.advance();
        token
    }

    /// Advance without returning the token.
    pub fn discard(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        self.look[0] = self.look[1];
        self.look[1] = self.tokens.get(self.cursor + 1);
    }

    /// Save the cursor for a speculative parse.
    pub fn mark(&mut self) {
        assert!(self.marks.len() < MAX_MARK_DEPTH, "too many marks in stream");
        self.marks.push(self.cursor);
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "minihtml.stream",
            "mark @{} depth {}",
            self.cursor,
            self.marks.len()
        );
    }

    /// Rewind the cursor and lookahead window to the most recent mark and
    /// drop it.
    pub fn restore(&mut self) {
        let Some(mark) = self.marks.pop() else {
            panic!("no mark to restore");
        };
        self.cursor = mark;
        self.look[0] = self.tokens.get(mark);
        self.look[1] = self.tokens.get(mark + 1);
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "minihtml.stream", "restore @{mark}");
    }

    /// Drop the most recent mark without rewinding: the speculative parse
    /// succeeded and the saved position is no longer needed.
    pub fn pop(&mut self) {
        assert!(self.marks.pop().is_some(), "no mark to pop");
    }

    /// True once the cursor has exhausted the list or the current
    /// lookahead slot holds no value.
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.tokens.len() || self.look[0].is_none()
    }

    pub fn status(&self) -> StreamStatus<'t> {
        StreamStatus {
            tokens: self.tokens,
            cursor: self.cursor,
            len: self.tokens.len(),
            look: self.look,
            mark_depth: self.marks.len(),
        }
    }
}
