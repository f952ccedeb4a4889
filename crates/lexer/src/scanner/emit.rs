//! Token emission helpers.

use crate::scanner::Scanner;
use crate::shared::{LexError, Token, TokenKind};

impl Scanner {
    /// Mark the position where the next token begins.
    pub(super) fn start_token(&mut self) {
        self.token_start = self.stats();
    }

    /// Push a token spanning the pending start to the current position.
    pub(super) fn push_token(&mut self, kind: TokenKind) {
        let token = Token {
            kind,
            start: self.token_start,
            end: self.stats(),
            literal: String::new(),
            quote_char: None,
        };
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "minihtml.scanner",
            "emit {:?} @{}..{}",
            token.kind,
            token.start.offset,
            token.end.offset
        );
        self.tokens.push(token);
    }

    /// Push a token produced by the string sub-scanner, tagged with its
    /// delimiting quote character.
    pub(super) fn push_string_token(&mut self, kind: TokenKind, quote: char) {
        self.push_token(kind);
        if let Some(last) = self.tokens.last_mut() {
            last.quote_char = Some(quote);
        }
    }

    /// Rewrite the kind of the most recently pushed token in place.
    ///
    /// A block's syntactic role is only known after it has been scanned
    /// (an executable inside a string becomes an interpolated executable),
    /// so the sub-scanners patch the last push rather than buffering.
    pub(super) fn amend_last_token_kind(&mut self, kind: TokenKind) {
        debug_assert!(!self.tokens.is_empty(), "amend with no pushed token");
        if let Some(last) = self.tokens.last_mut() {
            last.kind = kind;
        }
    }

    pub(super) fn push_error(&mut self, what: &str) {
        let err = LexError::new(what, self.stats());
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "minihtml.scanner", "lex error: {err}");
        self.errors.push(err);
    }
}
