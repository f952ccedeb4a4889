//! MiniHTML: lexical front end for an HTML-like templating language.
//!
//! Facade crate: the scanner and token stream live in the `lexer` crate;
//! this re-exports their public surface under the product name.

pub use lexer::token_fmt;
pub use lexer::{
    LexError, MAX_MARK_DEPTH, Position, Scanner, StreamStatus, Token, TokenKind, TokenStream,
};
