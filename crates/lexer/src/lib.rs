//! Lexical front end for the MiniHTML templating language.
//!
//! MiniHTML mixes ordinary markup with `{{ ... }}` executable blocks and
//! string interpolation inside attribute values. The [`Scanner`] turns raw
//! source bytes into classified, position-stamped tokens plus a list of
//! recoverable lexical errors; the [`TokenStream`] is the backtracking
//! cursor a recursive-descent parser drives over the finished list.
//!
//! ```
//! use lexer::{Scanner, TokenKind, TokenStream};
//!
//! let mut scanner = Scanner::new("<div class=\"a\">hi</div>");
//! scanner.tokenize();
//! let (tokens, errors) = scanner.into_parts();
//! assert!(errors.is_empty());
//!
//! let stream = TokenStream::new(&tokens);
//! assert_eq!(stream.peek_kind(), Some(TokenKind::TagBegin));
//! ```

mod scanner;
mod shared;
mod stream;
pub mod token_fmt;

pub use scanner::Scanner;
pub use shared::{LexError, Position, Token, TokenKind};
pub use stream::{MAX_MARK_DEPTH, StreamStatus, TokenStream};
