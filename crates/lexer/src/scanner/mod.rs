//! MiniHTML scanner.
//!
//! A batch scanner: `tokenize` drives the state machine to end of input in
//! one call, then materializes token literals from the retained source.
//! The scanner owns a private copy of the source bytes, so mutation of the
//! caller's original cannot corrupt an in-progress scan.
//!
//! Invariants:
//! - The 4-slot lookahead window is always primed; `None` is the EOF
//!   sentinel, and consuming at EOF is a no-op.
//! - Token and error lists are append-only. The one exception is the
//!   localized kind amendment the string sub-scanner performs on the most
//!   recently pushed token.
//! - `offset` counts code points, not bytes; `line`/`column` are 1-based
//!   and a newline resets the column.

use crate::shared::{LexError, Position, Token, TokenKind};
use tools::utf8;

mod emit;

/// Hand-written scanner for the MiniHTML templating language.
pub struct Scanner {
    src: Vec<u8>,
    byte_pos: usize,
    look: [Option<char>; 4],
    line: u32,
    col: u32,
    offset: u32,
    /// Byte bounds of each decoded code point, indexed by code-point offset.
    cp_bounds: Vec<(usize, usize)>,
    token_start: Position,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl Scanner {
    /// Create a scanner over a private copy of `source`.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let mut scanner = Self {
            src: source.as_ref().to_vec(),
            byte_pos: 0,
            look: [None; 4],
            line: 1,
            col: 1,
            offset: 0,
            cp_bounds: Vec::new(),
            token_start: Position::new(1, 1, 0),
            tokens: Vec::new(),
            errors: Vec::new(),
        };
        for slot in 0..scanner.look.len() {
            let cp = scanner.decode_next();
            scanner.look[slot] = cp;
        }
        scanner
    }

    /// Run the scan loop to end of input, then fill in token literals.
    ///
    /// Idempotent: a second call finds the window already at EOF and
    /// re-materializes the same literals.
    pub fn tokenize(&mut self) -> &[Token] {
        while self.look[0].is_some() {
            self.scan_token();
        }
        self.hydrate_tokens();
        &self.tokens
    }

    /// Tokens produced so far (the full list after `tokenize`).
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Lexical errors recorded so far, in detection order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Current scan position.
    pub fn stats(&self) -> Position {
        Position::new(self.line, self.col, self.offset)
    }

    /// True once the lookahead window has reached the EOF sentinel.
    pub fn at_eof(&self) -> bool {
        self.look[0].is_none()
    }

    /// Transfer ownership of the finished token and error lists.
    pub fn into_parts(self) -> (Vec<Token>, Vec<LexError>) {
        (self.tokens, self.errors)
    }

    fn decode_next(&mut self) -> Option<char> {
        let start = self.byte_pos;
        let decoded = utf8::next_code_point(&self.src, &mut self.byte_pos);
        if decoded.is_some() {
            self.cp_bounds.push((start, self.byte_pos));
        }
        decoded
    }

    fn rotate(&mut self) {
        let next = self.decode_next();
        self.look[0] = self.look[1];
        self.look[1] = self.look[2];
        self.look[2] = self.look[3];
        self.look[3] = next;
    }

    /// Advance one code point, updating line/column/offset. No-op at EOF.
    fn consume(&mut self) {
        let Some(cp) = self.look[0] else { return };
        self.offset += 1;
        if cp == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.rotate();
    }

    fn scan_token(&mut self) {
        match self.look[0] {
            Some('<') => self.scan_open_tag(),
            Some('>') => {
                self.start_token();
                self.consume();
                self.push_token(TokenKind::RightAngled);
            }
            Some('/') => {
                if self.look[1] == Some('>') {
                    self.start_token();
                    self.consume(); // /
                    self.consume(); // >
                    self.push_token(TokenKind::TagEnd);
                } else {
                    self.consume_literal();
                }
            }
            Some('{') if self.look[1] == Some('{') => self.consume_executable(),
            Some(_) => self.consume_literal(),
            None => {}
        }
    }

    fn scan_open_tag(&mut self) {
        debug_assert_eq!(self.look[0], Some('<'));

        if self.look[1] == Some('!') && self.look[2] == Some('-') && self.look[3] == Some('-') {
            self.start_token();
            self.consume(); // <
            self.consume(); // !
            self.consume(); // -
            self.consume(); // -
            self.push_token(TokenKind::TagBegin);
            self.consume_comment_tag();
            return;
        }

        if self.look[1].is_some_and(is_letter) {
            self.start_token();
            self.consume(); // <
            self.consume_tag_ident();
            self.push_token(TokenKind::TagBegin);

            self.consume_spaces();
            while self.look[0].is_some_and(is_letter) {
                self.consume_attr();
                self.consume_spaces();
            }
            return;
        }

        if self.look[1] == Some('/') {
            self.start_token();
            self.consume(); // <
            self.consume(); // /
            if self.look[0].is_some_and(is_tag_ident) {
                self.consume_tag_ident();
            }
            self.push_token(TokenKind::TagClosingStart);
            self.consume_spaces();
            while self.look[0].is_some_and(is_tag_ident) {
                self.consume_attr();
                self.consume_spaces();
            }
            self.consume_spaces();

            // A missing `>` leaves the tag unclosed with no token and no
            // error; the parser decides what that means.
            if self.look[0] == Some('>') {
                self.start_token();
                self.consume();
                self.push_token(TokenKind::TagClosingEnd);
            }
            return;
        }

        // `<` opening nothing recognizable: fold it into a literal run so
        // the scan always makes progress.
        self.start_token();
        self.consume(); // <
        self.finish_literal_run();
    }

    /// Scan to the first `-->`. No nesting. The comment-end token keeps
    /// the token start set at the `<` of `<!--`, so its span covers the
    /// whole comment.
    fn consume_comment_tag(&mut self) {
        while self.look[0].is_some() {
            if self.look[0] == Some('-') && self.look[1] == Some('-') && self.look[2] == Some('>')
            {
                self.consume(); // -
                self.consume(); // -
                self.consume(); // >
                self.push_token(TokenKind::TagCommentEnd);
                return;
            }
            self.consume();
        }

        self.push_error("Unterminated comment tag");
        self.push_token(TokenKind::TagCommentEnd);
    }

    /// Scan a `{{ ... }}` block; the emitted span excludes the delimiters.
    ///
    /// The bracket depth is signed: a stray `}` at depth zero drives it
    /// negative, after which no `}}` can match and the block runs to end
    /// of input as an unmatched error.
    fn consume_executable(&mut self) {
        self.consume(); // {
        self.consume(); // {
        self.start_token();

        let mut bracket_level: i32 = 0;
        while let Some(cp) = self.look[0] {
            if bracket_level == 0 && cp == '}' && self.look[1] == Some('}') {
                self.push_token(TokenKind::Executable);
                self.consume(); // }
                self.consume(); // }
                return;
            }

            if cp == '{' {
                bracket_level += 1;
            }
            if cp == '}' {
                bracket_level -= 1;
            }

            self.consume();
        }

        self.push_error("Unmatched {{ block");
    }

    /// Scan a quoted string value, splitting around `{{ ... }}` blocks.
    fn consume_string(&mut self) {
        debug_assert!(matches!(self.look[0], Some('\'' | '"')));
        let Some(quote) = self.look[0] else { return };
        self.consume(); // opening quote
        self.start_token();

        while let Some(cp) = self.look[0] {
            if cp == '\\' && self.look[1] == Some(quote) {
                self.consume(); // backslash
                self.consume(); // escaped quote
            } else if cp == quote {
                self.push_string_token(TokenKind::String, quote);
                self.consume(); // closing quote
                return;
            } else if cp == '{' && self.look[1] == Some('{') {
                self.push_string_token(TokenKind::StringInterpolation, quote);
                self.consume_executable();
                // The block's role is only known now that it has been
                // scanned inside a string.
                self.amend_last_token_kind(TokenKind::InterpolatedExecutable);
                self.start_token();
            } else {
                self.consume();
            }
        }

        self.push_error("Unterminated string value");
        self.push_string_token(TokenKind::String, quote);
    }

    /// Scan one attribute: key, then optionally `=` and a quoted,
    /// executable, or unquoted value.
    fn consume_attr(&mut self) {
        self.start_token();
        self.consume_attr_name();
        self.push_token(TokenKind::AttrKey);
        self.consume_spaces();

        if self.look[0] != Some('=') {
            return;
        }
        self.start_token();
        self.consume(); // =
        self.push_token(TokenKind::Equal);
        self.consume_spaces();

        match self.look[0] {
            Some('\'' | '"') => self.consume_string(),
            Some('{') if self.look[1] == Some('{') => self.consume_executable(),
            _ => {
                self.start_token();
                self.consume_unquoted_attr_value();
            }
        }
    }

    /// Emit `AttrValueUnquoted` only if at least one character was
    /// consumed; a bare `=` followed by a delimiter produces no value
    /// token.
    fn consume_unquoted_attr_value(&mut self) {
        let mut consumed = false;
        while let Some(cp) = self.look[0] {
            if is_space(cp) || cp == '/' || cp == '>' {
                break;
            }
            self.consume();
            consumed = true;
        }
        if consumed {
            self.push_token(TokenKind::AttrValueUnquoted);
        }
    }

    fn consume_literal(&mut self) {
        self.start_token();
        self.finish_literal_run();
    }

    /// Consume until `<`, the pair `{{`, or end of input, then emit the
    /// pending literal. A lone `{` does not stop the run.
    fn finish_literal_run(&mut self) {
        loop {
            match self.look[0] {
                None | Some('<') => break,
                Some('{') => {
                    if self.look[1] == Some('{') {
                        break;
                    }
                    self.consume();
                }
                Some(_) => self.consume(),
            }
        }
        self.push_token(TokenKind::Literal);
    }

    fn consume_tag_ident(&mut self) {
        while self.look[0].is_some_and(is_tag_ident) {
            self.consume();
        }
    }

    fn consume_attr_name(&mut self) {
        while self.look[0].is_some_and(is_attr_ident) {
            self.consume();
        }
    }

    fn consume_spaces(&mut self) {
        while self.look[0].is_some_and(is_space) {
            self.consume();
        }
    }

    /// Fill in every token's `literal` from the retained source.
    ///
    /// Slicing goes by code-point offset through the recorded byte
    /// bounds; the conversion is lossy, so malformed input surfaces as
    /// U+FFFD exactly where the decoder saw it. For well-formed input the
    /// literal is byte-identical to the source slice.
    fn hydrate_tokens(&mut self) {
        for token in &mut self.tokens {
            let start = token.start.offset as usize;
            let end = token.end.offset as usize;
            assert!(start <= end, "invalid offset boundaries {start} -> {end}");
            token.literal = if start == end {
                String::new()
            } else {
                let lo = self.cp_bounds[start].0;
                let hi = self.cp_bounds[end - 1].1;
                String::from_utf8_lossy(&self.src[lo..hi]).into_owned()
            };
        }
    }
}

fn is_letter(cp: char) -> bool {
    cp.is_ascii_alphabetic()
}

/// Spaces per the template grammar: SP, CR, FF, LF, TAB, VT.
fn is_space(cp: char) -> bool {
    matches!(cp, ' ' | '\r' | '\x0C' | '\n' | '\t' | '\x0B')
}

/// Tag identifiers: letters, digits, `_`, `.`, `:`.
fn is_tag_ident(cp: char) -> bool {
    cp.is_ascii_alphanumeric() || matches!(cp, '_' | '.' | ':')
}

/// Attribute identifiers additionally allow `-`.
fn is_attr_ident(cp: char) -> bool {
    cp.is_ascii_alphanumeric() || matches!(cp, '-' | '_' | '.' | ':')
}
