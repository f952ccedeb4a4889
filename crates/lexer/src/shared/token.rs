//! Token model for the MiniHTML lexer.

use super::Position;

/// Classified token kinds.
///
/// The set is closed. `as_str` returns the snake_case name used on the
/// wire and in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<name` or the `<!--` of a comment.
    TagBegin,
    /// `/>` self-closing marker.
    TagEnd,
    /// `</name`.
    TagClosingStart,
    /// The `>` that closes a `</name ...>` form.
    TagClosingEnd,
    /// A bare `>`.
    RightAngled,
    AttrKey,
    Equal,
    AttrValueUnquoted,
    /// Quoted string segment; carries `quote_char`.
    String,
    /// String segment preceding a `{{ ... }}` block; carries `quote_char`.
    StringInterpolation,
    /// Executable block scanned inside a string value.
    InterpolatedExecutable,
    /// `{{ ... }}` block; the span excludes the delimiters.
    Executable,
    Literal,
    /// The `-->` close of a comment; its span covers the whole comment.
    TagCommentEnd,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::TagBegin => "tag_begin",
            TokenKind::TagEnd => "tag_end",
            TokenKind::TagClosingStart => "tag_closing_start",
            TokenKind::TagClosingEnd => "tag_closing_end",
            TokenKind::RightAngled => "right_angled",
            TokenKind::AttrKey => "attr_key",
            TokenKind::Equal => "equal",
            TokenKind::AttrValueUnquoted => "attr_value_unquoted",
            TokenKind::String => "string",
            TokenKind::StringInterpolation => "string_interpolation",
            TokenKind::InterpolatedExecutable => "interpolated_executable",
            TokenKind::Executable => "executable",
            TokenKind::Literal => "literal",
            TokenKind::TagCommentEnd => "tag_comment_end",
        }
    }
}

/// A classified span of source text.
///
/// `literal` is filled in by the scanner's materialization pass once the
/// scan completes; until then it is empty. `quote_char` is set only on
/// tokens produced by the string sub-scanner.
///
/// Invariant: `end.offset >= start.offset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
    pub literal: String,
    pub quote_char: Option<char>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    /// Wire shape: flattened positions under `start_*`/`end_*` names,
    /// `kind` as its snake_case name, `quote_char` only when present.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let fields = 8 + usize::from(self.quote_char.is_some());
        let mut state = serializer.serialize_struct("Token", fields)?;
        state.serialize_field("kind", self.kind.as_str())?;
        state.serialize_field("start_line", &self.start.line)?;
        state.serialize_field("start_column", &self.start.column)?;
        state.serialize_field("start_offset", &self.start.offset)?;
        state.serialize_field("end_line", &self.end.line)?;
        state.serialize_field("end_column", &self.end.column)?;
        state.serialize_field("end_offset", &self.end.offset)?;
        state.serialize_field("literal", &self.literal)?;
        if let Some(quote) = self.quote_char {
            state.serialize_field("quote_char", &quote)?;
        }
        state.end()
    }
}
