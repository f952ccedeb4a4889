//! Deterministic token formatting for golden tests.
//!
//! Stable one-line renderings of tokens so that test expectations do not
//! depend on `Debug` output.

use crate::shared::Token;
use std::fmt::Write;

/// Format one token as
/// `kind L:C..L:C @start..end "literal"` with ` quote=<q>` appended when
/// the token carries a quote character.
pub fn format_token(token: &Token) -> String {
    let mut out = format!(
        "{} {}:{}..{}:{} @{}..{} \"{}\"",
        token.kind.as_str(),
        token.start.line,
        token.start.column,
        token.end.line,
        token.end.column,
        token.start.offset,
        token.end.offset,
        escape_text(&token.literal),
    );
    if let Some(quote) = token.quote_char {
        let _ = write!(&mut out, " quote={quote}");
    }
    out
}

pub fn format_tokens(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(format_token).collect()
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' || ch == '\u{7f}' => {
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}
