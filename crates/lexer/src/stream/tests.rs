use super::{MAX_MARK_DEPTH, TokenStream};
use crate::scanner::Scanner;
use crate::shared::Token;
use crate::shared::TokenKind as K;

fn tokens_for(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input);
    scanner.tokenize();
    let (tokens, errors) = scanner.into_parts();
    assert!(errors.is_empty(), "test input must lex cleanly");
    tokens
}

// Literal, TagBegin, RightAngled, Literal, TagClosingStart, TagClosingEnd.
fn sample_tokens() -> Vec<Token> {
    tokens_for("foo <b>bar</b>")
}

#[test]
fn empty_list_is_empty_from_the_start() {
    let tokens: Vec<Token> = Vec::new();
    let mut stream = TokenStream::new(&tokens);
    assert!(stream.is_empty());
    assert!(stream.peek().is_none());
    assert!(stream.peek_next().is_none());
    assert!(stream.peek_kind().is_none());
    assert!(stream.consume().is_none());
    stream.discard();
    assert!(stream.is_empty());
}

#[test]
fn peek_does_not_advance() {
    let tokens = sample_tokens();
    let stream = TokenStream::new(&tokens);
    assert_eq!(stream.peek_kind(), Some(K::Literal));
    assert_eq!(stream.peek_kind(), Some(K::Literal));
    assert_eq!(stream.peek_next_kind(), Some(K::TagBegin));
    assert_eq!(stream.status().cursor, 0);
}

#[test]
fn consume_returns_tokens_in_order_then_none() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);

    let mut seen = Vec::new();
    while let Some(token) = stream.consume() {
        seen.push(token.kind);
    }
    assert_eq!(
        seen,
        vec![
            K::Literal,
            K::TagBegin,
            K::RightAngled,
            K::Literal,
            K::TagClosingStart,
            K::TagClosingEnd,
        ]
    );
    assert!(stream.is_empty());
    assert!(stream.consume().is_none());
}

#[test]
fn cursor_pins_at_the_final_element() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    for _ in 0..tokens.len() + 3 {
        stream.discard();
    }
    let status = stream.status();
    assert_eq!(status.cursor, tokens.len() - 1);
    assert!(status.look[0].is_none());
    assert!(stream.is_empty());
}

#[test]
fn discard_advances_without_a_value() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    stream.discard();
    assert_eq!(stream.peek_kind(), Some(K::TagBegin));
}

#[test]
fn restore_rewinds_to_the_mark() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    stream.discard();

    stream.mark();
    let baseline = (stream.peek().cloned(), stream.peek_next().cloned());
    stream.discard();
    stream.discard();
    stream.discard();
    stream.restore();
    assert_eq!(
        (stream.peek().cloned(), stream.peek_next().cloned()),
        baseline
    );
    assert_eq!(stream.status().mark_depth, 0);
}

#[test]
fn restore_is_exact_for_any_consume_count() {
    let tokens = sample_tokens();
    for consumes in 0..tokens.len() + 2 {
        let mut stream = TokenStream::new(&tokens);
        stream.mark();
        let baseline = (stream.peek().cloned(), stream.peek_next().cloned());
        for _ in 0..consumes {
            stream.consume();
        }
        stream.restore();
        assert_eq!(
            (stream.peek().cloned(), stream.peek_next().cloned()),
            baseline,
            "mismatch after {consumes} consumes"
        );
    }
}

#[test]
fn marks_nest_lifo() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);

    stream.mark(); // at Literal
    stream.discard();
    stream.mark(); // at TagBegin
    stream.discard();
    stream.discard();

    stream.restore();
    assert_eq!(stream.peek_kind(), Some(K::TagBegin));
    stream.restore();
    assert_eq!(stream.peek_kind(), Some(K::Literal));
}

#[test]
fn pop_only_drops_the_mark() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    stream.mark();
    stream.discard();
    stream.discard();

    let before = stream.status();
    stream.pop();
    let after = stream.status();
    assert_eq!(after.cursor, before.cursor);
    assert_eq!(
        after.look.map(|slot| slot.map(|t| t.kind)),
        before.look.map(|slot| slot.map(|t| t.kind))
    );
    assert_eq!(before.mark_depth, 1);
    assert_eq!(after.mark_depth, 0);
}

#[test]
fn restore_after_drain_refills_the_window() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    stream.mark();
    while stream.consume().is_some() {}
    assert!(stream.peek().is_none());

    stream.restore();
    assert_eq!(stream.peek_kind(), Some(K::Literal));
    assert_eq!(stream.peek_next_kind(), Some(K::TagBegin));
    assert!(!stream.is_empty());
}

#[test]
fn independent_streams_share_one_list() {
    let tokens = sample_tokens();
    let mut first = TokenStream::new(&tokens);
    let second = TokenStream::new(&tokens);
    first.discard();
    first.discard();
    assert_eq!(first.peek_kind(), Some(K::RightAngled));
    assert_eq!(second.peek_kind(), Some(K::Literal));
}

#[test]
fn status_is_a_full_snapshot() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    stream.discard();
    stream.mark();

    let status = stream.status();
    assert_eq!(status.len, tokens.len());
    assert_eq!(status.cursor, 1);
    assert_eq!(status.mark_depth, 1);
    assert_eq!(status.tokens.len(), tokens.len());
    assert_eq!(status.look[0].map(|t| t.kind), Some(K::TagBegin));
    assert_eq!(status.look[1].map(|t| t.kind), Some(K::RightAngled));
}

#[test]
fn marks_fill_up_to_the_capacity_bound() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    for _ in 0..MAX_MARK_DEPTH {
        stream.mark();
    }
    assert_eq!(stream.status().mark_depth, MAX_MARK_DEPTH);
}

#[test]
#[should_panic(expected = "too many marks in stream")]
fn marking_past_capacity_panics() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    for _ in 0..=MAX_MARK_DEPTH {
        stream.mark();
    }
}

#[test]
#[should_panic(expected = "no mark to restore")]
fn restore_without_a_mark_panics() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    stream.restore();
}

#[test]
#[should_panic(expected = "no mark to pop")]
fn pop_without_a_mark_panics() {
    let tokens = sample_tokens();
    let mut stream = TokenStream::new(&tokens);
    stream.pop();
}
