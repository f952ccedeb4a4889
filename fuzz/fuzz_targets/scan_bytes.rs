#![no_main]

use lexer::{Scanner, TokenStream};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut scanner = Scanner::new(data);
    scanner.tokenize();
    assert!(scanner.at_eof());

    let (tokens, _errors) = scanner.into_parts();
    for token in &tokens {
        assert!(token.end.offset >= token.start.offset);
        assert!(token.end.line >= token.start.line);
    }

    // The stream protocol must hold for any token list the scanner emits.
    let mut stream = TokenStream::new(&tokens);
    stream.mark();
    let mut consumed = 0usize;
    while stream.consume().is_some() {
        consumed += 1;
    }
    assert_eq!(consumed, tokens.len());
    stream.restore();
    assert_eq!(stream.peek().is_none(), tokens.is_empty());
    while !stream.is_empty() {
        stream.discard();
    }
});
