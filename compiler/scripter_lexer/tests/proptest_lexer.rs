//! Property-based tests for the lexer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use scripter_ir::{StringInterner, TokenKind};
use scripter_lexer::{lex, LexErrorKind};

/// Strategy for identifiers that are never keywords.
fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z_$][a-zA-Z0-9_$]{0,10}".prop_map(|s| format!("id_{s}"))
}

/// Strategy for string literal bodies without quotes or backslashes.
fn arb_string_body() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ .,!?]{0,20}"
}

fn arb_token_text() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_ident(),
        (0i64..=i64::MAX).prop_map(|n| n.to_string()),
        arb_string_body().prop_map(|s| format!("\"{s}\"")),
        Just("+".to_string()),
        Just("==".to_string()),
        Just("&&".to_string()),
        Just("(".to_string()),
        Just(";".to_string()),
        Just("var".to_string()),
        Just("function".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn integers_round_trip(n in 0i64..=i64::MAX) {
        let interner = StringInterner::new();
        let tokens = lex(&n.to_string(), &interner).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int(n));
    }

    #[test]
    fn identifiers_intern_to_their_text(name in arb_ident()) {
        let interner = StringInterner::new();
        let tokens = lex(&name, &interner).unwrap();
        let TokenKind::Ident(id) = tokens[0].kind else {
            return Err(TestCaseError::fail(format!("not an identifier: {:?}", tokens[0])));
        };
        prop_assert_eq!(interner.lookup(id), name.as_str());
    }

    #[test]
    fn plain_strings_keep_their_contents(body in arb_string_body()) {
        let interner = StringInterner::new();
        let tokens = lex(&format!("\"{body}\""), &interner).unwrap();
        let TokenKind::String(id) = tokens[0].kind else {
            return Err(TestCaseError::fail(format!("not a string: {:?}", tokens[0])));
        };
        prop_assert_eq!(interner.lookup(id), body.as_str());
    }

    #[test]
    fn token_sequences_end_with_eof(parts in prop::collection::vec(arb_token_text(), 0..20)) {
        let interner = StringInterner::new();
        let source = parts.join(" ");
        let tokens = lex(&source, &interner).unwrap();
        prop_assert_eq!(tokens.len(), parts.len() + 1);
        let last = tokens.as_slice().last().map(|t| t.kind);
        prop_assert_eq!(last, Some(TokenKind::Eof));
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(parts in prop::collection::vec(arb_token_text(), 0..20)) {
        let interner = StringInterner::new();
        let source = parts.join("  ");
        let tokens = lex(&source, &interner).unwrap();
        let mut prev_end = 0;
        for token in tokens.iter() {
            prop_assert!(token.span.start >= prev_end);
            prop_assert!(token.span.end as usize <= source.len());
            prev_end = token.span.end;
        }
    }

    #[test]
    fn lexing_never_panics(source in "\\PC{0,64}") {
        let interner = StringInterner::new();
        let _ = lex(&source, &interner);
    }

    #[test]
    fn too_large_integers_are_rejected(extra in 1u64..1000) {
        let interner = StringInterner::new();
        let text = format!("{}", i64::MAX as u128 + u128::from(extra));
        let err = lex(&text, &interner).unwrap_err();
        prop_assert_eq!(err.kind, LexErrorKind::IntegerOutOfRange);
    }
}
