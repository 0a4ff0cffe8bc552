//! Property-based tests for the lexer
//!
//! These tests use proptest to generate inputs and check properties that
//! must hold for every source text.

use decaf_lexer::{
    config::LexerConfig,
    lexer::{
        lexer::{tokenize, tokenize_with_trivia},
        tokens::TokenKind,
    },
};
use proptest::prelude::*;

/// Fragments that always lex, joined by separators that keep them apart.
fn valid_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,8}".prop_filter("reserved word", |word| {
            !["for", "callout", "class", "interface", "extends", "implements", "new", "this",
              "string", "float", "double", "null"]
                .contains(&word.as_str())
        }),
        "0|[1-9][0-9]{0,6}",
        "0x[0-9a-f]{1,6}",
        "\"[a-zA-Z0-9 #:_]{0,10}\"",
        prop::sample::select(vec![
            "==", "!=", "<=", ">=", "(", ")", "{", "}", "[", "]", ",", ";", "+", "-", "*",
            "/", "%", "&&", "||", "!", ">", "<", "=",
        ])
        .prop_map(String::from),
        "//[a-z ]{0,10}\n",
    ]
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t\n]{1,3}"
}

fn valid_source() -> impl Strategy<Value = String> {
    prop::collection::vec((valid_fragment(), separator()), 0..20).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, separator)| fragment + &separator)
            .collect()
    })
}

proptest! {
    #[test]
    fn whitespace_only_lexes_to_nothing(source in "[ \t\n]{0,64}") {
        let tokens = tokenize(&source).unwrap();
        prop_assert!(tokens.is_empty());
    }

    #[test]
    fn tokens_and_trivia_rebuild_source(source in valid_source()) {
        let (tokens, trivia) = tokenize_with_trivia(&source, LexerConfig::default()).unwrap();

        let mut pieces: Vec<(usize, String)> = tokens
            .iter()
            .map(|token| (token.offset(), token.lexeme().to_string()))
            .chain(trivia.into_iter().map(|piece| (piece.offset, piece.text)))
            .collect();
        pieces.sort_by_key(|(offset, _)| *offset);

        let rebuilt: String = pieces.into_iter().map(|(_, text)| text).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn lines_are_non_decreasing_and_lexemes_non_empty(source in valid_source()) {
        let tokens = tokenize(&source).unwrap();

        let mut previous = 1;
        for token in &tokens {
            prop_assert!(!token.lexeme().is_empty());
            prop_assert!(token.line() >= previous);
            previous = token.line();
        }
    }

    #[test]
    fn lexing_is_deterministic(source in "\\PC{0,40}") {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn reserved_words_are_always_fatal(
        prefix in valid_source(),
        word in prop::sample::select(vec!["for", "class", "new", "null", "this"]),
    ) {
        let source = format!("{} {} x", prefix, word);
        prop_assert!(tokenize(&source).is_err());
    }

    #[test]
    fn decimal_literals_never_start_with_zero(digits in "[0-9]{1,12}") {
        let tokens = tokenize(&digits).unwrap();
        for token in &tokens {
            prop_assert_eq!(token.kind(), TokenKind::DecimalLiteral);
            prop_assert!(token.lexeme() == "0" || !token.lexeme().starts_with('0'));
        }
    }
}
