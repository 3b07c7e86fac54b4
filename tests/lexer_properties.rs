//! Property tests for the tokenizer.
//!
//! These check the guarantees every token stream must hold regardless of
//! input: termination with a single EOF, ordered positions, keyword
//! precedence, maximal munch and that no character goes missing.

use proptest::prelude::*;
use synta::{
    lexer::tokens::{lookup_identifier, TokenKind, RESERVED_LOOKUP},
    tokenize,
};

const TWO_CHAR_OPERATORS: &[(&str, TokenKind)] = &[
    ("++", TokenKind::Increment),
    ("+=", TokenKind::PlusAssign),
    ("--", TokenKind::Decrement),
    ("-=", TokenKind::MinusAssign),
    ("->", TokenKind::Arrow),
    ("*=", TokenKind::MultAssign),
    ("/=", TokenKind::DivAssign),
    ("%=", TokenKind::ModAssign),
    ("==", TokenKind::Eq),
    ("=:", TokenKind::Assign),
    (":=", TokenKind::BindAssign),
    ("!=", TokenKind::Neq),
    ("<=", TokenKind::Lte),
    (">=", TokenKind::Gte),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
];

/// Source fragments that exercise every dispatch rule.
fn synta_source() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ \t\r\n\"'\\\\/~@+\\-*%=:!<>&|^()\\[\\]{};,.$#?é]{0,120}"
}

/// Sources without quotes, comment openers or newlines, where every token's
/// lexeme is a verbatim slice of its line.
fn flat_source() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ \t+\\-*%=:!<>&|^()\\[\\]{};,.@$#?~]{0,80}"
        .prop_filter("no comment openers", |s| !s.contains("//") && !s.contains("/~"))
}

proptest! {
    #[test]
    fn tokenize_always_ends_with_one_eof(source in any::<String>()) {
        let tokens = tokenize(&source);

        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(), 1);
    }

    #[test]
    fn tokenize_structured_input_ends_with_one_eof(source in synta_source()) {
        let tokens = tokenize(&source);

        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(), 1);
    }

    #[test]
    fn positions_never_go_backwards(source in synta_source()) {
        let tokens = tokenize(&source);

        for pair in tokens.windows(2) {
            prop_assert!(
                pair[0].position <= pair[1].position,
                "{:?} came after {:?}", pair[1], pair[0]
            );
        }
    }

    #[test]
    fn identifier_runs_follow_the_keyword_table(ident in "[a-zA-Z_][a-zA-Z0-9_]{0,10}") {
        let tokens = tokenize(&ident);

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].lexeme, &ident);
        prop_assert_eq!(tokens[0].kind, lookup_identifier(&ident));
    }

    #[test]
    fn two_character_operators_are_one_token(index in 0..TWO_CHAR_OPERATORS.len(), pad in " {0,3}") {
        let (symbol, kind) = TWO_CHAR_OPERATORS[index];
        let tokens = tokenize(&format!("{pad}{symbol}{pad}"));

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, kind);
        prop_assert_eq!(tokens[0].lexeme.as_str(), symbol);
    }

    #[test]
    fn every_character_is_accounted_for(source in flat_source()) {
        let tokens = tokenize(&source);

        let lexemes: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        let significant: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(lexemes, significant);

        for token in tokens.iter().filter(|t| t.kind != TokenKind::EOF) {
            let at: String = source.chars().skip(token.position.column - 1).collect();
            prop_assert!(
                at.starts_with(&token.lexeme),
                "{:?} does not match the source at its column", token
            );
        }
    }
}

#[test]
fn every_reserved_word_yields_its_keyword() {
    for (word, kind) in RESERVED_LOOKUP.iter() {
        let tokens = tokenize(word);

        assert_eq!(tokens.len(), 2, "{word}");
        assert_eq!(tokens[0].kind, *kind, "{word}");
        assert!(kind.is_keyword());
        assert_ne!(kind.name(), "UNKNOWN");
    }
}
