//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_OPERATOR!` - Creates an entry of the maximal-munch operator table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$position` - Line and column of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Creates an [`OperatorRule`](crate::lexer::lexer::OperatorRule).
///
/// The first form is a symbol that never looks ahead, the second lists the
/// two-character continuations before the single-character fallback. A
/// fallback of `_` means the symbol has no meaning on its own.
///
/// # Example
///
/// ```ignore
/// MK_OPERATOR!('+' => [('+', TokenKind::Increment), ('=', TokenKind::PlusAssign)], TokenKind::Plus);
/// MK_OPERATOR!(';', TokenKind::Semicolon);
/// ```
#[macro_export]
macro_rules! MK_OPERATOR {
    ($symbol:literal, $kind:expr) => {
        OperatorRule {
            symbol: $symbol,
            pairs: &[],
            single: Some($kind),
        }
    };
    ($symbol:literal => [$(($second:literal, $pair:expr)),+ $(,)?], _) => {
        OperatorRule {
            symbol: $symbol,
            pairs: &[$(($second, $pair)),+],
            single: None,
        }
    };
    ($symbol:literal => [$(($second:literal, $pair:expr)),+ $(,)?], $kind:expr) => {
        OperatorRule {
            symbol: $symbol,
            pairs: &[$(($second, $pair)),+],
            single: Some($kind),
        }
    };
}
