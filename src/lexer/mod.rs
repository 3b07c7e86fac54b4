//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Synta source
//! code into a stream of tokens. It handles:
//!
//! - Table-driven dispatch on the current character and one character of lookahead
//! - Recognition of keywords, `@` decorators, identifiers, literals, and operators
//! - Line and block comments, kept as tokens
//! - Line/column tracking for every token
//!
//! Tokenizing never fails: input that fits no rule becomes an
//! [`Illegal`](tokens::TokenKind::Illegal) token and scanning continues.

pub mod lexer;
pub mod tokens;
