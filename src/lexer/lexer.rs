use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{Position, MK_OPERATOR, MK_TOKEN};

use super::tokens::{lookup_decorator, lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"\A[\p{Alphabetic}_][\p{Alphabetic}0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\A[0-9]+(\.[0-9]+)?").unwrap();
    static ref OPERATOR_TABLE: HashMap<char, &'static OperatorRule> =
        OPERATORS.iter().map(|rule| (rule.symbol, rule)).collect();
}

/// Maximal-munch table. Comment openers are claimed by earlier rules, so `/`
/// only ever reaches this table as division.
const OPERATORS: &[OperatorRule] = &[
    MK_OPERATOR!('+' => [('+', TokenKind::Increment), ('=', TokenKind::PlusAssign)], TokenKind::Plus),
    MK_OPERATOR!('-' => [('-', TokenKind::Decrement), ('=', TokenKind::MinusAssign), ('>', TokenKind::Arrow)], TokenKind::Minus),
    MK_OPERATOR!('*' => [('=', TokenKind::MultAssign)], TokenKind::Multiply),
    MK_OPERATOR!('/' => [('=', TokenKind::DivAssign)], TokenKind::Divide),
    MK_OPERATOR!('%' => [('=', TokenKind::ModAssign)], TokenKind::Modulo),
    MK_OPERATOR!('=' => [('=', TokenKind::Eq), (':', TokenKind::Assign)], TokenKind::Illegal),
    MK_OPERATOR!(':' => [('=', TokenKind::BindAssign)], TokenKind::Colon),
    MK_OPERATOR!('!' => [('=', TokenKind::Neq)], TokenKind::Not),
    MK_OPERATOR!('<' => [('=', TokenKind::Lte)], TokenKind::Lt),
    MK_OPERATOR!('>' => [('=', TokenKind::Gte)], TokenKind::Gt),
    MK_OPERATOR!('&' => [('&', TokenKind::And)], TokenKind::Ampersand),
    MK_OPERATOR!('|' => [('|', TokenKind::Or)], _),
    MK_OPERATOR!('^', TokenKind::BitwiseXor),
    MK_OPERATOR!('(', TokenKind::LParen),
    MK_OPERATOR!(')', TokenKind::RParen),
    MK_OPERATOR!('[', TokenKind::LBracket),
    MK_OPERATOR!(']', TokenKind::RBracket),
    MK_OPERATOR!('{', TokenKind::LBrace),
    MK_OPERATOR!('}', TokenKind::RBrace),
    MK_OPERATOR!(';', TokenKind::Semicolon),
    MK_OPERATOR!(',', TokenKind::Comma),
    MK_OPERATOR!('.', TokenKind::Dot),
];

/// Ordered dispatch table. The first rule whose predicate accepts the current
/// character (and one character of lookahead) handles the token.
const RULES: &[LexRule] = &[
    LexRule { matches: is_line_comment, handler: line_comment_handler },
    LexRule { matches: is_block_comment, handler: block_comment_handler },
    LexRule { matches: is_decorator, handler: decorator_handler },
    LexRule { matches: is_identifier_start, handler: identifier_handler },
    LexRule { matches: is_digit, handler: number_handler },
    LexRule { matches: is_quote, handler: string_handler },
    LexRule { matches: is_newline, handler: newline_handler },
    LexRule { matches: is_operator, handler: operator_handler },
];

pub type Predicate = fn(char, Option<char>) -> bool;
pub type Handler = fn(&mut Lexer<'_>, Position);

#[derive(Clone, Copy)]
pub struct LexRule {
    matches: Predicate,
    handler: Handler,
}

/// One entry of the maximal-munch table: the two-character continuations of
/// `symbol` and the kind it takes on its own, if any.
#[derive(Debug, Clone, Copy)]
pub struct OperatorRule {
    pub symbol: char,
    pub pairs: &'static [(char, TokenKind)],
    pub single: Option<TokenKind>,
}

/// What to do with a `|` that is not part of `||`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LonePipe {
    /// Emit an [`TokenKind::Illegal`] token with lexeme `|`.
    #[default]
    Illegal,
    /// Consume the character without emitting anything. Legacy behaviour,
    /// breaks the guarantee that every character is accounted for.
    Drop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOptions {
    pub lone_pipe: LonePipe,
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    options: LexerOptions,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, options: LexerOptions) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            options,
        }
    }

    /// Runs the lexer to completion. The result always ends with exactly one
    /// [`TokenKind::EOF`] token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.at_eof() {
            self.skip_whitespace();

            let Some(ch) = self.at() else {
                break;
            };
            let start = self.position();
            let next = self.peek_next();

            match RULES.iter().find(|rule| (rule.matches)(ch, next)) {
                Some(rule) => (rule.handler)(&mut self, start),
                None => illegal_handler(&mut self, start),
            }
        }

        let end = self.position();
        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), end));

        debug!(
            tokens = self.tokens.len(),
            illegal = self.tokens.iter().filter(|t| t.kind == TokenKind::Illegal).count(),
            lines = end.line,
            "tokenized source"
        );

        self.tokens
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Consumes one character, moving to the next line after a newline.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Source text consumed since byte offset `start`.
    fn consumed_since(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.at() {
            if !ch.is_whitespace() || ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Consumes the match of an anchored pattern at the cursor.
    fn take_match(&mut self, pattern: &Regex) -> Option<&'a str> {
        let remainder = self.remainder();
        let matched = pattern.find(remainder).filter(|m| m.start() == 0 && !m.is_empty())?;
        let text = &remainder[..matched.end()];

        self.advance_n(text.chars().count());
        Some(text)
    }
}

fn is_line_comment(ch: char, next: Option<char>) -> bool {
    ch == '/' && next == Some('/')
}

fn is_block_comment(ch: char, next: Option<char>) -> bool {
    ch == '/' && next == Some('~')
}

fn is_decorator(ch: char, _next: Option<char>) -> bool {
    ch == '@'
}

fn is_identifier_start(ch: char, _next: Option<char>) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_digit(ch: char, _next: Option<char>) -> bool {
    ch.is_ascii_digit()
}

fn is_quote(ch: char, _next: Option<char>) -> bool {
    ch == '"' || ch == '\''
}

fn is_newline(ch: char, _next: Option<char>) -> bool {
    ch == '\n'
}

fn is_operator(ch: char, _next: Option<char>) -> bool {
    OPERATOR_TABLE.contains_key(&ch)
}

fn illegal_handler(lexer: &mut Lexer, start: Position) {
    if let Some(ch) = lexer.advance() {
        trace!(character = ?ch, line = start.line, column = start.column, "illegal character");
        lexer.push(MK_TOKEN!(TokenKind::Illegal, ch.to_string(), start));
    }
}

fn line_comment_handler(lexer: &mut Lexer, start: Position) {
    let offset = lexer.pos;
    lexer.advance_n(2);

    while lexer.at().is_some_and(|ch| ch != '\n') {
        lexer.advance();
    }

    let text = lexer.consumed_since(offset).to_string();
    lexer.push(MK_TOKEN!(TokenKind::CommentLine, text, start));
}

fn block_comment_handler(lexer: &mut Lexer, start: Position) {
    let offset = lexer.pos;
    lexer.advance_n(2);

    loop {
        if lexer.remainder().starts_with("~/") {
            lexer.advance_n(2);
            break;
        }
        // Unterminated comments run to the end of input without a closer.
        if lexer.advance().is_none() {
            break;
        }
    }

    let text = lexer.consumed_since(offset).to_string();
    lexer.push(MK_TOKEN!(TokenKind::CommentMulti, text, start));
}

fn decorator_handler(lexer: &mut Lexer, start: Position) {
    let offset = lexer.pos;
    lexer.advance();

    let kind = match lexer.take_match(&IDENTIFIER_PATTERN) {
        Some(name) => lookup_decorator(name).unwrap_or(TokenKind::Illegal),
        None => TokenKind::Illegal,
    };

    let text = lexer.consumed_since(offset).to_string();
    if kind == TokenKind::Illegal {
        trace!(lexeme = %text, line = start.line, column = start.column, "unknown decorator");
    }
    lexer.push(MK_TOKEN!(kind, text, start));
}

fn identifier_handler(lexer: &mut Lexer, start: Position) {
    match lexer.take_match(&IDENTIFIER_PATTERN) {
        Some(ident) => lexer.push(MK_TOKEN!(lookup_identifier(ident), ident.to_string(), start)),
        None => illegal_handler(lexer, start),
    }
}

fn number_handler(lexer: &mut Lexer, start: Position) {
    match lexer.take_match(&NUMBER_PATTERN) {
        Some(number) => {
            let kind = if number.contains('.') {
                TokenKind::Float
            } else {
                TokenKind::Integer
            };
            lexer.push(MK_TOKEN!(kind, number.to_string(), start));
        }
        None => illegal_handler(lexer, start),
    }
}

fn string_handler(lexer: &mut Lexer, start: Position) {
    let Some(quote) = lexer.advance() else {
        return;
    };
    let offset = lexer.pos;

    while let Some(ch) = lexer.at() {
        if ch == quote {
            break;
        }
        // Escapes stay in the lexeme undecoded; only the terminator check skips them.
        if ch == '\\' {
            lexer.advance();
        }
        lexer.advance();
    }

    let content = lexer.consumed_since(offset).to_string();
    if lexer.at() == Some(quote) {
        lexer.advance();
    }

    lexer.push(MK_TOKEN!(TokenKind::String, content, start));
}

fn newline_handler(lexer: &mut Lexer, start: Position) {
    lexer.advance();
    lexer.push(MK_TOKEN!(TokenKind::Newline, String::from("\\n"), start));
}

fn operator_handler(lexer: &mut Lexer, start: Position) {
    let offset = lexer.pos;
    let Some(rule) = lexer.advance().and_then(|ch| OPERATOR_TABLE.get(&ch).copied()) else {
        return;
    };

    let next = lexer.at();
    if let Some((_, kind)) = rule.pairs.iter().find(|(second, _)| Some(*second) == next) {
        lexer.advance();
        let text = lexer.consumed_since(offset).to_string();
        lexer.push(MK_TOKEN!(*kind, text, start));
        return;
    }

    let text = rule.symbol.to_string();
    match (rule.single, lexer.options.lone_pipe) {
        (Some(kind), _) => lexer.push(MK_TOKEN!(kind, text, start)),
        (None, LonePipe::Illegal) => {
            trace!(symbol = ?rule.symbol, line = start.line, column = start.column, "operator without standalone meaning");
            lexer.push(MK_TOKEN!(TokenKind::Illegal, text, start));
        }
        (None, LonePipe::Drop) => {
            trace!(symbol = ?rule.symbol, line = start.line, column = start.column, "dropping lone operator");
        }
    }
}

/// Tokenizes `source` with the default [`LexerOptions`].
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_options(source, LexerOptions::default())
}

pub fn tokenize_with_options(source: &str, options: LexerOptions) -> Vec<Token> {
    Lexer::new(source, options).tokenize()
}
