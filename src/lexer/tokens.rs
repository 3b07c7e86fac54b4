use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        // Control flow
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("match", TokenKind::Match);
        map.insert("return", TokenKind::Return);
        map.insert("await", TokenKind::Await);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        // Declarations
        map.insert("bind", TokenKind::Bind);
        map.insert("const", TokenKind::Const);
        map.insert("craft", TokenKind::Craft);
        map.insert("use", TokenKind::Use);
        map.insert("as", TokenKind::As);
        map.insert("from", TokenKind::From);
        map.insert("fn", TokenKind::Fn);
        map.insert("struct", TokenKind::Struct);
        // Error handling
        map.insert("try", TokenKind::Try);
        map.insert("catch", TokenKind::Catch);
        map.insert("raise", TokenKind::Raise);
        // Type system
        map.insert("type", TokenKind::Type);
        map.insert("cast", TokenKind::Cast);
        map.insert("any", TokenKind::Any);
        map.insert("none", TokenKind::None);
        map.insert("trait", TokenKind::Trait);
        map.insert("int", TokenKind::IntType);
        map.insert("float", TokenKind::FloatType);
        map.insert("char", TokenKind::CharType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("str", TokenKind::StrType);
        // Concurrency
        map.insert("async", TokenKind::Async);
        map.insert("emit", TokenKind::Emit);
        map.insert("listen", TokenKind::Listen);
        map.insert("dispatch", TokenKind::Dispatch);
        map.insert("merge", TokenKind::Merge);
        // Special constructs
        map.insert("with", TokenKind::With);
        map.insert("then", TokenKind::Then);
        map.insert("defer", TokenKind::Defer);
        map.insert("pipe", TokenKind::Pipe);
        map.insert("pass", TokenKind::Pass);
        // AI integration
        map.insert("think", TokenKind::Think);
        map.insert("ask", TokenKind::Ask);
        map.insert("prompt", TokenKind::Prompt);
        map.insert("adapt", TokenKind::Adapt);
        map.insert("call_api", TokenKind::CallApi);
        map.insert("train", TokenKind::Train);
        map.insert("evaluate", TokenKind::Evaluate);
        map.insert("reason", TokenKind::Reason);
        map.insert("observe", TokenKind::Observe);
        // I/O
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map.insert("print", TokenKind::Print);
        map.insert("log", TokenKind::Log);
        map.insert("save", TokenKind::Save);
        map.insert("flow", TokenKind::Flow);
        map.insert("context", TokenKind::Context);
        map.insert("memory", TokenKind::Memory);
        // Reserved
        map.insert("Agent", TokenKind::Agent);
        map.insert("Core", TokenKind::Core);
        map.insert("model", TokenKind::Model);
        map.insert("tools", TokenKind::Tools);
        map.insert("role", TokenKind::Role);
        map.insert("mode", TokenKind::Mode);
        map.insert("sys_prompt", TokenKind::SysPrompt);
        map.insert("own", TokenKind::Own);
        map.insert("move", TokenKind::Move);
        map.insert("drop", TokenKind::Drop);
        map.insert("let", TokenKind::Let);
        map.insert("pub", TokenKind::Pub);
        map.insert("priv", TokenKind::Priv);
        map.insert("global", TokenKind::Global);
        map.insert("unsafe", TokenKind::Unsafe);
        map.insert("raw", TokenKind::Raw);
        map.insert("future", TokenKind::Future);
        map.insert("macro", TokenKind::Macro);
        map.insert("delegate", TokenKind::Delegate);
        map.insert("route", TokenKind::Route);
        map.insert("compose", TokenKind::Compose);
        map.insert("inspect", TokenKind::Inspect);
        // Noise
        map.insert("please", TokenKind::Please);
        map.insert("maybe", TokenKind::Maybe);
        map.insert("do", TokenKind::Do);
        map
    };

    /// Names that are only reserved directly after an `@`.
    pub static ref DECORATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("agent", TokenKind::AtAgent);
        map.insert("task", TokenKind::AtTask);
        map
    };

    pub static ref TOKEN_NAMES: HashMap<TokenKind, &'static str> = {
        use TokenKind::*;

        HashMap::from([
            (Identifier, "IDENTIFIER"), (Integer, "INTEGER"), (Float, "FLOAT"), (String, "STRING"),
            (If, "IF"), (Elif, "ELIF"), (Else, "ELSE"), (While, "WHILE"), (Match, "MATCH"),
            (Return, "RETURN"), (Await, "AWAIT"), (Break, "BREAK"), (Continue, "CONTINUE"),
            (Bind, "BIND"), (Const, "CONST"), (Craft, "CRAFT"), (Use, "USE"), (As, "AS"),
            (From, "FROM"), (Fn, "FN"), (Struct, "STRUCT"),
            (Try, "TRY"), (Catch, "CATCH"), (Raise, "RAISE"),
            (Type, "TYPE"), (Cast, "CAST"), (Any, "ANY"), (None, "NONE"), (Trait, "TRAIT"),
            (IntType, "INT_TYPE"), (FloatType, "FLOAT_TYPE"), (CharType, "CHAR_TYPE"),
            (BoolType, "BOOL_TYPE"), (StrType, "STR_TYPE"),
            (Async, "ASYNC"), (Emit, "EMIT"), (Listen, "LISTEN"), (Dispatch, "DISPATCH"), (Merge, "MERGE"),
            (With, "WITH"), (Then, "THEN"), (Defer, "DEFER"), (Pipe, "PIPE"), (Pass, "PASS"),
            (Think, "THINK"), (Ask, "ASK"), (Prompt, "PROMPT"), (Adapt, "ADAPT"), (CallApi, "CALL_API"),
            (Train, "TRAIN"), (Evaluate, "EVALUATE"), (Reason, "REASON"), (Observe, "OBSERVE"),
            (AtAgent, "AT_AGENT"), (AtTask, "AT_TASK"),
            (Read, "READ"), (Write, "WRITE"), (Print, "PRINT"), (Log, "LOG"), (Save, "SAVE"),
            (Flow, "FLOW"), (Context, "CONTEXT"), (Memory, "MEMORY"),
            (Agent, "AGENT"), (Core, "CORE"), (Model, "MODEL"), (Tools, "TOOLS"), (Role, "ROLE"),
            (Mode, "MODE"), (SysPrompt, "SYS_PROMPT"), (Own, "OWN"), (Move, "MOVE"), (Drop, "DROP"),
            (Let, "LET"), (Pub, "PUB"), (Priv, "PRIV"), (Global, "GLOBAL"), (Unsafe, "UNSAFE"),
            (Raw, "RAW"), (Future, "FUTURE"), (Macro, "MACRO"), (Delegate, "DELEGATE"),
            (Route, "ROUTE"), (Compose, "COMPOSE"), (Inspect, "INSPECT"),
            (Please, "PLEASE"), (Maybe, "MAYBE"), (Do, "DO"),
            (Plus, "PLUS"), (Minus, "MINUS"), (Multiply, "MULTIPLY"), (Divide, "DIVIDE"), (Modulo, "MODULO"),
            (Assign, "ASSIGN"), (BindAssign, "BIND_ASSIGN"), (PlusAssign, "PLUS_ASSIGN"),
            (MinusAssign, "MINUS_ASSIGN"), (MultAssign, "MULT_ASSIGN"), (DivAssign, "DIV_ASSIGN"),
            (ModAssign, "MOD_ASSIGN"), (Eq, "EQ"), (Neq, "NEQ"), (Lt, "LT"), (Gt, "GT"),
            (Lte, "LTE"), (Gte, "GTE"), (And, "AND"), (Or, "OR"), (Not, "NOT"),
            (BitwiseXor, "BITWISE_XOR"), (Ampersand, "AMPERSAND"), (Increment, "INCREMENT"),
            (Decrement, "DECREMENT"), (Arrow, "ARROW"),
            (LParen, "LPAREN"), (RParen, "RPAREN"), (LBracket, "LBRACKET"), (RBracket, "RBRACKET"),
            (LBrace, "LBRACE"), (RBrace, "RBRACE"), (Semicolon, "SEMICOLON"), (Comma, "COMMA"),
            (Colon, "COLON"), (Dot, "DOT"),
            (CommentLine, "COMMENT_LINE"), (CommentMulti, "COMMENT_MULTI"),
            (Newline, "NEWLINE"), (EOF, "EOF"), (Illegal, "ILLEGAL"),
        ])
    };
}

/// Resolves an identifier-shaped run to its keyword kind, or
/// [`TokenKind::Identifier`] when the run is not reserved.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

/// Resolves the word following an `@`. Only decorator names are accepted.
pub fn lookup_decorator(name: &str) -> Option<TokenKind> {
    DECORATOR_LOOKUP.get(name).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Literals
    Identifier,
    Integer,
    Float,
    String,

    // Control flow
    If,
    Elif,
    Else,
    While,
    Match,
    Return,
    Await,
    Break,
    Continue,

    // Declarations
    Bind,
    Const,
    Craft,
    Use,
    As,
    From,
    Fn,
    Struct,

    // Error handling
    Try,
    Catch,
    Raise,

    // Type system
    Type,
    Cast,
    Any,
    None,
    Trait,
    IntType,
    FloatType,
    CharType,
    BoolType,
    StrType,

    // Concurrency
    Async,
    Emit,
    Listen,
    Dispatch,
    Merge,

    // Special constructs
    With,
    Then,
    Defer,
    Pipe,
    Pass,

    // AI integration
    Think,
    Ask,
    Prompt,
    Adapt,
    CallApi,
    Train,
    Evaluate,
    Reason,
    Observe,
    AtAgent, // @agent
    AtTask,  // @task

    // I/O
    Read,
    Write,
    Print,
    Log,
    Save,
    Flow,
    Context,
    Memory,

    // Reserved
    Agent,
    Core,
    Model,
    Tools,
    Role,
    Mode,
    SysPrompt,
    Own,
    Move,
    Drop,
    Let,
    Pub,
    Priv,
    Global,
    Unsafe,
    Raw,
    Future,
    Macro,
    Delegate,
    Route,
    Compose,
    Inspect,

    // Noise
    Please,
    Maybe,
    Do,

    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Assign,     // =:
    BindAssign, // :=
    PlusAssign,
    MinusAssign,
    MultAssign,
    DivAssign,
    ModAssign,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
    And,
    Or,
    Not,
    BitwiseXor,
    Ampersand,
    Increment,
    Decrement,
    Arrow, // ->

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Colon,
    Dot,

    CommentLine,
    CommentMulti,
    Newline,
    EOF,
    Illegal,
}

impl TokenKind {
    /// Display name used by the service adapters, e.g. `BIND_ASSIGN`.
    pub fn name(&self) -> &'static str {
        TOKEN_NAMES.get(self).copied().unwrap_or("UNKNOWN")
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    pub fn is_decorator(&self) -> bool {
        matches!(self, TokenKind::AtAgent | TokenKind::AtTask)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::CommentLine | TokenKind::CommentMulti)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<15} {:<20} Line: {}, Col: {}",
            self.kind.name(),
            format!("'{}'", self.lexeme),
            self.position.line,
            self.position.column
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}
