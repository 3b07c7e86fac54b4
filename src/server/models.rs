use serde::{Deserialize, Serialize};

use crate::lexer::tokens::Token;

/// Request for tokenizing source code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Source code to tokenize
    pub code: String,
    /// Name of the file the code came from. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// One token as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDto {
    pub lexeme: String,
    /// Display name of the token kind, e.g. `BIND_ASSIGN`
    #[serde(rename = "type")]
    pub kind: String,
    pub line: usize,
    pub column: usize,
}

impl From<&Token> for TokenDto {
    fn from(token: &Token) -> Self {
        TokenDto {
            lexeme: token.lexeme.clone(),
            kind: token.kind.name().to_string(),
            line: token.position.line,
            column: token.position.column,
        }
    }
}

/// Response carrying either the token list or an error description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        AnalyzeResponse {
            tokens: Some(tokens.iter().map(TokenDto::from).collect()),
            error: None,
        }
    }

    pub fn from_error(message: impl Into<String>) -> Self {
        AnalyzeResponse {
            tokens: None,
            error: Some(message.into()),
        }
    }
}
