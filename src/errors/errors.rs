use std::fmt::Display;

use axum::http::StatusCode;
use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn at(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MethodNotAllowed => "MethodNotAllowed",
            ErrorImpl::UnreadableBody => "UnreadableBody",
            ErrorImpl::InvalidJson { .. } => "InvalidJson",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
            ErrorImpl::InvalidAddress { .. } => "InvalidAddress",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MethodNotAllowed => {
                ErrorTip::Suggestion(String::from("Send source code with a POST request"))
            }
            ErrorImpl::UnreadableBody => ErrorTip::None,
            ErrorImpl::InvalidJson { message } => match &self.position {
                Some(position) => ErrorTip::Suggestion(format!(
                    "{} (line {}, column {})",
                    message, position.line, position.column
                )),
                None => ErrorTip::Suggestion(message.clone()),
            },
            ErrorImpl::SourceTooLarge { limit } => {
                ErrorTip::Suggestion(format!("Request bodies are limited to {} bytes", limit))
            }
            ErrorImpl::InvalidAddress { address } => {
                ErrorTip::Suggestion(format!("`{}` is not a valid host:port pair", address))
            }
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match &self.internal_error {
            ErrorImpl::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorImpl::UnreadableBody | ErrorImpl::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            ErrorImpl::SourceTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorImpl::InvalidAddress { .. } | ErrorImpl::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::at(
            ErrorImpl::InvalidJson {
                message: error.to_string(),
            },
            Position {
                line: error.line(),
                column: error.column(),
            },
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorImpl::Io {
            message: error.to_string(),
        })
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("unable to read body")]
    UnreadableBody,
    #[error("invalid json")]
    InvalidJson { message: String },
    #[error("source exceeds the {limit} byte limit")]
    SourceTooLarge { limit: usize },
    #[error("invalid listen address {address:?}")]
    InvalidAddress { address: String },
    #[error("io error: {message}")]
    Io { message: String },
}
