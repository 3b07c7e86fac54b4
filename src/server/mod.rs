//! HTTP adapter around the tokenizer.
//!
//! Serves a single endpoint, `POST /api/analyze`, that accepts source code as
//! JSON and answers with the token list. Each request runs its own lexer.

pub mod handlers;
pub mod models;
pub mod server;
