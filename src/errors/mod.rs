//! Error types for the service adapters.
//!
//! The tokenizer itself has no error channel. These errors cover what can go
//! wrong around it:
//!
//! - Malformed or unreadable request bodies
//! - Unsupported request methods
//! - Server start-up and I/O failures

pub mod errors;
