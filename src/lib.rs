#![allow(clippy::module_inception)]

use tracing_subscriber::EnvFilter;

use crate::lexer::tokens::{Token, TokenKind};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod server;

pub use lexer::lexer::{tokenize, tokenize_with_options, LexerOptions, LonePipe};

/// 1-based line and column of a character in the source. Columns count
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over
/// `level`. Calling this more than once is harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Returns the text of the line containing `position`, without its line break.
pub fn get_line_at_position(source: &str, position: Position) -> Option<String> {
    if position.line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(position.line - 1)
        .map(|line| line.trim_end_matches('\r').to_string())
}

/// Renders a source excerpt pointing at an illegal token:
///
/// ```text
/// Error: ILLEGAL `$`
/// -> main.synta
///   |
/// 2 | bind y := $;
///   | ----------^
/// ```
///
/// Returns `None` for any other kind of token.
pub fn render_diagnostic(token: &Token, source: &str, file: &str) -> Option<String> {
    if token.kind != TokenKind::Illegal {
        return None;
    }

    let line_text = get_line_at_position(source, token.position)?;

    let line_string = token.position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = token.position.column.checked_sub(removed_whitespace)?;

    let mut out = String::new();
    out.push_str(&format!("Error: {} `{}`\n", token.kind, token.lexeme));
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    Some(out)
}

/// Strips leading spaces and tabs, returning the rest and how many
/// characters were removed.
fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
