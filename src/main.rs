use std::{fs::read_to_string, path::PathBuf};

use clap::Parser;
use synta::{
    errors::errors::Error,
    init_logging,
    lexer::tokens::TokenKind,
    render_diagnostic,
    server::models::AnalyzeResponse,
    tokenize_with_options, LexerOptions, LonePipe,
};

const SAMPLE: &str = include_str!("../demos/agent.synta");

/// Print the tokens of a Synta source file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to tokenize. The bundled sample is used when omitted
    file: Option<PathBuf>,

    /// Print NEWLINE tokens as well
    #[arg(long)]
    show_newlines: bool,

    /// Print the JSON payload the HTTP server would return
    #[arg(long)]
    json: bool,

    /// Silently drop a `|` that is not part of `||` instead of reporting it
    #[arg(long)]
    legacy_lone_pipe: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "SYNTA_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let (file_name, source) = match &cli.file {
        Some(path) => (
            path.display().to_string(),
            read_to_string(path).map_err(Error::from)?,
        ),
        None => (String::from("demos/agent.synta"), SAMPLE.to_string()),
    };

    let options = LexerOptions {
        lone_pipe: if cli.legacy_lone_pipe {
            LonePipe::Drop
        } else {
            LonePipe::Illegal
        },
    };
    let tokens = tokenize_with_options(&source, options);

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&AnalyzeResponse::from_tokens(&tokens))?
        );
    } else {
        println!("Synta Lexer - Token Output");
        println!("===========================");
        for token in &tokens {
            if token.kind == TokenKind::Newline && !cli.show_newlines {
                continue;
            }
            println!("{}", token);
        }
    }

    for diagnostic in tokens
        .iter()
        .filter_map(|token| render_diagnostic(token, &source, &file_name))
    {
        eprintln!("{}\n", diagnostic);
    }

    Ok(())
}
