use clap::Parser;
use synta::{
    init_logging,
    server::server::{start_server, ServerConfig},
    LexerOptions, LonePipe,
};

/// Synta analyzer HTTP server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "SYNTA_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "SYNTA_PORT", default_value_t = 8080)]
    port: u16,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "SYNTA_MAX_BODY_BYTES", default_value_t = 1024 * 1024)]
    max_body_bytes: usize,

    /// Silently drop a `|` that is not part of `||` instead of reporting it
    #[arg(long)]
    legacy_lone_pipe: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "SYNTA_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        max_body_bytes: cli.max_body_bytes,
        lexer: LexerOptions {
            lone_pipe: if cli.legacy_lone_pipe {
                LonePipe::Drop
            } else {
                LonePipe::Illegal
            },
        },
    };

    start_server(config).await?;

    Ok(())
}
