use std::net::SocketAddr;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::post,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::lexer::LexerOptions;

use super::handlers;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Largest request body accepted, in bytes
    pub max_body_bytes: usize,

    /// Options handed to every lexer the server creates
    pub lexer: LexerOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 1024 * 1024,
            lexer: LexerOptions::default(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> Result<SocketAddr, Error> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse::<SocketAddr>()
            .map_err(|_| Error::new(ErrorImpl::InvalidAddress { address }))
    }
}

/// Read-only state shared by all requests
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub lexer_options: LexerOptions,
    pub max_body_bytes: usize,
}

/// Builds the router with CORS, tracing and the body limit applied.
pub fn create_router(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let state = AppState {
        lexer_options: config.lexer,
        max_body_bytes: config.max_body_bytes,
    };

    Router::new()
        .route(
            "/api/analyze",
            post(handlers::analyze)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server and run until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<(), Error> {
    let addr = config.address()?;
    let app = create_router(&config);

    info!(
        %addr,
        max_body_bytes = config.max_body_bytes,
        lone_pipe = ?config.lexer.lone_pipe,
        "analyzer HTTP server listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("analyzer HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
