use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{info, warn};

use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::lexer::tokenize_with_options;

use super::models::{AnalyzeRequest, AnalyzeResponse};
use super::server::AppState;

/// Tokenize source code
///
/// The body is parsed by hand so that malformed JSON gets the same error
/// envelope as every other failure.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeResponse>, Error> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::new(ErrorImpl::SourceTooLarge {
                limit: state.max_body_bytes,
            })
        } else {
            Error::new(ErrorImpl::UnreadableBody)
        }
    })?;

    let request: AnalyzeRequest = serde_json::from_slice(&body)?;

    info!(
        filename = request.filename.as_deref().unwrap_or("<none>"),
        bytes = request.code.len(),
        "analyzing source"
    );

    let tokens = tokenize_with_options(&request.code, state.lexer_options);
    Ok(Json(AnalyzeResponse::from_tokens(&tokens)))
}

/// Pre-flight requests get an empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> Error {
    Error::new(ErrorImpl::MethodNotAllowed)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(
            status = status.as_u16(),
            error = self.get_error_name(),
            tip = %self.get_tip(),
            "request rejected"
        );

        (status, Json(AnalyzeResponse::from_error(self.to_string()))).into_response()
    }
}
