use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use quotelens_core::{SourceError, SourceErrorKind, ValidationError};

/// Client-facing error body, `{"error": "..."}` on every failure path.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn bad_request(error: &ValidationError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
}

/// Upstream failures: missing data is a 404, everything else a 502.
pub fn upstream_failure(error: &SourceError) -> ApiError {
    let status = match error.kind() {
        SourceErrorKind::Unavailable => StatusCode::NOT_FOUND,
        SourceErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        SourceErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
        SourceErrorKind::Internal => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ErrorBody {
            error: error.message().to_owned(),
        }),
    )
}
