use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

// Every failure a proxy endpoint can produce. Handlers return
// Result<_, ApiError>; nothing escapes as an unhandled fault.
// 405 is produced by the router's method matching, not here.
#[derive(Debug)]
pub enum ApiError {
    RateLimited,
    BadRequest(&'static str),
    MissingApiKey,
    // Upstream answered with a non-success status; forwarded as-is
    // with the upstream body as details.
    Upstream { status: u16, details: String },
    UpstreamMalformed,
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": "Too Many Requests" }),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "API key not configured" }),
            ),
            ApiError::Upstream { status, details } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "error": "Upstream request failed", "details": details }),
            ),
            ApiError::UpstreamMalformed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Unexpected upstream response format" }),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(_: reqwest::Error) -> Self {
        ApiError::Internal
    }
}
