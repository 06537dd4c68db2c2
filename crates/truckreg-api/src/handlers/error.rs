//! Generic error endpoint.

use axum::extract::Query;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::error::ProblemDetails;

/// Query parameters for `/error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorParams {
    /// Status code to report. Defaults to 500.
    pub status: Option<u16>,
}

/// GET /error?status=...
///
/// Renders a bare problem response for the requested status.
pub async fn error(Query(params): Query<ErrorParams>) -> ProblemDetails {
    ProblemDetails::for_status(requested_status(params.status))
}

/// Resolve the `status` parameter. Only 4xx and 5xx codes are honored;
/// anything else, or no code at all, becomes 500.
pub fn requested_status(code: Option<u16>) -> StatusCode {
    code.and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|status| status.is_client_error() || status.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
