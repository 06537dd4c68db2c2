//! Maps domain `AppError` to RFC 7807 problem responses.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use truckreg_core::error::{AppError, ErrorKind, FieldViolation};

/// Media type of every error body.
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Title used for problems carrying field violations.
pub const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Problem details body.
///
/// Only the status reaches the caller. Validation problems add the
/// violated rules per field; nothing else about the cause is exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Reference describing the problem type.
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short summary of the problem type.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Messages keyed by the JSON name of the offending field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDetails {
    /// Plain problem for a status code.
    pub fn for_status(status: StatusCode) -> Self {
        let title = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "An error occurred while processing your request."
        } else {
            status.canonical_reason().unwrap_or("Unknown Status")
        };
        Self {
            problem_type: problem_type(status).to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            errors: None,
        }
    }

    /// 400 problem listing every violation, grouped by field.
    pub fn validation(violations: &[FieldViolation]) -> Self {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for v in violations {
            errors
                .entry(v.field.clone())
                .or_default()
                .push(v.message.clone());
        }
        Self {
            title: VALIDATION_TITLE.to_string(),
            errors: Some(errors),
            ..Self::for_status(StatusCode::BAD_REQUEST)
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn problem_type(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "https://tools.ietf.org/html/rfc7231#section-6.5.1",
        403 => "https://tools.ietf.org/html/rfc7231#section-6.5.3",
        404 => "https://tools.ietf.org/html/rfc7231#section-6.5.4",
        405 => "https://tools.ietf.org/html/rfc7231#section-6.5.5",
        406 => "https://tools.ietf.org/html/rfc7231#section-6.5.6",
        409 => "https://tools.ietf.org/html/rfc7231#section-6.5.8",
        415 => "https://tools.ietf.org/html/rfc7231#section-6.5.13",
        500 => "https://tools.ietf.org/html/rfc7231#section-6.6.1",
        503 => "https://tools.ietf.org/html/rfc7231#section-6.6.4",
        _ => "about:blank",
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, PROBLEM_JSON)],
            Json(self),
        )
            .into_response()
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::BadRequest | ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Wrapper that lets handlers return [`AppError`] through `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
        } else {
            tracing::debug!(kind = %err.kind, status = status.as_u16(), error = %err.message, "Request rejected");
        }

        if err.kind == ErrorKind::Validation && !err.violations.is_empty() {
            ProblemDetails::validation(&err.violations).into_response()
        } else {
            ProblemDetails::for_status(status).into_response()
        }
    }
}
