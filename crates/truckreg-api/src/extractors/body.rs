//! `TruckBody` extractor: decodes and validates a truck request body.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use truckreg_core::error::{AppError, FieldViolation};
use truckreg_service::TruckInput;

use crate::error::{ApiError, ProblemDetails};

/// Field name used for violations that concern the body as a whole.
pub const BODY_FIELD: &str = "$";

/// A truck body that decoded and passed every input rule.
///
/// Undecodable JSON and rule violations are both rejected with a 400
/// validation problem; a body that is not declared as JSON gets 415.
#[derive(Debug, Clone)]
pub struct TruckBody(pub TruckInput);

impl<S> FromRequest<S> for TruckBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<TruckInput>::from_request(req, state)
            .await
            .map_err(reject_json)?;

        let violations = input.violations();
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "Truck body failed validation");
            return Err(ApiError(AppError::invalid_fields(violations)).into_response());
        }

        Ok(TruckBody(input))
    }
}

fn reject_json(rejection: JsonRejection) -> Response {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ProblemDetails::for_status(StatusCode::UNSUPPORTED_MEDIA_TYPE).into_response()
        }
        other => {
            let violation = FieldViolation::new(BODY_FIELD, other.body_text());
            ApiError(AppError::invalid_fields(vec![violation])).into_response()
        }
    }
}
