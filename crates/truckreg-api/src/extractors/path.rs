//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use truckreg_core::EntityId;
use truckreg_core::error::AppError;

use crate::error::ApiError;

/// Integer truck id taken from the `{id}` path segment.
///
/// A segment that is not an integer does not name a truck route, so it is
/// rejected as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruckId(pub EntityId);

impl<S> FromRequestParts<S> for TruckId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::not_found(format!("Missing truck id: {e}")))?;

        parse_id(&raw).map(TruckId).map_err(ApiError::from)
    }
}

/// Parses a truck id from a path segment.
pub fn parse_id(s: &str) -> Result<EntityId, AppError> {
    s.parse::<EntityId>()
        .map_err(|_| AppError::not_found(format!("Invalid truck id: {s}")))
}
