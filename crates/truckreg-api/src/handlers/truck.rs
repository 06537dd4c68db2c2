//! Truck CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use truckreg_service::TruckView;

use crate::error::ApiResult;
use crate::extractors::{TruckBody, TruckId};
use crate::state::AppState;

/// Path of a single truck, as used in the `Location` header.
pub fn truck_location(id: i32) -> String {
    format!("/truck/{id}")
}

/// GET /truck/{id}
pub async fn get_truck(
    State(state): State<AppState>,
    TruckId(id): TruckId,
) -> ApiResult<Json<TruckView>> {
    let truck = state.truck_service().get(id).await?;
    Ok(Json(truck))
}

/// GET /truck
pub async fn list_trucks(State(state): State<AppState>) -> ApiResult<Json<Vec<TruckView>>> {
    let trucks = state.truck_service().get_all().await?;
    Ok(Json(trucks))
}

/// POST /truck
pub async fn create_truck(
    State(state): State<AppState>,
    TruckBody(input): TruckBody,
) -> ApiResult<impl IntoResponse> {
    let truck = state.truck_service().add(&input).await?;
    let location = truck_location(truck.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(truck),
    ))
}

/// PUT /truck/{id}
pub async fn update_truck(
    State(state): State<AppState>,
    TruckId(id): TruckId,
    TruckBody(input): TruckBody,
) -> ApiResult<StatusCode> {
    state.truck_service().edit(id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /truck/{id}
pub async fn delete_truck(
    State(state): State<AppState>,
    TruckId(id): TruckId,
) -> ApiResult<StatusCode> {
    state.truck_service().delete(id).await?;
    Ok(StatusCode::OK)
}
