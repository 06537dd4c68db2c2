//! Route definitions for the truck registry HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::ProblemDetails;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Paths no route handles are served from `server.static_dir` when it is
/// configured, falling back to its `index.html` for client-side routes.
/// Without a static directory they get a 404 problem.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let router = Router::new()
        .merge(truck_routes())
        .merge(system_routes());

    let router = match state.config.server.static_dir.as_deref() {
        Some(dir) => {
            tracing::info!(dir, "Serving static files for unmatched paths");
            let index = std::path::Path::new(dir).join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router.fallback(not_found),
    };

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Truck CRUD endpoints
fn truck_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/truck",
            get(handlers::truck::list_trucks).post(handlers::truck::create_truck),
        )
        .route(
            "/truck/{id}",
            get(handlers::truck::get_truck)
                .put(handlers::truck::update_truck)
                .delete(handlers::truck::delete_truck),
        )
}

/// Error and health endpoints
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/error", get(handlers::error::error))
        .route("/health", get(handlers::health::health))
}

async fn not_found() -> impl IntoResponse {
    ProblemDetails::for_status(StatusCode::NOT_FOUND)
}
