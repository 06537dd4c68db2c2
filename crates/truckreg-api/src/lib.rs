//! # truckreg-api
//!
//! HTTP API layer for the truck registry built on Axum.
//!
//! Provides the truck REST endpoints, the error and health endpoints,
//! middleware (CORS, compression, request logging), extractors, and the
//! mapping from [`AppError`](truckreg_core::AppError) to problem responses.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::{ApiError, ApiResult, ProblemDetails};
pub use state::AppState;
