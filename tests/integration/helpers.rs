//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use chrono::{Datelike, Local};
use serde_json::Value;
use tower::ServiceExt;

use truckreg_api::AppState;
use truckreg_core::config::{AppConfig, DatabaseConfig};
use truckreg_database::{MemoryRepository, TruckStore};
use truckreg_entity::truck::{Truck, TruckModel};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Repository behind the router, for direct inspection
    pub repo: MemoryRepository<Truck>,
}

impl TestApp {
    /// Create a test application over an empty in-memory store
    pub fn new() -> Self {
        Self::with_repository(MemoryRepository::new())
    }

    /// Create a test application whose store holds trucks 1..=3:
    /// `FH 2021/2021`, `FH 2020/2020`, `FM 2021/2021`
    pub fn seeded() -> Self {
        Self::with_repository(MemoryRepository::seeded([
            Truck::new(TruckModel::Fh, 2021, Some(2021)),
            Truck::new(TruckModel::Fh, 2020, Some(2020)),
            Truck::new(TruckModel::Fm, 2021, Some(2021)),
        ]))
    }

    fn with_repository(repo: MemoryRepository<Truck>) -> Self {
        let config = AppConfig {
            database: DatabaseConfig::memory(),
            ..AppConfig::default()
        };
        let store = TruckStore::memory(repo.clone());
        let router = truckreg_api::build_app(AppState::new(config, store));

        Self { router, repo }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, Some("application/json"), body_str)
            .await
    }

    /// Make a request with an arbitrary body and content type
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: impl Into<String>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            req = req.header(header::CONTENT_TYPE, content_type);
        }

        let req = req
            .body(Body::from(body.into()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            raw_len: body_bytes.len(),
        }
    }
}

/// The calendar year the server validates against
pub fn current_year() -> i32 {
    Local::now().year()
}

/// A body that passes every input rule this year
pub fn valid_truck(model: &str) -> Value {
    let year = current_year();
    serde_json::json!({
        "model": model,
        "productionYear": year,
        "modelYear": year + 1,
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when empty or not JSON
    pub body: Value,
    /// Body length in bytes
    pub raw_len: usize,
}

impl TestResponse {
    /// Value of a header as a string
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Assert the response is a problem document with the given status
    pub fn assert_problem(&self, status: StatusCode) {
        assert_eq!(self.status, status, "Unexpected status: {:?}", self.body);
        assert_eq!(
            self.header(header::CONTENT_TYPE),
            Some("application/problem+json")
        );
        assert_eq!(self.body["status"], status.as_u16());
    }

    /// Messages reported for a field in a validation problem
    pub fn field_errors(&self, field: &str) -> Vec<String> {
        self.body["errors"][field]
            .as_array()
            .map(|messages| {
                messages
                    .iter()
                    .filter_map(|m| m.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
