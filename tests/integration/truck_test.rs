//! Integration tests for the truck endpoints.

mod helpers;

use axum::http::{StatusCode, header};
use serde_json::json;

use helpers::{TestApp, current_year, valid_truck};

#[tokio::test]
async fn test_list_seeded_trucks() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/truck", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            { "id": 1, "model": "FH", "productionYear": 2021, "modelYear": 2021 },
            { "id": 2, "model": "FH", "productionYear": 2020, "modelYear": 2020 },
            { "id": 3, "model": "FM", "productionYear": 2021, "modelYear": 2021 },
        ])
    );
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = TestApp::new();

    let response = app.request("GET", "/truck", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_get_truck() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/truck/2", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "id": 2, "model": "FH", "productionYear": 2020, "modelYear": 2020 })
    );
}

#[tokio::test]
async fn test_get_truck_not_found() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/truck/99", None).await;

    response.assert_problem(StatusCode::NOT_FOUND);
    assert_eq!(response.body["title"], "Not Found");
    assert_eq!(
        response.body["type"],
        "https://tools.ietf.org/html/rfc7231#section-6.5.4"
    );
    assert!(response.body.get("errors").is_none());
}

#[tokio::test]
async fn test_non_integer_id_is_not_found() {
    let app = TestApp::seeded();

    let response = app.request("GET", "/truck/abc", None).await;

    response.assert_problem(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_truck() {
    let app = TestApp::seeded();
    let year = current_year();

    let response = app.request("POST", "/truck", Some(valid_truck("FM"))).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.header(header::LOCATION), Some("/truck/4"));
    assert_eq!(
        response.body,
        json!({ "id": 4, "model": "FM", "productionYear": year, "modelYear": year + 1 })
    );

    let fetched = app.request("GET", "/truck/4", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, response.body);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = TestApp::seeded();
    let mut body = valid_truck("FH");
    body["id"] = json!(2);

    let response = app.request("POST", "/truck", Some(body)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 4);

    let untouched = app.request("GET", "/truck/2", None).await;
    assert_eq!(untouched.body["productionYear"], 2020);
}

#[tokio::test]
async fn test_identical_creates_get_distinct_ids() {
    let app = TestApp::new();

    let first = app.request("POST", "/truck", Some(valid_truck("FH"))).await;
    let second = app.request("POST", "/truck", Some(valid_truck("FH"))).await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::CREATED);
    assert_ne!(first.body["id"], second.body["id"]);
}

#[tokio::test]
async fn test_create_reports_every_violation() {
    let app = TestApp::seeded();
    let year = current_year();

    let response = app
        .request(
            "POST",
            "/truck",
            Some(json!({ "model": "VNL", "productionYear": year - 1, "modelYear": year + 2 })),
        )
        .await;

    response.assert_problem(StatusCode::BAD_REQUEST);
    assert_eq!(response.body["title"], "One or more validation errors occurred.");
    assert_eq!(
        response.field_errors("model"),
        vec!["The field Model must be one of: FH, FM."]
    );
    assert_eq!(response.field_errors("productionYear").len(), 1);
    assert_eq!(response.field_errors("modelYear").len(), 1);

    let all = app.request("GET", "/truck", None).await;
    assert_eq!(all.body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_create_missing_fields() {
    let app = TestApp::new();

    let response = app.request("POST", "/truck", Some(json!({}))).await;

    response.assert_problem(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("model"),
        vec!["The Model field is required."]
    );
    assert_eq!(
        response.field_errors("productionYear"),
        vec!["The ProductionYear field is required."]
    );
    assert_eq!(
        response.field_errors("modelYear"),
        vec!["The ModelYear field is required."]
    );
}

#[tokio::test]
async fn test_create_malformed_json() {
    let app = TestApp::new();

    let response = app
        .raw_request("POST", "/truck", Some("application/json"), "{\"model\": ")
        .await;

    response.assert_problem(StatusCode::BAD_REQUEST);
    assert_eq!(response.field_errors("$").len(), 1);
}

#[tokio::test]
async fn test_create_wrong_json_type() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/truck",
            Some(json!({ "model": "FH", "productionYear": "this year", "modelYear": 2022 })),
        )
        .await;

    response.assert_problem(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_without_json_content_type() {
    let app = TestApp::new();

    let response = app
        .raw_request("POST", "/truck", None, valid_truck("FH").to_string())
        .await;

    response.assert_problem(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_update_truck() {
    let app = TestApp::seeded();
    let year = current_year();

    let response = app
        .request(
            "PUT",
            "/truck/2",
            Some(json!({ "model": "FM", "productionYear": year, "modelYear": year })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.raw_len, 0);

    let fetched = app.request("GET", "/truck/2", None).await;
    assert_eq!(
        fetched.body,
        json!({ "id": 2, "model": "FM", "productionYear": year, "modelYear": year })
    );
}

#[tokio::test]
async fn test_update_missing_truck() {
    let app = TestApp::seeded();

    let response = app
        .request("PUT", "/truck/42", Some(valid_truck("FH")))
        .await;

    response.assert_problem(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_invalid_body_leaves_record() {
    let app = TestApp::seeded();

    let response = app
        .request(
            "PUT",
            "/truck/1",
            Some(json!({ "model": "FH", "productionYear": 1999, "modelYear": 2021 })),
        )
        .await;

    response.assert_problem(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.field_errors("productionYear")[0],
        "The field ProductionYear must be between 2000 and 2099."
    );

    let fetched = app.request("GET", "/truck/1", None).await;
    assert_eq!(fetched.body["productionYear"], 2021);
}

#[tokio::test]
async fn test_delete_seeded_scenario() {
    let app = TestApp::seeded();

    let response = app.request("DELETE", "/truck/2", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.raw_len, 0);

    let all = app.request("GET", "/truck", None).await;
    let ids: Vec<i64> = all
        .body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let again = app.request("DELETE", "/truck/2", None).await;
    again.assert_problem(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repository_reflects_api_writes() {
    use truckreg_core::Repository;

    let app = TestApp::new();
    app.request("POST", "/truck", Some(valid_truck("FH"))).await;

    let stored = app.repo.get_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].production_year as i32, current_year());
}
