//! Integration tests for ranking HTTP endpoints.
//!
//! These tests verify the HTTP layer wiring for ARAS rankings:
//! 1. Request DTOs deserialize correctly
//! 2. Reports and errors serialize with the expected shape and status
//! 3. Presets round-trip through the ranking endpoint

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use aras_advisor::adapters::http::{ranking_routes, RankingAppState};
use aras_advisor::config::AnalysisConfig;
use aras_advisor::domain::aras::DegenerateColumnPolicy;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    ranking_routes(RankingAppState::new(AnalysisConfig::default()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn smartphone_body() -> Value {
    json!({
        "criteria": [
            { "name": "Price", "direction": "cost", "weight": 0.30 },
            { "name": "RAM", "direction": "benefit", "weight": 0.15 },
            { "name": "ROM", "direction": "benefit", "weight": 0.15 },
            { "name": "Battery", "direction": "benefit", "weight": 0.15 },
            { "name": "Camera", "direction": "benefit", "weight": 0.25 }
        ],
        "alternatives": [
            { "id": "samsung", "label": "Samsung Galaxy A54",
              "values": { "Price": 5.9, "RAM": 8, "ROM": 256, "Battery": 5000, "Camera": 50 } },
            { "id": "xiaomi", "label": "Xiaomi 13T",
              "values": { "Price": 6.5, "RAM": 12, "ROM": 256, "Battery": 5000, "Camera": 50 } },
            { "id": "infinix", "label": "Infinix GT 10 Pro",
              "values": { "Price": 4.4, "RAM": 8, "ROM": 256, "Battery": 5000, "Camera": 108 } },
            { "id": "realme", "label": "Realme 11 Pro",
              "values": { "Price": 5.5, "RAM": 12, "ROM": 512, "Battery": 5000, "Camera": 100 } }
        ]
    })
}

// =============================================================================
// Ranking
// =============================================================================

#[tokio::test]
async fn ranking_returns_full_report() {
    let (status, body) = send(app(), post_json("/api/aras/rankings", &smartphone_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best"]["id"], "realme");
    assert_eq!(body["ranking"].as_array().unwrap().len(), 4);
    assert_eq!(body["ranking"][1]["id"], "infinix");
    assert_eq!(body["extended_matrix"]["rows"][0]["code"], "A0");
    assert_eq!(
        body["extended_matrix"]["rows"][0]["values"],
        json!([4.4, 12.0, 512.0, 5000.0, 108.0])
    );
    assert_eq!(body["weighted_matrix"][0]["utility_degree"], 1.0);
    assert!(body["run_id"].is_string());
    assert!(body["conclusion"]
        .as_str()
        .unwrap()
        .contains("Realme 11 Pro (Rank 1)"));
}

#[tokio::test]
async fn ranking_reports_unbalanced_weights_without_failing() {
    let mut body = smartphone_body();
    body["criteria"][0]["weight"] = json!(0.8);

    let (status, body) = send(app(), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weights"]["balanced"], false);
    assert_eq!(body["weights"]["out_of_bounds"], json!(["Price"]));
}

#[tokio::test]
async fn zero_cost_column_is_unprocessable() {
    let mut body = smartphone_body();
    for alternative in body["alternatives"].as_array_mut().unwrap() {
        alternative["values"]["Price"] = json!(0);
    }

    let (status, body) = send(app(), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "DIVISION_BY_ZERO");
    assert_eq!(body["details"]["criterion"], "Price");
}

#[tokio::test]
async fn zero_column_option_ranks_anyway() {
    let mut body = smartphone_body();
    for alternative in body["alternatives"].as_array_mut().unwrap() {
        alternative["values"]["Price"] = json!(0);
    }
    body["options"] = json!({ "degenerate_columns": "zero_column" });

    let (status, body) = send(app(), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["normalized_matrix"]["zeroed_columns"], json!(["Price"]));
}

#[tokio::test]
async fn configured_policy_applies_when_request_has_none() {
    let state = RankingAppState::new(AnalysisConfig {
        degenerate_columns: DegenerateColumnPolicy::ZeroColumn,
        ..AnalysisConfig::default()
    });
    let mut body = smartphone_body();
    for alternative in body["alternatives"].as_array_mut().unwrap() {
        alternative["values"]["Price"] = json!(0);
    }

    let (status, _) = send(ranking_routes(state), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_value_names_alternative_and_criterion() {
    let mut body = smartphone_body();
    body["alternatives"][2]["values"]
        .as_object_mut()
        .unwrap()
        .remove("Camera");

    let (status, body) = send(app(), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MISSING_VALUE");
    assert_eq!(body["details"]["alternative"], "infinix");
    assert_eq!(body["details"]["criterion"], "Camera");
}

#[tokio::test]
async fn negative_value_is_unprocessable() {
    let mut body = smartphone_body();
    body["alternatives"][1]["values"]["RAM"] = json!(-12);

    let (status, body) = send(app(), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_VALUE");
    assert_eq!(body["details"]["alternative"], "xiaomi");
    assert_eq!(body["details"]["criterion"], "RAM");
}

#[tokio::test]
async fn optimal_row_id_is_unprocessable() {
    let mut body = smartphone_body();
    body["alternatives"][0]["id"] = json!("X0");

    let (status, body) = send(app(), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "RESERVED_ALTERNATIVE");
    assert_eq!(body["details"]["alternative"], "X0");
}

#[tokio::test]
async fn empty_alternatives_is_unprocessable() {
    let mut body = smartphone_body();
    body["alternatives"] = json!([]);

    let (status, body) = send(app(), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "EMPTY_MATRIX");
}

#[tokio::test]
async fn unknown_direction_is_bad_request() {
    let mut body = smartphone_body();
    body["criteria"][0]["direction"] = json!("sideways");

    let (status, body) = send(app(), post_json("/api/aras/rankings", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Presets
// =============================================================================

#[tokio::test]
async fn preset_can_be_posted_back() {
    let (status, preset) = send(app(), get("/api/aras/presets/smartphone")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(preset["criteria"].as_array().unwrap().len(), 5);

    let (status, body) = send(app(), post_json("/api/aras/rankings", &preset)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best"]["id"], "realme-11-pro");
}

#[tokio::test]
async fn preset_ranking_endpoint_matches_posted_preset() {
    let (status, body) = send(app(), get("/api/aras/presets/smartphone/ranking")).await;

    assert_eq!(status, StatusCode::OK);
    let order: Vec<&str> = body["ranking"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        order,
        vec!["realme-11-pro", "infinix-gt-10-pro", "xiaomi-13t", "samsung-galaxy-a54"]
    );
}

#[tokio::test]
async fn unknown_preset_is_not_found() {
    let (status, body) = send(app(), get("/api/aras/presets/laptop/ranking")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PRESET_UNAVAILABLE");
    assert_eq!(body["details"]["preset"], "laptop");
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
