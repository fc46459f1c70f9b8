//! # Integration Tests for palette-api
//!
//! Drives the full router (middleware included) with `tower::ServiceExt::oneshot`:
//! health probes, the OpenAPI document, palette CRUD, and error shapes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use palette_api::state::AppState;

/// Helper: build the test app over the given state.
fn test_app(state: AppState) -> axum::Router {
    palette_api::app(state)
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &axum::Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/palettes", body.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn list(app: &axum::Router) -> Vec<Value> {
    let response = app.clone().oneshot(get("/api/palettes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    match body_json(response).await {
        Value::Array(items) => items,
        other => panic!("expected array, got {other}"),
    }
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let app = test_app(AppState::new());
    let response = app.oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let app = test_app(AppState::new());
    let response = app.oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app(AppState::new());
    let response = app.oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let spec = body_json(response).await;
    assert!(spec["paths"]["/api/palettes"].is_object());
    assert!(spec["paths"]["/api/palettes/{id}"].is_object());
}

// -- Palette CRUD -------------------------------------------------------------

#[tokio::test]
async fn test_list_empty_collection() {
    let app = test_app(AppState::new());
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_then_list_contains_exactly_one_match() {
    let app = test_app(AppState::new());
    let created = create(
        &app,
        json!({
            "title": "Dusk",
            "notes": "evening",
            "tags": ["Minimal"],
            "colors": ["#112233", "#ffeedd"],
            "textPairs": [{"background": "#112233", "text": "#ffffff"}]
        }),
    )
    .await;

    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["title"], "Dusk");

    let palettes = list(&app).await;
    let matches: Vec<&Value> = palettes.iter().filter(|p| p["id"] == id.as_str()).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["colors"], json!(["#112233", "#ffeedd"]));
    assert_eq!(matches[0]["textPairs"][0]["text"], "#ffffff");
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let app = test_app(AppState::new());
    let a = create(&app, json!({"title": "A"})).await;
    let b = create(&app, json!({"title": "B"})).await;
    assert_ne!(a["id"], b["id"]);
    assert_eq!(list(&app).await.len(), 2);
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let app = test_app(AppState::new());
    let created = create(&app, json!({"id": "chosen", "title": "T"})).await;
    assert_ne!(created["id"], "chosen");

    let response = app.oneshot(get("/api/palettes/chosen")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_palette_by_id() {
    let app = test_app(AppState::new());
    let created = create(&app, json!({"title": "Sea", "colors": ["#0000ff"]})).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(get(&format!("/api/palettes/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_missing_palette_returns_404() {
    let app = test_app(AppState::new());
    let response = app.oneshot(get("/api/palettes/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_merges_top_level_fields() {
    let app = test_app(AppState::new());
    let created = create(
        &app,
        json!({"title": "Old", "notes": "keep me", "colors": ["#000000"]}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/palettes/{id}"),
            json!({"title": "New", "colors": ["#ffffff", "#808080"]}).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "New");
    assert_eq!(body["notes"], "keep me");
    assert_eq!(body["colors"], json!(["#ffffff", "#808080"]));

    let stored = list(&app).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], body);
}

#[tokio::test]
async fn test_update_missing_palette_returns_404() {
    let app = test_app(AppState::new());
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/palettes/ghost",
            json!({"title": "X"}).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_list_excludes_id() {
    let app = test_app(AppState::new());
    let keep = create(&app, json!({"title": "Keep"})).await;
    let gone = create(&app, json!({"title": "Gone"})).await;
    let gone_id = gone["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/palettes/{gone_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let palettes = list(&app).await;
    assert_eq!(palettes.len(), 1);
    assert_eq!(palettes[0]["id"], keep["id"]);
    assert!(palettes.iter().all(|p| p["id"] != gone_id));
}

#[tokio::test]
async fn test_delete_absent_palette_is_idempotent() {
    let app = test_app(AppState::new());
    let response = app.oneshot(delete("/api/palettes/never")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// -- Error Shapes -------------------------------------------------------------

#[tokio::test]
async fn test_create_non_object_body_returns_400() {
    let app = test_app(AppState::new());
    let response = app
        .oneshot(json_request("POST", "/api/palettes", "[1, 2, 3]"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let app = test_app(AppState::new());
    let response = app
        .oneshot(json_request("POST", "/api/palettes", "{\"title\": "))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_without_title_returns_422() {
    let app = test_app(AppState::new());
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/palettes",
            json!({"colors": ["#ffffff"]}).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_update_with_blank_title_returns_422() {
    let app = test_app(AppState::new());
    let created = create(&app, json!({"title": "Fine"})).await;
    let id = created["id"].as_str().unwrap();
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/palettes/{id}"),
            json!({"title": "  "}).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// -- Legacy Documents ---------------------------------------------------------

#[tokio::test]
async fn test_legacy_documents_are_served_as_stored_and_normalize() {
    let state = AppState::new();
    let mut legacy = serde_json::Map::new();
    legacy.insert("title".into(), json!("Old Scheme"));
    legacy.insert("colors".into(), json!(["#abcdef", 7]));
    state.palettes.insert("legacy-1", legacy);

    let app = test_app(state);
    let palettes = list(&app).await;
    assert_eq!(palettes.len(), 1);
    assert!(palettes[0].get("tags").is_none());

    let palette = palette_core::normalize(&palettes[0]).unwrap();
    assert_eq!(palette.id.as_str(), "legacy-1");
    assert_eq!(palette.title, "Old Scheme");
    assert!(palette.tags.is_empty());
    assert_eq!(palette.colors, vec!["#abcdef"]);
    assert!(palette.text_pairs.is_empty());
}
