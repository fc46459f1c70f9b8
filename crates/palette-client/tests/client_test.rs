//! Contract tests for PaletteClient against a wiremock stand-in for the
//! palette service.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/api/palettes` | `list_*` |
//! | GET    | `/api/palettes/{id}` | `get_*` |
//! | POST   | `/api/palettes` | `create_*` |
//! | PUT    | `/api/palettes/{id}` | `update_*` |
//! | DELETE | `/api/palettes/{id}` | `remove_*` |

use palette_client::{ClientError, PaletteClient, PaletteClientConfig};
use palette_core::{PaletteDraft, PaletteId, TextPair};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a PaletteClient pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> PaletteClient {
    let config = PaletteClientConfig {
        base_url: mock_server.uri().parse().unwrap(),
        timeout_secs: 5,
    };
    PaletteClient::new(config).unwrap()
}

fn dusk_draft() -> PaletteDraft {
    PaletteDraft {
        title: "Dusk".into(),
        notes: "evening".into(),
        tags: vec!["Minimal".into()],
        colors: vec!["#112233".into()],
        text_pairs: vec![TextPair::new("#112233", "#eeeeee")],
    }
}

// ── GET /api/palettes ────────────────────────────────────────────────

#[tokio::test]
async fn list_normalizes_every_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/palettes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "a1",
                "title": "Full",
                "notes": "n",
                "tags": ["Bold"],
                "colors": ["#ff0000"],
                "textPairs": [{"background": "#ff0000", "text": "#000000"}]
            },
            {"id": "b2", "title": "Legacy", "tags": "Bold", "notes": 4, "extra": true}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let palettes = test_client(&mock_server).list().await.unwrap();
    assert_eq!(palettes.len(), 2);
    assert_eq!(palettes[0].tags, vec!["Bold"]);
    assert_eq!(palettes[0].text_pairs[0].text, "#000000");
    assert_eq!(palettes[1].id.as_str(), "b2");
    assert!(palettes[1].tags.is_empty());
    assert_eq!(palettes[1].notes, "");
    assert!(palettes[1].colors.is_empty());
}

#[tokio::test]
async fn list_surfaces_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/palettes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    match test_client(&mock_server).list().await.unwrap_err() {
        ClientError::Api { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn list_rejects_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/palettes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).list().await.unwrap_err();
    assert!(matches!(err, ClientError::Deserialization { .. }), "{err:?}");
}

#[tokio::test]
async fn list_rejects_document_without_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/palettes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "x"}])))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).list().await.unwrap_err();
    assert!(matches!(err, ClientError::Normalize { .. }), "{err:?}");
}

#[tokio::test]
async fn transport_failure_is_http_error() {
    // Nothing listens on port 9 of localhost.
    let client = PaletteClient::new(PaletteClientConfig {
        base_url: "http://127.0.0.1:9".parse().unwrap(),
        timeout_secs: 2,
    })
    .unwrap();
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Http { .. }), "{err:?}");
}

// ── GET /api/palettes/{id} ───────────────────────────────────────────

#[tokio::test]
async fn get_returns_palette() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/palettes/a1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "a1", "title": "One"})),
        )
        .mount(&mock_server)
        .await;

    let palette = test_client(&mock_server)
        .get(&PaletteId::new("a1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(palette.title, "One");
}

#[tokio::test]
async fn get_returns_none_on_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/palettes/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = test_client(&mock_server)
        .get(&PaletteId::new("missing"))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ── POST /api/palettes ───────────────────────────────────────────────

#[tokio::test]
async fn create_sends_camel_case_draft_and_returns_server_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/palettes"))
        .and(body_json(json!({
            "title": "Dusk",
            "notes": "evening",
            "tags": ["Minimal"],
            "colors": ["#112233"],
            "textPairs": [{"background": "#112233", "text": "#eeeeee"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "new-id",
            "title": "Dusk",
            "notes": "evening",
            "tags": ["Minimal"],
            "colors": ["#112233"],
            "textPairs": [{"background": "#112233", "text": "#eeeeee"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = test_client(&mock_server)
        .create(&dusk_draft())
        .await
        .unwrap();
    assert_eq!(created.id.as_str(), "new-id");
    assert_eq!(created.to_draft(), dusk_draft());
}

#[tokio::test]
async fn create_handles_422_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/palettes"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {"code": "VALIDATION_ERROR", "message": "title is required"}
        })))
        .mount(&mock_server)
        .await;

    let draft = PaletteDraft::default();
    match test_client(&mock_server).create(&draft).await.unwrap_err() {
        ClientError::Api { status, body, .. } => {
            assert_eq!(status, 422);
            assert!(body.contains("title is required"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── PUT /api/palettes/{id} ───────────────────────────────────────────

#[tokio::test]
async fn update_puts_to_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/palettes/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "title": "Dusk",
            "notes": "evening",
            "tags": ["Minimal"],
            "colors": ["#112233"],
            "textPairs": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = test_client(&mock_server)
        .update(&PaletteId::new("p1"), &dusk_draft())
        .await
        .unwrap();
    assert_eq!(updated.id.as_str(), "p1");
    assert!(updated.text_pairs.is_empty());
}

// ── DELETE /api/palettes/{id} ────────────────────────────────────────

#[tokio::test]
async fn remove_accepts_204() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/palettes/p1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    test_client(&mock_server)
        .remove(&PaletteId::new("p1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn remove_surfaces_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/palettes/p1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .remove(&PaletteId::new("p1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 503, .. }));
}
