//! # Palettes Collection API
//!
//! CRUD over the `palettes` document collection.
//!
//! ## Endpoints
//!
//! - `GET /api/palettes` — list all palettes, ordered by id
//! - `GET /api/palettes/{id}` — get one palette
//! - `POST /api/palettes` — create a palette; the store assigns the id
//! - `PUT /api/palettes/{id}` — merge the given top-level fields
//! - `DELETE /api/palettes/{id}` — delete a palette (idempotent)
//!
//! Documents are stored as sent. The only rules enforced here are that a
//! body is a JSON object and that `title`, when present, is a non-empty
//! string (and must be present on create). An `id` field in a body is
//! ignored: ids belong to the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::{AppState, Document};

// ── Request/Response DTOs ───────────────────────────────────────────

/// A palette document body, as sent on create or update.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct PaletteBody(Document);

impl PaletteBody {
    fn into_document(self) -> Document {
        let mut doc = self.0;
        doc.remove("id");
        doc
    }

    fn check_title(&self, required: bool) -> Result<(), String> {
        match self.0.get("title") {
            None if required => Err("title is required".to_string()),
            None => Ok(()),
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(()),
            Some(Value::String(_)) => Err("title must not be empty".to_string()),
            Some(_) => Err("title must be a string".to_string()),
        }
    }
}

/// Body of `POST /api/palettes`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CreatePaletteBody(PaletteBody);

impl Validate for CreatePaletteBody {
    fn validate(&self) -> Result<(), String> {
        self.0.check_title(true)
    }
}

/// Body of `PUT /api/palettes/{id}`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct UpdatePaletteBody(PaletteBody);

impl Validate for UpdatePaletteBody {
    fn validate(&self) -> Result<(), String> {
        self.0.check_title(false)
    }
}

/// Background/text override, as documented in the OpenAPI schema.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TextPairSchema {
    pub background: String,
    pub text: String,
}

/// Palette fields accepted on create and update.
///
/// Documentation only: the store accepts any JSON object.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRequest {
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub text_pairs: Vec<TextPairSchema>,
}

/// A stored palette with its id.
///
/// Documentation only: legacy documents may lack fields or carry extra ones.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaletteResponse {
    pub id: String,
    pub title: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub colors: Vec<String>,
    pub text_pairs: Vec<TextPairSchema>,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the palettes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/palettes", get(list_palettes).post(create_palette))
        .route(
            "/api/palettes/{id}",
            get(get_palette).put(update_palette).delete(delete_palette),
        )
}

/// Merge the store id into a document for the response.
fn with_id(id: &str, mut doc: Document) -> Value {
    doc.insert("id".to_string(), Value::String(id.to_string()));
    Value::Object(doc)
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /api/palettes — List all palettes.
#[utoipa::path(
    get,
    path = "/api/palettes",
    responses(
        (status = 200, description = "All palettes, ordered by id", body = Vec<PaletteResponse>),
    ),
    tag = "palettes"
)]
pub(crate) async fn list_palettes(State(state): State<AppState>) -> Json<Vec<Value>> {
    let palettes: Vec<Value> = state
        .palettes
        .list()
        .into_iter()
        .map(|(id, doc)| with_id(&id, doc))
        .collect();
    tracing::debug!(count = palettes.len(), "listed palettes");
    Json(palettes)
}

/// GET /api/palettes/{id} — Get a single palette.
#[utoipa::path(
    get,
    path = "/api/palettes/{id}",
    params(("id" = String, Path, description = "Palette ID")),
    responses(
        (status = 200, description = "Palette found", body = PaletteResponse),
        (status = 404, description = "Palette not found", body = crate::error::ErrorBody),
    ),
    tag = "palettes"
)]
pub(crate) async fn get_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .palettes
        .get(&id)
        .map(|doc| Json(with_id(&id, doc)))
        .ok_or_else(|| AppError::NotFound(format!("palette {id} not found")))
}

/// POST /api/palettes — Create a palette.
#[utoipa::path(
    post,
    path = "/api/palettes",
    request_body = PaletteRequest,
    responses(
        (status = 201, description = "Palette created", body = PaletteResponse),
        (status = 400, description = "Body is not a JSON object", body = crate::error::ErrorBody),
        (status = 422, description = "Missing or empty title", body = crate::error::ErrorBody),
    ),
    tag = "palettes"
)]
pub(crate) async fn create_palette(
    State(state): State<AppState>,
    body: Result<Json<CreatePaletteBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let CreatePaletteBody(body) = extract_validated_json(body)?;
    let doc = body.into_document();
    let id = Uuid::new_v4().simple().to_string();

    state.palettes.insert(id.clone(), doc.clone());
    tracing::info!(palette_id = %id, "palette created");
    Ok((StatusCode::CREATED, Json(with_id(&id, doc))))
}

/// PUT /api/palettes/{id} — Update a palette.
///
/// Top-level fields in the body replace the stored ones; fields not in the
/// body are kept.
#[utoipa::path(
    put,
    path = "/api/palettes/{id}",
    params(("id" = String, Path, description = "Palette ID")),
    request_body = PaletteRequest,
    responses(
        (status = 200, description = "Palette updated", body = PaletteResponse),
        (status = 400, description = "Body is not a JSON object", body = crate::error::ErrorBody),
        (status = 404, description = "Palette not found", body = crate::error::ErrorBody),
        (status = 422, description = "Empty title", body = crate::error::ErrorBody),
    ),
    tag = "palettes"
)]
pub(crate) async fn update_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePaletteBody>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let UpdatePaletteBody(body) = extract_validated_json(body)?;
    let changes = body.into_document();

    let updated = state
        .palettes
        .update(&id, |doc| doc.extend(changes))
        .ok_or_else(|| AppError::NotFound(format!("palette {id} not found")))?;
    tracing::info!(palette_id = %id, "palette updated");
    Ok(Json(with_id(&id, updated)))
}

/// DELETE /api/palettes/{id} — Delete a palette.
///
/// Deleting an absent palette also succeeds.
#[utoipa::path(
    delete,
    path = "/api/palettes/{id}",
    params(("id" = String, Path, description = "Palette ID")),
    responses(
        (status = 204, description = "Palette deleted"),
    ),
    tag = "palettes"
)]
pub(crate) async fn delete_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    if state.palettes.remove(&id).is_some() {
        tracing::info!(palette_id = %id, "palette deleted");
    } else {
        tracing::debug!(palette_id = %id, "delete of absent palette");
    }
    StatusCode::NO_CONTENT
}
