//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the palette API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Palette Catalog API",
        version = "0.1.0",
        description = "Document store for color palettes: titles, notes, style tags, swatch colors, and background/text overrides.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::palettes::list_palettes,
        crate::routes::palettes::get_palette,
        crate::routes::palettes::create_palette,
        crate::routes::palettes::update_palette,
        crate::routes::palettes::delete_palette,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::palettes::PaletteRequest,
        crate::routes::palettes::PaletteResponse,
        crate::routes::palettes::TextPairSchema,
    )),
    tags(
        (name = "palettes", description = "Palette collection"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
