//! # palette-api — Palette Catalog Document Service
//!
//! Serves the `palettes` collection over HTTP. Each palette is a JSON
//! document keyed by a service-assigned id; the service stores what it is
//! sent and leaves schema normalization to readers (see `palette-core`).
//!
//! ## API Surface
//!
//! | Route                   | Methods            | Module               |
//! |-------------------------|--------------------|----------------------|
//! | `/api/palettes`         | GET, POST          | [`routes::palettes`] |
//! | `/api/palettes/{id}`    | GET, PUT, DELETE   | [`routes::palettes`] |
//! | `/openapi.json`         | GET                | [`openapi`]          |
//! | `/health/liveness`      | GET                | this module          |
//! | `/health/readiness`     | GET                | this module          |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CatchPanic → Cors → TraceLayer → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(routes::palettes::router())
        .merge(openapi::router())
        .layer(middleware::tracing_layer::layer())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
