//! # palette-client — Typed client for the palette API
//!
//! [`PaletteClient`] performs the CRUD round trips against
//! `{base_url}/api/palettes`. Every palette it returns has been through
//! [`palette_core::normalize`], so callers never see a malformed record.
//!
//! [`PaletteCatalog`] layers the browsing state on top: the loaded list,
//! the tag filter, the open editor and a pending delete.
//!
//! | Method | Path                  | Operation                |
//! |--------|-----------------------|--------------------------|
//! | GET    | `/api/palettes`       | [`PaletteClient::list`]   |
//! | GET    | `/api/palettes/{id}`  | [`PaletteClient::get`]    |
//! | POST   | `/api/palettes`       | [`PaletteClient::create`] |
//! | PUT    | `/api/palettes/{id}`  | [`PaletteClient::update`] |
//! | DELETE | `/api/palettes/{id}`  | [`PaletteClient::remove`] |

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::PaletteCatalog;
pub use config::PaletteClientConfig;
pub use error::ClientError;

use std::time::Duration;

use palette_core::{normalize, Palette, PaletteDraft, PaletteId};
use serde_json::Value;

/// Collection path relative to the service root.
const COLLECTION: &str = "api/palettes";

/// Client for the palette API.
#[derive(Debug, Clone)]
pub struct PaletteClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl PaletteClient {
    /// Create a new client from configuration.
    pub fn new(config: PaletteClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The service root this client talks to.
    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{COLLECTION}", self.base_url.as_str().trim_end_matches('/'))
    }

    fn item_url(&self, id: &PaletteId) -> String {
        format!("{}/{id}", self.collection_url())
    }

    /// List all palettes.
    ///
    /// Calls `GET {base_url}/api/palettes`. Each document is normalized; a
    /// document that cannot be normalized fails the whole call.
    pub async fn list(&self) -> Result<Vec<Palette>, ClientError> {
        let endpoint = "GET /api/palettes";
        let resp = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;
        let resp = check_status(endpoint, resp).await?;

        let docs: Vec<Value> = resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })?;
        let palettes = docs
            .iter()
            .map(|doc| normalized(endpoint, doc))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = palettes.len(), "loaded palettes");
        Ok(palettes)
    }

    /// Get a palette by ID.
    ///
    /// Calls `GET {base_url}/api/palettes/{id}`. Returns `None` on 404.
    pub async fn get(&self, id: &PaletteId) -> Result<Option<Palette>, ClientError> {
        let endpoint = format!("GET /api/palettes/{id}");
        let resp = self
            .http
            .get(self.item_url(id))
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check_status(&endpoint, resp).await?;
        decode_palette(&endpoint, resp).await.map(Some)
    }

    /// Create a palette. The service assigns the id.
    ///
    /// Calls `POST {base_url}/api/palettes`.
    pub async fn create(&self, draft: &PaletteDraft) -> Result<Palette, ClientError> {
        let endpoint = "POST /api/palettes";
        let resp = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;
        let resp = check_status(endpoint, resp).await?;
        let palette = decode_palette(endpoint, resp).await?;
        tracing::info!(palette_id = %palette.id, "palette created");
        Ok(palette)
    }

    /// Replace the editable fields of a palette.
    ///
    /// Calls `PUT {base_url}/api/palettes/{id}` and returns the stored result.
    pub async fn update(
        &self,
        id: &PaletteId,
        draft: &PaletteDraft,
    ) -> Result<Palette, ClientError> {
        let endpoint = format!("PUT /api/palettes/{id}");
        let resp = self
            .http
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        let resp = check_status(&endpoint, resp).await?;
        let palette = decode_palette(&endpoint, resp).await?;
        tracing::info!(palette_id = %palette.id, "palette updated");
        Ok(palette)
    }

    /// Delete a palette.
    ///
    /// Calls `DELETE {base_url}/api/palettes/{id}`. Any 2xx counts as success.
    pub async fn remove(&self, id: &PaletteId) -> Result<(), ClientError> {
        let endpoint = format!("DELETE /api/palettes/{id}");
        let resp = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        check_status(&endpoint, resp).await?;
        tracing::info!(palette_id = %id, "palette deleted");
        Ok(())
    }
}

async fn check_status(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        endpoint: endpoint.into(),
        status,
        body,
    })
}

async fn decode_palette(endpoint: &str, resp: reqwest::Response) -> Result<Palette, ClientError> {
    let doc: Value = resp.json().await.map_err(|e| ClientError::Deserialization {
        endpoint: endpoint.into(),
        source: e,
    })?;
    normalized(endpoint, &doc)
}

fn normalized(endpoint: &str, doc: &Value) -> Result<Palette, ClientError> {
    normalize(doc).map_err(|e| ClientError::Normalize {
        endpoint: endpoint.into(),
        source: e,
    })
}
