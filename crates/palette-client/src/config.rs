//! Client configuration.

use url::Url;

/// Default service location when `PALETTE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Configuration for [`crate::PaletteClient`].
#[derive(Debug, Clone)]
pub struct PaletteClientConfig {
    /// Service root; the collection lives at `{base_url}/api/palettes`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl PaletteClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PALETTE_API_URL` (default: `http://127.0.0.1:8080`)
    /// - `PALETTE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("PALETTE_API_URL", DEFAULT_API_URL)?,
            timeout_secs: std::env::var("PALETTE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Replace the service root with an explicitly given URL.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = Url::parse(raw).map_err(|e| {
            ConfigError::InvalidUrl("--api-url".to_string(), format!("'{raw}': {e}"))
        })?;
        Ok(self)
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
