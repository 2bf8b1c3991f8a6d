//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_BASE_URL` - Base URL of the catalog API
//!   (default: `https://fakestoreapi.com`)

use thiserror::Error;
use url::Url;

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but unusable.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Build a configuration for an explicit base URL (no validation).
    ///
    /// Useful for tests pointing at a local stub.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CATALOG_BASE_URL` is set but is not a valid
    /// absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        match std::env::var("CATALOG_BASE_URL") {
            Ok(raw) => {
                let url = Url::parse(&raw).map_err(|error| {
                    ConfigError::InvalidEnvVar("CATALOG_BASE_URL".to_string(), error.to_string())
                })?;
                Ok(Self::new(url))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

impl From<Url> for CatalogConfig {
    fn from(url: Url) -> Self {
        Self::new(String::from(url))
    }
}
