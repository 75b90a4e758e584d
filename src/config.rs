//! Configuration types.

use crate::content::ContentConfig;
use crate::error::ConfigError;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `https://api.vanii.example`.
    pub base_url: String,
    /// Headless content store settings.
    pub content: ContentConfig,
}

impl ClientConfig {
    /// Build from environment variables. `VANII_BACKEND_URL` is required;
    /// the content settings fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("VANII_BACKEND_URL")
            .map_err(|_| ConfigError::MissingEnvVar("VANII_BACKEND_URL".to_string()))?;
        if base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "VANII_BACKEND_URL".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let defaults = ContentConfig::default();
        let content = ContentConfig {
            project_id: std::env::var("VANII_CONTENT_PROJECT").unwrap_or(defaults.project_id),
            dataset: std::env::var("VANII_CONTENT_DATASET").unwrap_or(defaults.dataset),
            api_version: std::env::var("VANII_CONTENT_API_VERSION").unwrap_or(defaults.api_version),
        };

        Ok(Self { base_url, content })
    }
}
