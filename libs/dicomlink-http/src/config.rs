//! Client configuration
//!
//! Values come from the process environment. Binaries are expected to call
//! `dotenvy::dotenv()` first so a local `.env` file is honored.

use dicomlink_domain::{endpoint::DEFAULT_BASE_URL, ApiEndpoint, EndpointError};
use tracing::info;

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "DICOMLINK_API_BASE_URL";

/// Configuration of the HTTP client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Backend the client talks to
    pub endpoint: ApiEndpoint,
}

impl HttpClientConfig {
    /// Build a configuration for an explicit base URL
    pub fn with_base_url(base_url: &str) -> Result<Self, EndpointError> {
        Ok(Self {
            endpoint: ApiEndpoint::new(base_url)?,
        })
    }

    /// Read the configuration from the process environment
    ///
    /// Falls back to `http://127.0.0.1:5000/api` when `DICOMLINK_API_BASE_URL`
    /// is unset.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError` if the variable holds an unusable URL
    pub fn from_env() -> Result<Self, EndpointError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EndpointError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV) {
            Some(base_url) => Self::with_base_url(&base_url),
            None => {
                info!("{} not set, using default: {}", BASE_URL_ENV, DEFAULT_BASE_URL);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = HttpClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.endpoint.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_from_variable() {
        let config = HttpClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://pacs.internal:8443/api".to_string())
        })
        .unwrap();

        assert_eq!(
            config.endpoint.dicom_metadata_url(),
            "https://pacs.internal:8443/api/dicom-metadata"
        );
    }

    #[test]
    fn test_invalid_variable_is_rejected() {
        let result = HttpClientConfig::from_lookup(|_| Some("127.0.0.1:5000".to_string()));
        assert!(result.is_err());
    }
}
