//! Backend endpoint addressing
//!
//! The backend serves its API under a base URL (by default
//! `http://127.0.0.1:5000/api`). The metadata route is appended to that base,
//! while the health route lives at the server origin.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Sub-path of the metadata route, relative to the base URL
pub const DICOM_METADATA_PATH: &str = "/dicom-metadata";

/// Path of the health route, relative to the server origin
pub const HEALTH_PATH: &str = "/health";

/// Errors raised while building an [`ApiEndpoint`]
#[derive(Error, Debug)]
pub enum EndpointError {
    /// The base URL could not be parsed
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Only `http` and `https` are supported
    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// Routes are appended to the path, so a query or fragment would end up
    /// in front of them
    #[error("Base URL '{0}' must not contain a query or fragment")]
    QueryOrFragment(String),
}

impl EndpointError {
    /// Create an invalid base URL error
    pub fn invalid_base_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            source,
        }
    }
}

/// Validated address of the metadata backend
///
/// The endpoint is fixed once built: every request issued through a service
/// holding it targets the same base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    /// Base URL with one trailing slash removed
    base_url: String,

    /// Scheme, host and port of the base URL
    origin: String,
}

impl ApiEndpoint {
    /// Build an endpoint from a base URL
    ///
    /// A single trailing slash is ignored, so `http://host/api/` and
    /// `http://host/api` address the same routes.
    ///
    /// # Errors
    ///
    /// - `EndpointError::InvalidBaseUrl` if the URL does not parse
    /// - `EndpointError::UnsupportedScheme` for anything but http(s)
    /// - `EndpointError::QueryOrFragment` if the URL has a `?query` or `#fragment`
    pub fn new(base_url: &str) -> Result<Self, EndpointError> {
        let parsed =
            Url::parse(base_url).map_err(|err| EndpointError::invalid_base_url(base_url, err))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(EndpointError::QueryOrFragment(base_url.to_string()));
        }

        let serialized = parsed.as_str();
        let base_url = serialized
            .strip_suffix('/')
            .unwrap_or(serialized)
            .to_string();
        let origin = parsed.origin().ascii_serialization();

        Ok(Self { base_url, origin })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the server origin (scheme, host and port)
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Address of the DICOM metadata route
    pub fn dicom_metadata_url(&self) -> String {
        format!("{}{}", self.base_url, DICOM_METADATA_PATH)
    }

    /// Address of the health route
    pub fn health_url(&self) -> String {
        format!("{}{}", self.origin, HEALTH_PATH)
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_url)
    }
}
