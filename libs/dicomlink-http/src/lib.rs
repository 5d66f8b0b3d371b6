//! # DicomLink HTTP Adapter
//!
//! Implements the `MetadataTransport` port with `reqwest`, and reads the
//! client configuration from the environment.

pub mod config;
pub mod infrastructure;

pub use config::{HttpClientConfig, BASE_URL_ENV};
pub use infrastructure::ReqwestTransport;

use dicomlink_domain::ApiService;

/// Metadata API service wired to the reqwest transport
pub type HttpApiService = ApiService<ReqwestTransport>;

/// Build a reqwest-backed service from a configuration
pub fn api_service(config: HttpClientConfig) -> HttpApiService {
    ApiService::new(ReqwestTransport::new(), config.endpoint)
}
