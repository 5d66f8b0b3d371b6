//! Metadata API service
//!
//! Sends a storage path to the backend and hands back its answer. The service
//! adds no policy of its own: one request per call, no retry, no caching, and
//! transport errors reach the caller exactly as the transport produced them.

use super::{DicomMetadata, HealthStatus, MetadataRequest};
use crate::endpoint::ApiEndpoint;
use crate::ports::MetadataTransport;

/// Client for the DICOM metadata API
///
/// Generic over the `MetadataTransport` used to reach the backend. Calls are
/// independent of each other, so a single service can be shared (e.g. behind
/// an `Arc`) by concurrent tasks.
pub struct ApiService<T> {
    transport: T,
    endpoint: ApiEndpoint,
}

impl<T> ApiService<T>
where
    T: MetadataTransport,
{
    /// Create a new ApiService targeting the given endpoint
    pub fn new(transport: T, endpoint: ApiEndpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Create a new ApiService targeting the default local backend
    pub fn with_transport(transport: T) -> Self {
        Self::new(transport, ApiEndpoint::default())
    }

    /// Fetch the DICOM metadata of a stored object
    ///
    /// Posts `{"file_path": file_path}` to `<base>/dicom-metadata` and returns
    /// the decoded body as-is.
    ///
    /// # Arguments
    ///
    /// * `file_path` - Storage path of the DICOM object, sent verbatim
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged (connection failure, timeout,
    /// non-success status, malformed body)
    pub async fn fetch_dicom_metadata(&self, file_path: &str) -> Result<DicomMetadata, T::Error> {
        let request = MetadataRequest::new(file_path);

        self.transport
            .post_json::<_, DicomMetadata>(&self.endpoint.dicom_metadata_url(), &request)
            .await
    }

    /// Ask the backend whether it is up
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged
    pub async fn health_check(&self) -> Result<HealthStatus, T::Error> {
        self.transport
            .get_json::<HealthStatus>(&self.endpoint.health_url())
            .await
    }

    /// Get the configured endpoint
    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
