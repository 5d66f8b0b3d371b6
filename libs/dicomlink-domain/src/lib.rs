//! # DicomLink Domain Layer
//!
//! This crate contains the client-side model for the DICOM metadata API:
//!
//! - **Payloads**: the request body (`MetadataRequest`) and the opaque
//!   response (`DicomMetadata`)
//! - **Endpoint**: the validated base URL and the addresses derived from it
//! - **Ports**: the `MetadataTransport` trait the HTTP adapter implements
//! - **Service**: `ApiService`, which sends a file path and hands back the
//!   backend's answer untouched
//!
//! ## Architecture
//!
//! This layer has NO dependency on an HTTP client. The network call is
//! expressed as a trait (port) implemented by the `dicomlink-http` adapter,
//! so the service can be exercised against in-memory fakes.
//!
//! ## Example
//!
//! ```rust
//! use dicomlink_domain::{ApiService, MetadataTransport};
//!
//! async fn example<T: MetadataTransport>(service: ApiService<T>) -> Result<(), T::Error> {
//!     let metadata = service.fetch_dicom_metadata("s3://bucket/scan1.dcm").await?;
//!     println!("{}", metadata);
//!     Ok(())
//! }
//! ```

pub mod endpoint;
pub mod metadata;
pub mod ports;

// Re-export commonly used types
pub use endpoint::{ApiEndpoint, EndpointError};
pub use metadata::{ApiService, DicomMetadata, HealthStatus, MetadataRequest};
pub use ports::MetadataTransport;
