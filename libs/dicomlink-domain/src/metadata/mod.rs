//! Metadata domain module
//!
//! Payloads exchanged with the metadata backend and the service that sends
//! them.

mod payload;
mod service;

pub use payload::{DicomMetadata, HealthStatus, MetadataRequest};
pub use service::ApiService;
