//! Request and response payloads of the metadata API

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a metadata request
///
/// Serialized as `{"file_path": "<path>"}`. The path is sent exactly as the
/// caller supplied it: no trimming, normalization or emptiness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRequest {
    /// Storage path of the DICOM object (e.g. `s3://bucket/scan1.dcm`)
    pub file_path: String,
}

impl MetadataRequest {
    /// Create a request for the given path
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

/// DICOM metadata as returned by the backend
///
/// The structure is owned by the backend and left uninterpreted. It
/// serializes transparently, keeping object key order and the exact digits of
/// every number, so re-encoding a compact body yields the same text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DicomMetadata(Value);

impl DicomMetadata {
    /// Wrap a raw JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw JSON value
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Look up a top-level field, if the payload is an object
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Value> for DicomMetadata {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<DicomMetadata> for Value {
    fn from(metadata: DicomMetadata) -> Self {
        metadata.0
    }
}

impl fmt::Display for DicomMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reply of the backend health route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Human readable status (e.g. "The server is running")
    pub message: String,
}
