//! Ports (trait definitions) for external dependencies
//!
//! The domain defines what it needs from the network, and the infrastructure
//! provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` so each transport is monomorphized into the service.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};

/// Port for JSON-over-HTTP exchanges with the metadata backend
///
/// Implementations own every failure mode of the exchange: connection
/// failures, timeouts, non-success status codes and undecodable bodies are all
/// reported through [`MetadataTransport::Error`].
///
/// The service never inspects or converts this error. Whatever the transport
/// returns is what the caller receives.
pub trait MetadataTransport: Send + Sync {
    /// Error surfaced by the transport, handed to callers unchanged
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send `body` as JSON with a POST request and decode the JSON reply
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute target address
    /// * `body` - Value serialized as the request body
    ///
    /// # Errors
    ///
    /// Any transport failure, including a non-2xx status
    fn post_json<B, R>(
        &self,
        url: &str,
        body: &B,
    ) -> impl Future<Output = Result<R, Self::Error>> + Send
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send;

    /// Issue a GET request and decode the JSON reply
    fn get_json<R>(&self, url: &str) -> impl Future<Output = Result<R, Self::Error>> + Send
    where
        R: DeserializeOwned + Send;
}
