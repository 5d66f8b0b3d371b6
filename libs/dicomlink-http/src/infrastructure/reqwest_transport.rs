//! Reqwest Transport Implementation
//!
//! This module implements the `MetadataTransport` trait on top of
//! `reqwest::Client`. Failures are reported as plain `reqwest::Error` values so
//! callers can inspect them with reqwest's own accessors (`status()`,
//! `is_connect()`, `is_timeout()`, `is_decode()`).

use std::future::Future;

use dicomlink_domain::MetadataTransport;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, debug_span, Instrument};

/// reqwest-based implementation of the MetadataTransport port
///
/// A non-2xx status is turned into an error with `error_for_status`, so a
/// backend answering 500 yields a `reqwest::Error` whose `status()` is 500.
/// No timeout is configured beyond what the supplied client carries.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a default `reqwest::Client`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around a preconfigured client
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dicomlink_http::ReqwestTransport;
    ///
    /// let client = reqwest::Client::builder()
    ///     .user_agent("dicom-viewer/1.0")
    ///     .build()
    ///     .unwrap();
    /// let transport = ReqwestTransport::with_client(client);
    /// ```
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl MetadataTransport for ReqwestTransport {
    type Error = reqwest::Error;

    fn post_json<B, R>(
        &self,
        url: &str,
        body: &B,
    ) -> impl Future<Output = Result<R, Self::Error>> + Send
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        // The body is serialized here, before the future is polled
        let request = self.client.post(url).json(body);
        let span = debug_span!("http_request", method = "POST", url = %url);

        async move {
            debug!("Sending request");

            let response = request.send().await?;
            debug!(status = %response.status(), "Received response");

            response.error_for_status()?.json::<R>().await
        }
        .instrument(span)
    }

    fn get_json<R>(&self, url: &str) -> impl Future<Output = Result<R, Self::Error>> + Send
    where
        R: DeserializeOwned + Send,
    {
        let request = self.client.get(url);
        let span = debug_span!("http_request", method = "GET", url = %url);

        async move {
            debug!("Sending request");

            let response = request.send().await?;
            debug!(status = %response.status(), "Received response");

            response.error_for_status()?.json::<R>().await
        }
        .instrument(span)
    }
}
