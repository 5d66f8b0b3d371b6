//! Fetch and print loop

use std::io::Write;

use anyhow::{Context, Result};
use dicomlink_http::HttpApiService;
use tracing::info;

use crate::cli::Cli;

/// Run the requested checks and write each metadata document to `out`
///
/// Paths are fetched in order. The first failure stops the run, so documents
/// already written stay in `out`.
pub async fn run<W: Write>(cli: &Cli, service: &HttpApiService, out: &mut W) -> Result<()> {
    if cli.health {
        let status = service
            .health_check()
            .await
            .with_context(|| format!("Health check against {} failed", service.endpoint()))?;
        info!(message = %status.message, "Backend is healthy");
    }

    for file_path in &cli.file_paths {
        let metadata = service
            .fetch_dicom_metadata(file_path)
            .await
            .with_context(|| format!("Failed to fetch metadata for '{}'", file_path))?;

        writeln!(out, "{}", serde_json::to_string_pretty(&metadata)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, StatusCode},
        response::{IntoResponse, Response},
        routing::{get, post},
        Json, Router,
    };
    use clap::Parser;
    use dicomlink_http::HttpClientConfig;
    use serde_json::{json, Value};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    // Serves a fixed document for every path except "missing.dcm"
    async fn spawn_backend() -> SocketAddr {
        let router = Router::new()
            .route(
                "/api/dicom-metadata",
                post(|Json(body): Json<Value>| async move {
                    match body["file_path"].as_str() {
                        Some("missing.dcm") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                        _ => (
                            [(header::CONTENT_TYPE, "application/json")],
                            r#"{"Rows":512,"PatientID":"123"}"#,
                        )
                            .into_response(),
                    }
                }),
            )
            .route(
                "/health",
                get(|| async { Json(json!({ "message": "The server is running" })) }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        addr
    }

    fn service_for(addr: SocketAddr) -> HttpApiService {
        let config = HttpClientConfig::with_base_url(&format!("http://{}/api", addr)).unwrap();
        dicomlink_http::api_service(config)
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dicom-fetch").chain(args.iter().copied())).unwrap()
    }

    const DOCUMENT: &str = "{\n  \"Rows\": 512,\n  \"PatientID\": \"123\"\n}\n";

    #[tokio::test]
    async fn test_prints_each_document_in_order() {
        let service = service_for(spawn_backend().await);
        let cli = parse(&["a.dcm", "b.dcm"]);
        let mut out = Vec::new();

        run(&cli, &service, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), DOCUMENT.repeat(2));
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let service = service_for(spawn_backend().await);
        let cli = parse(&["a.dcm", "missing.dcm", "b.dcm"]);
        let mut out = Vec::new();

        let err = run(&cli, &service, &mut out).await.unwrap_err();

        assert_eq!(String::from_utf8(out).unwrap(), DOCUMENT);
        assert!(err.to_string().contains("missing.dcm"));
        let cause = err
            .downcast_ref::<reqwest::Error>()
            .expect("transport error is kept as the cause");
        assert_eq!(cause.status().map(|s| s.as_u16()), Some(500));
    }

    #[tokio::test]
    async fn test_health_only_prints_nothing() {
        let service = service_for(spawn_backend().await);
        let cli = parse(&["--health"]);
        let mut out = Vec::new();

        run(&cli, &service, &mut out).await.unwrap();

        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_health_failure_is_reported() {
        // Reserve a port, then free it so nothing is listening there
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let service = service_for(addr);
        let cli = parse(&["--health", "a.dcm"]);
        let mut out = Vec::new();

        let err = run(&cli, &service, &mut out).await.unwrap_err();

        assert!(err.to_string().starts_with("Health check against"));
        assert!(out.is_empty());
    }
}
