//! Command line arguments

use clap::Parser;

/// Fetch DICOM metadata from a DicomLink backend and print it as JSON
#[derive(Debug, Parser)]
#[command(name = "dicom-fetch", version, about)]
pub struct Cli {
    /// API base URL (overrides DICOMLINK_API_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Query the backend health route first
    #[arg(long)]
    pub health: bool,

    /// Storage paths of the DICOM objects (e.g. s3://bucket/scan1.dcm)
    #[arg(value_name = "FILE_PATH", required_unless_present = "health")]
    pub file_paths: Vec<String>,
}
