//! Certificate file reading and format detection
//!
//! Auto-detects PEM and DER and extracts the first certificate found.

use crate::utils::FetchError;
use std::path::Path;

/// Detected certificate file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    Pem,
    Der,
}

/// Detect format from raw bytes
pub fn detect_format(data: &[u8]) -> Option<DetectedFormat> {
    // Check for PEM markers
    if let Ok(text) = std::str::from_utf8(data) {
        if text.contains("-----BEGIN ") {
            return Some(DetectedFormat::Pem);
        }
    }

    // ASN.1 SEQUENCE marker, assume DER
    if !data.is_empty() && data[0] == 0x30 {
        return Some(DetectedFormat::Der);
    }

    None
}

/// Read the first certificate from a file, returning its DER bytes
pub async fn read_leaf(path: &Path) -> Result<Vec<u8>, FetchError> {
    let data = tokio::fs::read(path).await.map_err(|e| FetchError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    leaf_from_bytes(&data, path)
}

/// Extract the first DER-encoded certificate from file contents
pub fn leaf_from_bytes(data: &[u8], path: &Path) -> Result<Vec<u8>, FetchError> {
    let format = detect_format(data).ok_or_else(|| FetchError::Parse {
        locator: path.display().to_string(),
        message: "content is neither PEM nor DER".to_string(),
    })?;

    match format {
        DetectedFormat::Pem => {
            let pems = ::pem::parse_many(data).map_err(|e| FetchError::Parse {
                locator: path.display().to_string(),
                message: format!("failed to parse PEM: {}", e),
            })?;

            pems.into_iter()
                .find(|p| p.tag() == "CERTIFICATE")
                .map(|p| p.into_contents())
                .ok_or_else(|| FetchError::Parse {
                    locator: path.display().to_string(),
                    message: "no CERTIFICATE blocks found in PEM file".to_string(),
                })
        }
        DetectedFormat::Der => Ok(data.to_vec()),
    }
}
