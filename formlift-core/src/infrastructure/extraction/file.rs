// formlift-core/src/infrastructure/extraction/file.rs

use crate::error::FormliftError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::extractor::ExtractionSource;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Extraction responses read from disk, standing in for the hosted
/// extraction service. Accepts either the service's response envelope
/// (`{"success": true, "data": {...}}`) or a bare JSON value, so saved
/// responses and hand-written fixtures work unchanged.
pub struct FileExtractionSource;

#[derive(Deserialize)]
struct ResponseEnvelope {
    success: bool,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl ExtractionSource for FileExtractionSource {
    async fn fetch(&self, document: &Path) -> Result<Value, FormliftError> {
        if !document.exists() {
            return Err(
                InfrastructureError::ExtractionNotFound(document.display().to_string()).into(),
            );
        }

        let content = std::fs::read_to_string(document).map_err(InfrastructureError::Io)?;
        let raw: Value = serde_json::from_str(&content).map_err(InfrastructureError::JsonError)?;

        // Unwrap the service envelope when present.
        let is_envelope = raw
            .get("success")
            .map(|flag| flag.is_boolean())
            .unwrap_or(false)
            && raw.get("data").is_some();
        if is_envelope {
            debug!(document = %document.display(), "Unwrapping extraction response envelope");
            let envelope: ResponseEnvelope =
                serde_json::from_value(raw).map_err(InfrastructureError::JsonError)?;
            if !envelope.success {
                return Err(FormliftError::ExtractionFailed(
                    envelope.error.unwrap_or_else(|| "unknown".to_string()),
                ));
            }
            return Ok(envelope.data);
        }

        Ok(raw)
    }
}
