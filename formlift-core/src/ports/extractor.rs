// formlift-core/src/ports/extractor.rs

// This file defines what the application needs from the upstream
// extraction collaborator, without knowing how it is produced. The OCR
// and language-model machinery live entirely behind this boundary; by
// the time this trait returns, the network is already out of the
// picture.

use crate::error::FormliftError;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

#[async_trait]
pub trait ExtractionSource: Send + Sync {
    /// One arbitrary JSON value per document. No assumptions about key
    /// names or nesting depth beyond "valid JSON".
    async fn fetch(&self, document: &Path) -> Result<Value, FormliftError>;
}
