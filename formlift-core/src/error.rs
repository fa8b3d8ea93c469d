// formlift-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormliftError {
    // --- ERREURS DU DOMAINE (Heuristics, Rulesets) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing, Config) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    InternalError(String),

    #[error("Unsafe path traversal detected: {0}")]
    UnsafePath(String),

    #[error("Extraction failed upstream: {0}")]
    ExtractionFailed(String),

    // The derivation itself is pure and reentrant; this protects the
    // on-disk artifacts from two ingestions racing each other.
    #[error("An ingestion is already in flight; concurrent extractions are rejected")]
    IngestionInFlight,
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for FormliftError {
    fn from(err: std::io::Error) -> Self {
        FormliftError::Infrastructure(InfrastructureError::Io(err))
    }
}
