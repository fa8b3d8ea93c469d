// formlift-core/src/application/mod.rs

pub mod clean;
pub mod export;
pub mod pipeline;
pub mod review;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use formlift_core::application::{run_batch, review_document, export_data};`
// sans avoir à connaître la structure interne des fichiers.

pub use clean::clean_project;
pub use export::export_data;
pub use pipeline::{
    DocumentArtifacts, IngestGate, RunResult, derive_artifacts, run_batch, run_document,
};
pub use review::{ReviewOutcome, review_document, review_edits};
