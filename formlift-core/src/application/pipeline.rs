// formlift-core/src/application/pipeline.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use futures::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use walkdir::WalkDir;

use crate::domain::normalize::normalize;
use crate::domain::schema::{SchemaNode, infer_schema};
use crate::domain::validation::format::FormatRegistry;
use crate::domain::validation::rule::{FieldRule, RuleBuilder};
use crate::error::FormliftError;
use crate::infrastructure::config::ProjectConfig;
use crate::infrastructure::fs::save_json;
use crate::ports::extractor::ExtractionSource;

/// Outcome of an ingestion run, persisted as `run_results.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub success: bool,
    pub documents_processed: usize,
    pub errors: Vec<String>,
    pub completed_at: String,
}

/// Everything derived from one extraction response.
pub struct DocumentArtifacts {
    pub normalized: Value,
    pub schema: SchemaNode,
    pub rules: FieldRule,
}

/// The full derivation as one pure step: raw tree in, three artifacts
/// out. No I/O, no failure modes; however malformed the input, it
/// normalizes and infers to *something* displayable.
pub fn derive_artifacts(raw: Value, registry: &FormatRegistry) -> DocumentArtifacts {
    let normalized = normalize(raw);
    let schema = infer_schema(&normalized);
    let rules = RuleBuilder::new(registry).infer(&normalized);
    DocumentArtifacts {
        normalized,
        schema,
        rules,
    }
}

/// Guards the orchestration state on disk. The derivation itself is
/// pure and reentrant, but two extractions racing to populate the same
/// target directory would interleave artifacts, so at most one
/// ingestion may be in flight per process; later calls are rejected.
#[derive(Default)]
pub struct IngestGate {
    busy: AtomicBool,
}

impl IngestGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&self) -> Result<IngestPermit<'_>, FormliftError> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(FormliftError::IngestionInFlight);
        }
        Ok(IngestPermit { gate: self })
    }
}

struct IngestPermit<'a> {
    gate: &'a IngestGate,
}

impl Drop for IngestPermit<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

/// Ingest a single extraction response: fetch -> normalize -> infer the
/// display schema and the ruleset -> persist the three artifacts.
pub async fn run_document(
    source: &dyn ExtractionSource,
    document: &Path,
    target_dir: &Path,
    registry: &FormatRegistry,
) -> Result<(), FormliftError> {
    let raw = source.fetch(document).await?;
    let artifacts = derive_artifacts(raw, registry);
    write_artifacts(&artifacts, target_dir)?;
    Ok(())
}

fn write_artifacts(artifacts: &DocumentArtifacts, target_dir: &Path) -> Result<(), FormliftError> {
    if !target_dir.exists() {
        fs::create_dir_all(target_dir)?;
    }
    save_json(target_dir.join("normalized.json"), &artifacts.normalized)?;
    save_json(target_dir.join("schema.json"), &artifacts.schema)?;
    save_json(target_dir.join("rules.json"), &artifacts.rules)?;
    Ok(())
}

/// Ingest every extraction response found under the project's data
/// directory. Documents are independent, so they are processed with
/// bounded concurrency; one failing document does not stop the others.
pub async fn run_batch(
    gate: &IngestGate,
    source: &dyn ExtractionSource,
    project_dir: &Path,
    config: &ProjectConfig,
    select: Option<String>,
) -> Result<RunResult, FormliftError> {
    let _permit = gate.begin()?;

    println!("🚀 Starting ingestion pipeline...");
    let start_time = std::time::Instant::now();

    // 1. SETUP (Infra/IO)
    let data_dir = project_dir.join(&config.data_path);
    let target_dir = project_dir.join(&config.target_path);
    if !target_dir.exists() {
        fs::create_dir_all(&target_dir)?;
    }

    let registry = FormatRegistry::with_custom(&config.heuristics.patterns)?;

    // 2. DISCOVERY
    let mut documents = discover_documents(&data_dir);
    if let Some(sel) = select {
        documents.retain(|doc| {
            doc.file_stem()
                .map(|stem| stem.to_string_lossy() == sel.as_str())
                .unwrap_or(false)
        });
    }
    println!("📝 Ingestion plan: {} document(s)", documents.len());

    // 3. EXECUTION (bounded concurrency; artifacts land in one
    // subdirectory per document, named after the file stem)
    let tasks = documents.iter().map(|doc| {
        let doc_target = target_dir.join(document_name(doc));
        let registry = &registry;
        async move {
            let result = run_document(source, doc, &doc_target, registry).await;
            (doc.clone(), result)
        }
    });

    let results: Vec<_> = futures::stream::iter(tasks).buffer_unordered(8).collect().await;

    let mut success_count = 0;
    let mut errors = Vec::new();
    for (doc, result) in results {
        match result {
            Ok(()) => {
                println!("    ✅ Ingested: {}", doc.display());
                success_count += 1;
            }
            Err(e) => {
                eprintln!("    ❌ Error ingesting {}: {}", doc.display(), e);
                errors.push(format!("{}: {}", doc.display(), e));
            }
        }
    }

    // 4. FINALIZE
    let duration = start_time.elapsed();
    println!(
        "✨ Done in {:.2}s. Ingested {} document(s).",
        duration.as_secs_f64(),
        success_count
    );

    let result = RunResult {
        success: errors.is_empty(),
        documents_processed: success_count,
        errors,
        completed_at: chrono::Utc::now().to_rfc3339(),
    };

    save_json(target_dir.join("run_results.json"), &result)?;

    Ok(result)
}

/// Directory name for a document's artifacts: the file stem of the
/// extraction response.
fn document_name(document: &Path) -> String {
    document
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string())
}

fn discover_documents(data_dir: &Path) -> Vec<PathBuf> {
    let mut documents: Vec<PathBuf> = WalkDir::new(data_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.path().is_file()
                && entry.path().extension().and_then(|ext| ext.to_str()) == Some("json")
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();
    documents.sort();
    documents
}
