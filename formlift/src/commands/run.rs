// formlift/src/commands/run.rs
//
// USE CASE: Ingest extraction responses into display/validation artifacts.

use std::path::PathBuf;

use anyhow::Context;
use formlift_core::application::{IngestGate, run_batch};
use formlift_core::infrastructure::config::load_project_config;
use formlift_core::infrastructure::extraction::FileExtractionSource;

pub async fn execute(project_dir: PathBuf, select: Option<String>) -> anyhow::Result<()> {
    let start = std::time::Instant::now();
    tracing::debug!(?project_dir, ?select, "Ingestion requested");

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_project_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Project: {} (v{})", config.name, config.version);

    // B. Run the Pipeline (Application Layer)
    // The file adapter stands in for the hosted extraction service; it
    // reads the responses the service already produced.
    let source = FileExtractionSource;
    let gate = IngestGate::new();

    let result = run_batch(&gate, &source, &project_dir, &config, select).await;

    match result {
        Ok(run_res) => {
            if run_res.success {
                println!("\n✨ SUCCESS! Ingestion finished in {:.2?}", start.elapsed());
            } else {
                eprintln!("\n❌ FAILURE. {} document(s) failed.", run_res.errors.len());
                // Exit with error code for CI/CD
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL PIPELINE ERROR: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
