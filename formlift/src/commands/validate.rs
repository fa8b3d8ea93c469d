// formlift/src/commands/validate.rs
//
// USE CASE: validate an edited tree and show every failure at once.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use formlift_core::application::review_document;
use formlift_core::domain::validation::format::FormatRegistry;
use formlift_core::infrastructure::config::load_project_config;
use formlift_core::infrastructure::fs::save_json;

pub fn execute(project_dir: PathBuf, document: String, edited: PathBuf) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir)?;
    let registry = FormatRegistry::with_custom(&config.heuristics.patterns)?;

    let content = std::fs::read_to_string(&edited)
        .with_context(|| format!("Failed to read edited data at {:?}", edited))?;
    let data: serde_json::Value =
        serde_json::from_str(&content).context("Edited data must be valid JSON")?;

    let doc_target = project_dir.join(&config.target_path).join(&document);
    if !doc_target.join("rules.json").exists() {
        anyhow::bail!(
            "❌ No ruleset found for '{}'.\n👉 Have you run 'formlift run'?",
            document
        );
    }

    let outcome = review_document(&doc_target, &registry, &data)?;

    if outcome.is_valid() {
        println!("✅ '{}' is valid. No failures.", document);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Problem"]);
    for failure in &outcome.failures {
        table.add_row(vec![Cell::new(&failure.path), Cell::new(&failure.message)]);
    }
    println!("{table}");

    // The nested map is what the rendering layer consumes; persist it
    // next to the other artifacts.
    let errors_path = doc_target.join("errors.json");
    save_json(&errors_path, &outcome.errors)?;

    eprintln!(
        "❌ {} validation failure(s). Full error map written to {:?}",
        outcome.failures.len(),
        errors_path
    );
    std::process::exit(1);
}
