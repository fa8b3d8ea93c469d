// formlift/src/commands/export.rs
//
// USE CASE: hand the final edited tree to the persistence side, as-is.

use std::path::PathBuf;

use anyhow::Context;
use formlift_core::application::export_data;

pub fn execute(edited: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&edited)
        .with_context(|| format!("Failed to read edited data at {:?}", edited))?;
    let data: serde_json::Value =
        serde_json::from_str(&content).context("Edited data must be valid JSON")?;

    export_data(&data, &output)?;

    println!("📤 Exported edited data to {}", output.display());
    Ok(())
}
