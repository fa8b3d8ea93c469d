// formlift-core/src/application/clean.rs

use crate::error::FormliftError;
use crate::infrastructure::config::load_project_config;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::{Component, Path};

pub fn clean_project(project_dir: &Path) -> Result<(), FormliftError> {
    tracing::info!("🧹 Initializing cleanup sequence...");

    let config = load_project_config(project_dir).map_err(FormliftError::Infrastructure)?;
    let target_rel = config.target_path;
    let full_path = project_dir.join(&target_rel);

    // Zero-Trust Path Traversal Guard
    if full_path
        .components()
        .any(|component| matches!(component, Component::ParentDir))
    {
        return Err(FormliftError::UnsafePath(target_rel));
    }

    if full_path.exists() {
        fs::remove_dir_all(&full_path)
            .map_err(|e| FormliftError::Infrastructure(InfrastructureError::Io(e)))?;
        println!("   🗑️  Artifacts removed: {}", target_rel);
    }

    Ok(())
}
