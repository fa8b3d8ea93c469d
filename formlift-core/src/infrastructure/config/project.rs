// formlift-core/src/infrastructure/config/project.rs

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::validation::format::FormatHeuristic;
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    pub name: String,
    pub version: String,

    /// Directory of extraction responses, relative to the project.
    #[serde(rename = "data-path", default = "default_data_path")]
    pub data_path: String,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    #[serde(rename = "config-paths", default)]
    pub config_paths: Vec<String>,

    #[serde(default)]
    pub heuristics: HeuristicsConfig,
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, Default)]
pub struct HeuristicsConfig {
    /// Custom format heuristics, appended after the built-in table.
    #[validate(nested)]
    #[serde(default)]
    pub patterns: Vec<FormatHeuristic>,
}

fn default_data_path() -> String {
    "extracted".to_string()
}
fn default_target_path() -> String {
    "target".to_string()
}

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    // 1. Découverte du fichier principal
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Chargement YAML Base
    let content = fs::read_to_string(&config_path).map_err(InfrastructureError::Io)?;
    let mut config: ProjectConfig =
        serde_yaml::from_str(&content).map_err(InfrastructureError::YamlError)?;

    // 3. Hydratation des Satellites (Fail-Secure)
    if let Some(config_folder) = config.config_paths.first() {
        let config_dir = project_dir.join(config_folder);
        if config_dir.exists() {
            // Si un fragment est corrompu, on propage avec '?'
            load_satellite_configs(&mut config, &config_dir)?;
        }
    }

    // 4. Override via Variables d'Environnement (Pattern 'Layering')
    // Permet de faire: FORMLIFT_TARGET_PATH=/tmp/build formlift run
    apply_env_overrides(&mut config);

    // 5. User-supplied patterns are checked before any compilation
    // attempt; a malformed heuristic config is a hard error.
    config.heuristics.validate().map_err(|e| {
        InfrastructureError::ConfigError(format!("Invalid heuristics config: {e}"))
    })?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["formlift_project_conf.yaml", "formlift.yaml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

/// Charge un fragment de configuration typé depuis un fichier.
fn load_fragment<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
    serde_yaml::from_str(&content).map_err(InfrastructureError::YamlError)
}

fn load_satellite_configs(
    config: &mut ProjectConfig,
    config_dir: &Path,
) -> Result<(), InfrastructureError> {
    let path = config_dir.join("heuristics.yml");
    if path.exists() {
        #[derive(Deserialize)]
        struct HeuristicsWrapper {
            patterns: Vec<FormatHeuristic>,
        }

        let wrapper: HeuristicsWrapper = load_fragment(&path)?;
        config.heuristics.patterns = wrapper.patterns;
        info!("  🧩 Custom heuristics loaded");
    }
    Ok(())
}

fn apply_env_overrides(config: &mut ProjectConfig) {
    if let Ok(val) = std::env::var("FORMLIFT_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Ok(val) = std::env::var("FORMLIFT_DATA_PATH") {
        info!(old = ?config.data_path, new = ?val, "Overriding data path via ENV");
        config.data_path = val;
    }
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_load_minimal_config_with_defaults() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("formlift.yaml"),
            "name: demo\nversion: \"0.1.0\"\n",
        )?;

        let config = load_project_config(dir.path())?;
        assert_eq!(config.name, "demo");
        assert_eq!(config.data_path, "extracted");
        assert_eq!(config.target_path, "target");
        assert!(config.heuristics.patterns.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = tempdir().unwrap();
        let result = load_project_config(dir.path());
        assert!(matches!(
            result,
            Err(InfrastructureError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_satellite_heuristics_loaded() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("formlift.yaml"),
            "name: demo\nversion: \"0.1.0\"\nconfig-paths:\n  - config\n",
        )?;
        fs::create_dir(dir.path().join("config"))?;
        fs::write(
            dir.path().join("config/heuristics.yml"),
            r#"patterns:
  - name: national_id
    key_tokens: ["nationalid", "ssn"]
    regex: '^[0-9]{9}$'
    message: "must be a 9 digit national id"
"#,
        )?;

        let config = load_project_config(dir.path())?;
        assert_eq!(config.heuristics.patterns.len(), 1);
        assert_eq!(config.heuristics.patterns[0].name, "national_id");
        Ok(())
    }

    #[test]
    fn test_empty_custom_regex_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("formlift.yaml"),
            r#"name: demo
version: "0.1.0"
heuristics:
  patterns:
    - name: broken
      key_tokens: ["broken"]
      regex: ""
      message: "unused"
"#,
        )?;

        let result = load_project_config(dir.path());
        assert!(matches!(result, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }
}
