// formlift-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(formlift::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(formlift::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    // --- ARTIFACTS / EXTRACTION RESPONSES ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(formlift::infra::json),
        help("Extraction responses and artifacts must be valid JSON.")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(formlift::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Extraction response not found at '{0}'")]
    #[diagnostic(
        code(formlift::infra::extraction_missing),
        help("Point the pipeline at a JSON file produced by the extraction service.")
    )]
    ExtractionNotFound(String),
}
