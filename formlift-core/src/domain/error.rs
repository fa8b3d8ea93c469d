// formlift-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid format heuristic '{name}': {reason}")]
    #[diagnostic(
        code(formlift::domain::heuristic),
        help("Check the regex syntax of the custom pattern in your heuristics config.")
    )]
    InvalidHeuristic { name: String, reason: String },

    #[error("Unknown format check '{0}' referenced by the ruleset")]
    #[diagnostic(
        code(formlift::domain::unknown_format),
        help("The ruleset was built with a heuristic that is not registered. Re-run ingestion or restore the custom pattern to your config.")
    )]
    UnknownFormat(String),
}
