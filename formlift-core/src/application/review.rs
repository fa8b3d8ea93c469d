// formlift-core/src/application/review.rs
//
// USE CASE: validate an edited data tree against a document's ruleset
// and hand the nested error map back to the caller.

use std::path::Path;

use serde_json::Value;

use crate::domain::validation::format::FormatRegistry;
use crate::domain::validation::report::{ErrorMap, Failure, Validator};
use crate::domain::validation::rule::FieldRule;
use crate::error::FormliftError;
use crate::infrastructure::fs::load_json;

/// Both views of one validation pass: the flat failure list (for
/// reporting) and the nested map (for the rendering layer).
pub struct ReviewOutcome {
    pub failures: Vec<Failure>,
    pub errors: ErrorMap,
}

impl ReviewOutcome {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Re-validate live edited data. Invoked on every edit round-trip; the
/// error map replaces the previous one wholesale.
pub fn review_edits(
    rules: &FieldRule,
    registry: &FormatRegistry,
    edited: &Value,
) -> Result<ReviewOutcome, FormliftError> {
    let validator = Validator::new(rules, registry)?;
    let failures = validator.run(edited);
    let errors = ErrorMap::project(failures.clone());
    Ok(ReviewOutcome { failures, errors })
}

/// Convenience wrapper over the persisted artifact layout: loads
/// `rules.json` from the document's target directory and validates the
/// edited tree against it.
pub fn review_document(
    doc_target: &Path,
    registry: &FormatRegistry,
    edited: &Value,
) -> Result<ReviewOutcome, FormliftError> {
    let rules: FieldRule = load_json(doc_target.join("rules.json"))?;
    review_edits(&rules, registry, edited)
}
