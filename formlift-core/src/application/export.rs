// formlift-core/src/application/export.rs
//
// USE CASE: hand the final edited tree to the persistence collaborator.
// The tree is written as formatted JSON, verbatim, no further transform.

use std::path::Path;

use serde_json::Value;

use crate::error::FormliftError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

pub fn export_data(edited: &Value, output: &Path) -> Result<(), FormliftError> {
    let content =
        serde_json::to_string_pretty(edited).map_err(InfrastructureError::JsonError)?;
    atomic_write(output, content)?;
    Ok(())
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_formatted_json_verbatim() -> Result<()> {
        let dir = tempdir()?;
        let output = dir.path().join("final.json");
        let edited = json!({ "applicantDetails": { "name": "John" } });

        export_data(&edited, &output)?;

        let written = std::fs::read_to_string(&output)?;
        let reloaded: Value = serde_json::from_str(&written)?;
        assert_eq!(reloaded, edited);
        assert!(written.contains('\n'), "export must be formatted");
        Ok(())
    }
}
