// formlift-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// The temporary file is created in the target's own directory so the
/// final rename stays on one filesystem. An artifact is either fully
/// written or absent, never truncated.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    // Atomic rename (persist)
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Persist a serializable artifact as formatted JSON.
pub fn save_json<P: AsRef<Path>, T: Serialize>(path: P, data: &T) -> Result<(), InfrastructureError> {
    let content = serde_json::to_string_pretty(data).map_err(InfrastructureError::JsonError)?;
    atomic_write(path, content)
}

/// Load a JSON artifact back from disk.
pub fn load_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, InfrastructureError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(InfrastructureError::Io)?;
    serde_json::from_str(&content).map_err(InfrastructureError::JsonError)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.txt");
        let content = "Hello, World!";

        atomic_write(&file_path, content)?;

        assert!(file_path.exists());
        let read_content = fs::read_to_string(file_path)?;
        assert_eq!(read_content, content);
        Ok(())
    }

    #[test]
    fn test_atomic_write_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.txt");

        atomic_write(&file_path, "Initial")?;
        atomic_write(&file_path, "Updated")?;

        let read_content = fs::read_to_string(file_path)?;
        assert_eq!(read_content, "Updated");
        Ok(())
    }

    #[test]
    fn test_json_artifact_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("artifact.json");
        let data = json!({ "name": "John", "nested": { "ok": true } });

        save_json(&file_path, &data)?;
        let reloaded: serde_json::Value = load_json(&file_path)?;

        assert_eq!(reloaded, data);
        // Formatted output, handed over verbatim.
        assert!(fs::read_to_string(&file_path)?.contains('\n'));
        Ok(())
    }
}
