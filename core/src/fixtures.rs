//! JSON test data loaded from the workspace `test-data/` directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FixtureError;

/// Absolute path of `name` inside `test-data/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../test-data").join(name)
}

/// Read and parse a JSON document from `path`.
pub fn load_json(path: impl AsRef<Path>) -> Result<serde_json::Value, FixtureError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading fixture");
    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_fixture(name: &str) -> Result<serde_json::Value, FixtureError> {
    load_json(fixture_path(name))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn shipped_payloads_are_objects() {
        for name in ["create_user.json", "update_user.json", "patch_user.json"] {
            let payload = load_fixture(name).unwrap();
            assert!(payload.is_object(), "{name} should hold a JSON object");
        }
    }

    #[test]
    fn missing_fixture_reports_io_error() {
        let err = load_fixture("does_not_exist.json").unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
        assert!(err.to_string().contains("does_not_exist.json"));
    }

    #[test]
    fn malformed_fixture_reports_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = load_json(file.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Json { .. }));
    }
}
