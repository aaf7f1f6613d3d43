//! JSON fixtures seeding the in-memory adapters.
//!
//! A fixture document lists the users known to the authenticator and the
//! records held for each remote system:
//!
//! ```json
//! {
//!   "users": [
//!     {"id": "1", "firstName": "Ana", "lastName": "Lopez", "address": "Madrid", "references": [1, 2]}
//!   ],
//!   "systems": {"12345": ["uno", "dos"]}
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::{InMemoryAuthenticator, InMemoryDataProvider};
use crate::domain::User;

/// Errors raised while loading a fixture document.
#[derive(Debug, Error)]
pub enum FixtureLoadError {
    /// The fixture file could not be read.
    #[error("failed to read fixtures at {path}: {source}")]
    Read {
        /// Path to the fixture file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The fixture document is not valid JSON or has the wrong shape.
    #[error("invalid fixtures JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
}

/// Parsed fixture document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FixtureSnapshot {
    /// Users resolvable by the authenticator.
    #[serde(default)]
    pub users: Vec<User>,
    /// Records keyed by remote system id.
    #[serde(default)]
    pub systems: BTreeMap<String, Vec<Value>>,
}

impl FixtureSnapshot {
    /// Parse a fixture document.
    ///
    /// # Examples
    /// ```
    /// use system_manager::outbound::memory::FixtureSnapshot;
    ///
    /// let snapshot = FixtureSnapshot::from_json(r#"{"systems": {"12345": ["uno"]}}"#)
    ///     .expect("valid fixtures");
    /// assert!(snapshot.users.is_empty());
    /// assert_eq!(snapshot.systems.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FixtureLoadError> {
        serde_json::from_str(json).map_err(|err| FixtureLoadError::Parse {
            message: err.to_string(),
        })
    }

    /// Read and parse the fixture document at `path`.
    pub fn from_file(path: &Path) -> Result<Self, FixtureLoadError> {
        let read_error = |source| FixtureLoadError::Read {
            path: path.to_path_buf(),
            source,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "fixtures path must be a file",
            ))
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir
            .read_to_string(Path::new(file_name))
            .map_err(read_error)?;
        Self::from_json(&contents)
    }

    /// Build the in-memory adapters seeded with this snapshot.
    #[must_use]
    pub fn into_adapters(self) -> (InMemoryAuthenticator, InMemoryDataProvider) {
        let Self { users, systems } = self;
        (
            InMemoryAuthenticator::with_users(users),
            InMemoryDataProvider::with_systems(systems),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::domain::ports::Authenticator;
    use rstest::rstest;
    use serde_json::json;
    use std::io::Write;

    const FIXTURES: &str = r#"{
        "users": [
            {"id": "1", "firstName": "Ana", "lastName": "Lopez", "address": "Madrid", "references": [1, 2]}
        ],
        "systems": {
            "12345": ["uno", "dos"],
            "null": [["uno", "dos"], ["1", "2"]]
        }
    }"#;

    #[rstest]
    fn parses_users_and_systems() {
        let snapshot = FixtureSnapshot::from_json(FIXTURES).expect("valid fixtures");

        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(
            snapshot.systems.get("null"),
            Some(&vec![json!(["uno", "dos"]), json!(["1", "2"])])
        );
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"users": [{"id": "1"}]}"#)]
    #[case(r#"{"devices": {}}"#)]
    fn rejects_malformed_documents(#[case] json: &str) {
        let result = FixtureSnapshot::from_json(json);
        assert!(matches!(result, Err(FixtureLoadError::Parse { .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn loads_from_file_and_seeds_adapters() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(FIXTURES.as_bytes()).expect("write fixtures");

        let snapshot = FixtureSnapshot::from_file(file.path()).expect("fixtures load");
        let (authenticator, data_provider) = snapshot.into_adapters();

        assert!(authenticator.resolve(&UserId::new("1")).await.is_some());
        assert_eq!(data_provider.system_ids(), ["12345", "null"]);
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let result = FixtureSnapshot::from_file(&path);
        assert!(matches!(result, Err(FixtureLoadError::Read { path: p, .. }) if p == path));
    }
}
