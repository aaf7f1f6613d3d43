//! Dispatcher settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional configuration file and
//! `SYSTEM_MANAGER_*` environment variables.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{DEFAULT_SERVICE_ACCOUNT_ID, User};

/// Accept an account id given as a string or as a bare number.
///
/// Environment values such as `12345` reach serde as integers.
fn de_account_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number account id, found {other}"
        ))),
    }
}

/// Configuration values for the remote system dispatcher.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SYSTEM_MANAGER")]
pub struct ManagerSettings {
    /// JSON fixtures seeding the in-memory stores.
    pub fixtures_path: Option<PathBuf>,
    /// Identifier of the account substituted for callers on delete.
    #[ortho_config(default = DEFAULT_SERVICE_ACCOUNT_ID.to_owned())]
    #[serde(deserialize_with = "de_account_id")]
    pub service_account_id: String,
}

impl ManagerSettings {
    /// Return the configured fixtures path, if any.
    #[must_use]
    pub fn fixtures_path(&self) -> Option<&Path> {
        self.fixtures_path.as_deref()
    }

    /// Return the configured service account id.
    #[must_use]
    pub fn service_account_id(&self) -> &str {
        self.service_account_id.as_str()
    }

    /// Build the service account used on the delete path.
    #[must_use]
    pub fn service_account(&self) -> User {
        User::service_account(self.service_account_id())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for dispatcher configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ManagerSettings {
        ManagerSettings::load_from_iter([OsString::from("system-manager")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SYSTEM_MANAGER_FIXTURES_PATH", None::<String>),
            ("SYSTEM_MANAGER_SERVICE_ACCOUNT_ID", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.fixtures_path().is_none());
        assert_eq!(settings.service_account_id(), DEFAULT_SERVICE_ACCOUNT_ID);
        assert_eq!(
            settings.service_account().id().as_str(),
            DEFAULT_SERVICE_ACCOUNT_ID
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SYSTEM_MANAGER_FIXTURES_PATH",
                Some("/tmp/remote_systems.json".to_owned()),
            ),
            ("SYSTEM_MANAGER_SERVICE_ACCOUNT_ID", Some("ops".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.fixtures_path(),
            Some(Path::new("/tmp/remote_systems.json"))
        );
        assert_eq!(settings.service_account_id(), "ops");
        assert_eq!(settings.service_account().first_name(), "Remote");
    }

    #[rstest]
    #[case("12345")]
    #[case("42")]
    fn numeric_service_account_ids_are_accepted(#[case] raw: &str) {
        let _guard = lock_env([
            ("SYSTEM_MANAGER_FIXTURES_PATH", None::<String>),
            ("SYSTEM_MANAGER_SERVICE_ACCOUNT_ID", Some(raw.to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.service_account_id(), raw);
    }

    #[rstest]
    #[case(serde_json::json!("ops"), Some("ops"))]
    #[case(serde_json::json!(12345), Some("12345"))]
    #[case(serde_json::json!(true), None)]
    #[case(serde_json::json!(null), None)]
    fn account_ids_deserialise_from_strings_and_numbers(
        #[case] raw: Value,
        #[case] expected: Option<&str>,
    ) {
        let parsed = de_account_id(raw).ok();
        assert_eq!(parsed.as_deref(), expected);
    }
}
