//! User identity model.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of the internal account substituted on the delete path.
pub const DEFAULT_SERVICE_ACCOUNT_ID: &str = "12345";

/// Opaque user identifier as supplied by callers.
///
/// Construction never fails: unknown or malformed identifiers are still
/// handed to the authenticator, which decides whether a user exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Authenticated user record produced by the authenticator.
///
/// ## Invariants
/// - Immutable once built; all fields are exposed through accessors only.
/// - `references` holds arbitrary JSON values linked to the user.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use system_manager::domain::{User, UserId};
///
/// let user = User::new(
///     UserId::new("1"),
///     "Ana",
///     "Lopez",
///     "Madrid",
///     vec![json!(1), json!(2)],
/// );
/// assert_eq!(user.id().as_str(), "1");
/// assert_eq!(user.references().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    address: String,
    #[serde(default)]
    references: Vec<Value>,
}

impl User {
    /// Build a new [`User`].
    #[must_use]
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        references: Vec<Value>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            references,
        }
    }

    /// Internal account used in place of the caller on the delete path.
    #[must_use]
    pub fn service_account(id: impl Into<String>) -> Self {
        Self::new(UserId::new(id), "Remote", "Systems", "internal", Vec::new())
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Postal address or location.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// References associated with the user.
    #[must_use]
    pub fn references(&self) -> &[Value] {
        self.references.as_slice()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the user model.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("1")]
    #[case("")]
    #[case(" padded ")]
    fn user_id_keeps_raw_input(#[case] raw: &str) {
        let id = UserId::from(raw);
        assert_eq!(id.as_str(), raw);
        assert_eq!(String::from(id), raw);
    }

    #[rstest]
    fn service_account_has_no_references() {
        let user = User::service_account(DEFAULT_SERVICE_ACCOUNT_ID);
        assert_eq!(user.id().as_str(), DEFAULT_SERVICE_ACCOUNT_ID);
        assert_eq!(user.first_name(), "Remote");
        assert!(user.references().is_empty());
    }

    #[rstest]
    fn deserialises_camel_case_fixture_records() {
        let user: User = serde_json::from_value(json!({
            "id": "24",
            "firstName": "Manuela",
            "lastName": "Carmena",
            "address": "Badajoz",
            "references": [1, 2],
        }))
        .expect("user fixture should deserialise");

        assert_eq!(user.id(), &UserId::new("24"));
        assert_eq!(user.last_name(), "Carmena");
        assert_eq!(user.address(), "Badajoz");
        assert_eq!(user.references(), [json!(1), json!(2)]);
    }

    #[rstest]
    fn rejects_unknown_fields() {
        let result = serde_json::from_value::<User>(json!({
            "id": "1",
            "firstName": "Ana",
            "lastName": "Lopez",
            "address": "Madrid",
            "role": "admin",
        }));
        assert!(result.is_err());
    }
}
