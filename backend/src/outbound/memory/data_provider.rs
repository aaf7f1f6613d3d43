//! Remote system store backed by a process-local map.
//!
//! Records are keyed by remote system id. `update` expects payloads shaped as
//! `[id, ...fields]` with a string id and stores the whole payload under it.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{DataProvider, DataProviderError};
use crate::domain::{SystemCriteria, User};

/// Remote system store keeping records in memory.
///
/// Calls without an authenticated user are refused with
/// [`DataProviderError::OperationNotSupported`].
#[derive(Debug, Default)]
pub struct InMemoryDataProvider {
    systems: RwLock<BTreeMap<String, Vec<Value>>>,
}

impl InMemoryDataProvider {
    /// Build a store holding the given records.
    #[must_use]
    pub fn with_systems(systems: impl IntoIterator<Item = (String, Vec<Value>)>) -> Self {
        Self {
            systems: RwLock::new(systems.into_iter().collect()),
        }
    }

    /// Snapshot of the record stored for `system_id`.
    #[must_use]
    pub fn get(&self, system_id: &str) -> Option<Vec<Value>> {
        self.systems
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(system_id)
            .cloned()
    }

    /// Identifiers of every stored system, in ascending order.
    #[must_use]
    pub fn system_ids(&self) -> Vec<String> {
        self.systems
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn require_user(user: Option<&User>, action: &str) -> Result<(), DataProviderError> {
        match user {
            Some(_) => Ok(()),
            None => Err(DataProviderError::operation_not_supported(format!(
                "{action} requires an authenticated user"
            ))),
        }
    }
}

#[async_trait]
impl DataProvider for InMemoryDataProvider {
    async fn read(
        &self,
        user: Option<User>,
        criteria: SystemCriteria,
    ) -> Result<Vec<Value>, DataProviderError> {
        Self::require_user(user.as_ref(), "read")?;
        self.get(criteria.target()).ok_or_else(|| {
            DataProviderError::query(format!("no remote system matches `{criteria}`"))
        })
    }

    async fn update(
        &self,
        user: Option<User>,
        payload: Vec<Value>,
    ) -> Result<bool, DataProviderError> {
        Self::require_user(user.as_ref(), "update")?;
        let Some(Value::String(system_id)) = payload.first() else {
            return Ok(false);
        };
        let key = system_id.clone();

        let mut guard = self.systems.write().unwrap_or_else(PoisonError::into_inner);
        if guard.contains_key(&key) {
            return Ok(false);
        }
        guard.insert(key, payload);
        Ok(true)
    }

    async fn delete(
        &self,
        user: Option<User>,
        target_id: String,
    ) -> Result<bool, DataProviderError> {
        Self::require_user(user.as_ref(), "delete")?;
        let mut guard = self.systems.write().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.remove(&target_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn user() -> Option<User> {
        Some(User::new(UserId::new("1"), "Ana", "Lopez", "Madrid", Vec::new()))
    }

    #[fixture]
    fn store() -> InMemoryDataProvider {
        InMemoryDataProvider::with_systems([
            ("12345".to_owned(), vec![json!("uno"), json!("dos")]),
            ("null".to_owned(), vec![json!(["uno", "dos"]), json!(["1", "2"])]),
        ])
    }

    #[rstest]
    #[case(Some("12345"), json!(["uno", "dos"]))]
    #[case(None, json!([["uno", "dos"], ["1", "2"]]))]
    #[tokio::test]
    async fn read_returns_stored_records(
        store: InMemoryDataProvider,
        user: Option<User>,
        #[case] system_id: Option<&str>,
        #[case] expected: Value,
    ) {
        let records = store
            .read(user, SystemCriteria::for_system(system_id))
            .await
            .expect("read succeeds");
        assert_eq!(Value::from(records), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn read_of_unknown_system_is_a_query_error(
        store: InMemoryDataProvider,
        user: Option<User>,
    ) {
        let error = store
            .read(user, SystemCriteria::for_system(Some("10000")))
            .await
            .expect_err("unknown system");
        assert_eq!(
            error,
            DataProviderError::query("no remote system matches `where id=10000`")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn anonymous_calls_are_not_supported(store: InMemoryDataProvider) {
        let read = store
            .read(None, SystemCriteria::for_system(Some("12345")))
            .await;
        let update = store.update(None, vec![json!("777")]).await;
        let delete = store.delete(None, "12345".to_owned()).await;

        for error in [read.err(), update.err(), delete.err()] {
            assert!(matches!(
                error,
                Some(DataProviderError::OperationNotSupported { .. })
            ));
        }
        assert!(store.get("12345").is_some());
        assert!(store.get("777").is_none());
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::numeric_id(vec![json!(1), json!(2)])]
    #[case::duplicate(vec![json!("12345"), json!("again")])]
    #[tokio::test]
    async fn update_declines_unusable_payloads(
        store: InMemoryDataProvider,
        user: Option<User>,
        #[case] payload: Vec<Value>,
    ) {
        let accepted = store.update(user, payload).await.expect("update runs");
        assert!(!accepted);
        assert_eq!(store.system_ids(), ["12345", "null"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_stores_new_systems(store: InMemoryDataProvider, user: Option<User>) {
        let payload = vec![json!("777"), json!("tres")];
        let accepted = store
            .update(user, payload.clone())
            .await
            .expect("update runs");

        assert!(accepted);
        assert_eq!(store.get("777"), Some(payload));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_a_record_was_removed(
        store: InMemoryDataProvider,
        user: Option<User>,
    ) {
        let removed = store
            .delete(user.clone(), "12345".to_owned())
            .await
            .expect("delete runs");
        let removed_again = store
            .delete(user, "12345".to_owned())
            .await
            .expect("delete runs");

        assert!(removed);
        assert!(!removed_again);
        assert!(store.get("12345").is_none());
    }
}
