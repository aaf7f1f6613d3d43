//! Read predicate handed to the data provider.

use std::fmt;

const PREFIX: &str = "where id=";
const ABSENT_TARGET: &str = "null";

/// Equality predicate selecting a remote system by identifier.
///
/// The predicate is rendered as `where id=<target>`. An absent target is
/// embedded literally as `null`, so providers see `where id=null`.
///
/// # Examples
/// ```
/// use system_manager::domain::SystemCriteria;
///
/// assert_eq!(SystemCriteria::for_system(Some("12345")).as_str(), "where id=12345");
/// assert_eq!(SystemCriteria::for_system(None).as_str(), "where id=null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SystemCriteria(String);

impl SystemCriteria {
    /// Build the predicate for the given remote system identifier.
    #[must_use]
    pub fn for_system(system_id: Option<&str>) -> Self {
        Self(format!("{PREFIX}{}", system_id.unwrap_or(ABSENT_TARGET)))
    }

    /// Rendered predicate.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Target identifier embedded in the predicate.
    #[must_use]
    pub fn target(&self) -> &str {
        self.0.strip_prefix(PREFIX).unwrap_or(self.0.as_str())
    }
}

impl AsRef<str> for SystemCriteria {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SystemCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
