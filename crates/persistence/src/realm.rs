//! Realm identifier type.
//!
//! Every store operation is scoped to a [`RealmId`]; records written under
//! one realm are invisible from every other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The realm used when a request does not name one.
pub const DEFAULT_REALM: &str = "default";

/// An opaque realm identifier.
///
/// # Examples
///
/// ```
/// use cairn_persistence::realm::RealmId;
///
/// let realm = RealmId::new("acme");
/// assert_eq!(realm.as_str(), "acme");
/// assert!(realm.is_valid());
/// assert!(!RealmId::new("  ").is_valid());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealmId(String);

impl RealmId {
    /// Creates a new realm ID from the given string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the default realm ID.
    pub fn default_realm() -> Self {
        Self(DEFAULT_REALM.to_string())
    }

    /// Returns the realm ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the ID is non-blank and free of whitespace and
    /// control characters.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && !self
                .0
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
    }
}

impl fmt::Display for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RealmId({})", self.0)
    }
}

impl FromStr for RealmId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RealmId::new(s))
    }
}

impl From<&str> for RealmId {
    fn from(s: &str) -> Self {
        RealmId::new(s)
    }
}

impl AsRef<str> for RealmId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_realm() {
        assert_eq!(RealmId::default_realm().as_str(), "default");
    }

    #[test]
    fn test_validity() {
        assert!(RealmId::new("acme-corp").is_valid());
        assert!(!RealmId::new("").is_valid());
        assert!(!RealmId::new("acme corp").is_valid());
        assert!(!RealmId::new("acme\n").is_valid());
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", RealmId::new("acme")), "RealmId(acme)");
    }
}
