//! Component identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Parent used when a relation has no resolvable ancestor and no root exists.
pub const SENTINEL_ROOT: &str = "ROOT";

/// Opaque key identifying a part, material or assembly.
///
/// Case and whitespace are kept exactly as supplied. Callers that want
/// case-insensitive matching must normalize before building identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Create a new identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The sentinel parent used for orphaned rows
    #[must_use]
    pub fn sentinel() -> Self {
        Self(SENTINEL_ROOT.to_string())
    }

    /// Get the identifier string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for ComponentId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}
