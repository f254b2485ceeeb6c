//! Strongly-typed expense identifier
//!
//! Expenses are the only entity with a durable identity, so a single newtype
//! is enough. The wrapper keeps raw UUIDs out of signatures and gives the CLI
//! a short display form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an expense record, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether this ID starts with the given hex prefix
    ///
    /// Accepts the short display form (`exp-1a2b3c4d`) as well as a bare
    /// prefix of the hyphenated UUID.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.strip_prefix("exp-").unwrap_or(prefix);
        self.0.to_string().starts_with(&prefix.to_ascii_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", &self.0.to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("exp-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
