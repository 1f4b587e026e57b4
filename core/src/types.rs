//! Domain DTOs for the users collection.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Hosted mock APIs disagree on whether ids are JSON strings or numbers, so
//! `UserId` accepts both on the way in and always writes a string on the way
//! out. Integration tests catch any schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawUserId", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Wire shape of an id: either `"7"` or any JSON number such as `7`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawUserId> for UserId {
    fn from(raw: RawUserId) -> Self {
        match raw {
            RawUserId::Text(s) => UserId(s),
            RawUserId::Number(n) => UserId(n.to_string()),
        }
    }
}

/// A single user record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Request payload for both create and update: a user without its id.
///
/// Updates replace both fields; there is no partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}
