//! Session Entity
//!
//! Represents a measurement session: a named, described run of captures
//! on the analyzer server.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// A measurement session as displayed by the client
///
/// `name` and `sort_key` are private: the sort key is derived from the
/// name and the two must only ever change together (see [`Session::rename`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct Session {
    /// Unique identifier, assigned by the server at creation
    pub id: u32,
    name: String,
    /// Optional free-form description (empty string = none)
    pub description: String,
    sort_key: String,
    /// Creation time (epoch millis), owned by the server
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Last update time (epoch millis), owned by the server
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Session {
    /// Create a session. The name must be non-empty after trimming.
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("session name cannot be empty".to_string()));
        }
        let sort_key = sort_key_for(&name);
        Ok(Self {
            id,
            name,
            description: description.into(),
            sort_key,
            created_at: None,
            updated_at: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized lowercase form of the name, used as the sort/search key
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    /// Overwrite name and description, recomputing the sort key
    ///
    /// The sole mutation path for the name, so the sort key can never
    /// desynchronize from the displayed value. Values are stored as given
    /// (the server already canonicalizes them); an empty trimmed name is
    /// refused.
    pub fn rename(&mut self, name: &str, description: String) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("session name cannot be empty".to_string()));
        }
        self.name = name.to_string();
        self.sort_key = sort_key_for(name);
        self.description = description;
        Ok(())
    }
}

fn sort_key_for(name: &str) -> String {
    name.to_lowercase()
}

/// Wire/disk form of a session, validated into [`Session`] on deserialize
///
/// A stored sort key is ignored and recomputed from the name, so a stale
/// cache file cannot smuggle in a desynchronized key.
#[derive(Deserialize)]
struct RawSession {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_at: Option<i64>,
    #[serde(default)]
    updated_at: Option<i64>,
}

impl TryFrom<RawSession> for Session {
    type Error = DomainError;

    fn try_from(raw: RawSession) -> DomainResult<Self> {
        let mut session = Session::new(raw.id, raw.name, raw.description)?;
        session.created_at = raw.created_at;
        session.updated_at = raw.updated_at;
        Ok(session)
    }
}
