//! Edit Draft
//!
//! Transient proposed values for one rename interaction. Created when the
//! user opens the edit prompt, discarded as soon as the interaction
//! resolves.

use serde::{Deserialize, Serialize};

use super::session::Session;

/// Proposed new values for a session, held together so that cancelling
/// the prompt can never discard a half-entered field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditDraft {
    /// Target session identifier
    pub session_id: u32,
    /// Proposed name
    pub name: String,
    /// Proposed description (empty allowed)
    pub description: String,
}

impl EditDraft {
    /// Build a draft pre-filled with the session's current values
    pub fn from_session(session: &Session) -> Self {
        Self {
            session_id: session.id,
            name: session.name().to_string(),
            description: session.description.clone(),
        }
    }

    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    pub fn trimmed_description(&self) -> &str {
        self.description.trim()
    }
}
