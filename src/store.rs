//! Client-Side View State
//!
//! Holds the sessions as the client last saw them confirmed by the
//! server, plus JSON persistence so a thin frontend can keep the view
//! between runs. No rendering lives here.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Session};

/// View state: the session list as last confirmed by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub sessions: Vec<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self, id: u32) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }
}

/// Shared handle to the view state
pub type AppStore = Mutex<AppState>;

/// Overwrite a session's displayed values with server-confirmed ones
///
/// The sort key is recomputed together with the name (see
/// [`Session::rename`]). Returns the updated session.
pub fn store_update_session(
    state: &mut AppState,
    id: u32,
    name: &str,
    description: String,
) -> DomainResult<Session> {
    let session = state
        .sessions
        .iter_mut()
        .find(|session| session.id == id)
        .ok_or_else(|| DomainError::NotFound(format!("Session {} not found", id)))?;
    session.rename(name, description)?;
    Ok(session.clone())
}

/// Load the persisted view state
pub fn load_view(path: &Path) -> DomainResult<AppState> {
    if !path.exists() {
        return Err(DomainError::NotFound(format!("no view state at {}", path.display())));
    }
    let json = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Internal(format!("failed to read view state: {}", e)))?;
    serde_json::from_str(&json)
        .map_err(|e| DomainError::Internal(format!("failed to parse view state: {}", e)))
}

/// Persist the view state as JSON
pub fn save_view(path: &Path, state: &AppState) -> DomainResult<()> {
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| DomainError::Internal(format!("failed to write view state: {}", e)))
}
