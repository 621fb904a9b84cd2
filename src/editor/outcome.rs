//! Edit Outcome
//!
//! Structured result of one rename interaction. The controller performs
//! no user-facing side effects; the frontend renders `message()` through
//! whatever notification surface it has.

use serde::{Deserialize, Serialize};

use crate::domain::Session;

/// How a rename interaction resolved
///
/// Every variant except `Updated` leaves the session and the view exactly
/// as they were before the trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditOutcome {
    /// Server confirmed the update; the view now shows the canonical
    /// values carried here
    Updated(Session),
    /// User cancelled the prompt. Not an error, nothing to report
    Cancelled,
    /// Proposed name was empty after trimming; no request was sent
    ValidationFailed,
    /// Server refused the update for the given reason
    Rejected(String),
    /// The request could not be completed
    TransportFailed(String),
    /// An edit for this session is already in flight
    Busy,
    /// No session with this identifier in the view
    UnknownSession(u32),
}

impl EditOutcome {
    /// User-facing acknowledgment, `None` where nothing should be shown
    pub fn message(&self) -> Option<String> {
        match self {
            EditOutcome::Updated(_) => Some("Session updated successfully!".to_string()),
            EditOutcome::Cancelled => None,
            EditOutcome::ValidationFailed => Some("Session name cannot be empty".to_string()),
            EditOutcome::Rejected(reason) => {
                Some(format!("Failed to update session: {}", reason))
            }
            EditOutcome::TransportFailed(_) => Some("Failed to update session".to_string()),
            EditOutcome::Busy => Some("Session update already in progress".to_string()),
            EditOutcome::UnknownSession(id) => Some(format!("Session {} not found", id)),
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, EditOutcome::Updated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_is_silent() {
        assert_eq!(EditOutcome::Cancelled.message(), None);
    }

    #[test]
    fn test_rejection_carries_server_reason() {
        let outcome = EditOutcome::Rejected("name already exists".to_string());
        assert_eq!(
            outcome.message().as_deref(),
            Some("Failed to update session: name already exists")
        );
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let outcome = EditOutcome::TransportFailed("connection refused".to_string());
        assert_eq!(outcome.message().as_deref(), Some("Failed to update session"));
    }
}
