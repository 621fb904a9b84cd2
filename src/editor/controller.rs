//! Edit Controller
//!
//! Drives one session through a rename round trip against the remote
//! store. The view store is only ever mutated from server-confirmed
//! values, after the response arrives; every failure path leaves it
//! untouched.

use std::collections::HashSet;

use tokio::sync::Mutex;

use crate::domain::EditDraft;
use crate::remote::RemoteStore;
use crate::store::{store_update_session, AppStore};

use super::outcome::EditOutcome;
use super::prompt::{EditPrompt, PromptOutcome};

/// Where a rename interaction currently stands
///
/// Linear per invocation: Idle → Collecting → Validating → Submitting →
/// Reconciling → Idle, with every failure path returning straight to
/// Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Idle,
    Collecting,
    Validating,
    Submitting,
    Reconciling,
}

/// Orchestrates rename interactions
///
/// Holds the set of session ids with an edit in flight; a second trigger
/// for the same session is refused until the first resolves.
pub struct EditController<R: RemoteStore> {
    remote: R,
    in_flight: Mutex<HashSet<u32>>,
}

impl<R: RemoteStore> EditController<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Whether a rename for this session is currently unresolved
    ///
    /// Frontends can use this to disable the edit affordance.
    pub async fn is_editing(&self, id: u32) -> bool {
        self.in_flight.lock().await.contains(&id)
    }

    /// Run one full rename interaction for the session with `id`
    ///
    /// Suspends at the prompt and at the network step. The store lock is
    /// held only while reading defaults and while reconciling, never
    /// across a suspension point, so the view stays readable (and shows
    /// the stale values) while the request is in flight.
    pub async fn edit_session<P: EditPrompt>(
        &self,
        store: &AppStore,
        id: u32,
        prompt: &mut P,
    ) -> EditOutcome {
        {
            let mut in_flight = self.in_flight.lock().await;
            if !in_flight.insert(id) {
                log::warn!("session {}: edit already in flight", id);
                return EditOutcome::Busy;
            }
        }

        let outcome = self.run_edit(store, id, prompt).await;
        self.in_flight.lock().await.remove(&id);

        match &outcome {
            EditOutcome::Updated(session) => {
                log::info!("session {}: renamed to {:?}", id, session.name());
            }
            EditOutcome::Cancelled => log::debug!("session {}: edit cancelled", id),
            other => log::warn!("session {}: edit failed: {:?}", id, other),
        }
        outcome
    }

    async fn run_edit<P: EditPrompt>(
        &self,
        store: &AppStore,
        id: u32,
        prompt: &mut P,
    ) -> EditOutcome {
        self.enter(id, EditPhase::Collecting);
        let defaults = {
            let state = store.lock().await;
            match state.session(id) {
                Some(session) => EditDraft::from_session(session),
                None => return EditOutcome::UnknownSession(id),
            }
        };

        let draft = match prompt.collect(defaults).await {
            PromptOutcome::Submitted(draft) => draft,
            PromptOutcome::Cancelled => return EditOutcome::Cancelled,
        };

        self.enter(id, EditPhase::Validating);
        let name = draft.trimmed_name().to_string();
        if name.is_empty() {
            return EditOutcome::ValidationFailed;
        }
        let description = draft.trimmed_description().to_string();

        self.enter(id, EditPhase::Submitting);
        let response = match self.remote.update_session(id, &name, &description).await {
            Ok(response) => response,
            Err(e) => return EditOutcome::TransportFailed(e.to_string()),
        };

        if !response.success {
            let reason = response.error.unwrap_or_else(|| "unknown error".to_string());
            return EditOutcome::Rejected(reason);
        }

        // The server's echoed values are authoritative; a success reply
        // without them cannot be reconciled.
        let (canonical_name, canonical_description) = match (response.name, response.description) {
            (Some(name), Some(description)) => (name, description),
            _ => {
                return EditOutcome::TransportFailed(
                    "server response missing canonical values".to_string(),
                )
            }
        };

        self.enter(id, EditPhase::Reconciling);
        let mut state = store.lock().await;
        match store_update_session(&mut state, id, &canonical_name, canonical_description) {
            Ok(session) => EditOutcome::Updated(session),
            Err(crate::domain::DomainError::NotFound(_)) => EditOutcome::UnknownSession(id),
            Err(e) => EditOutcome::TransportFailed(e.to_string()),
        }
    }

    fn enter(&self, id: u32, phase: EditPhase) {
        log::debug!("session {}: {:?}", id, phase);
    }
}
