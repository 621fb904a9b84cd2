//! Editor Integration Tests
//!
//! Drives the controller state machine with mock prompt and mock remote
//! store, covering every exit path of the rename round trip.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex as StdMutex};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::domain::{DomainError, DomainResult, EditDraft, Session};
    use crate::editor::{EditController, EditOutcome, EditPrompt, PromptOutcome};
    use crate::remote::{RemoteStore, UpdateResponse};
    use crate::store::{AppState, AppStore};

    /// Remote store returning a scripted reply, recording every call
    struct MockRemote {
        reply: DomainResult<UpdateResponse>,
        calls: Arc<StdMutex<Vec<(u32, String, String)>>>,
    }

    impl MockRemote {
        fn new(reply: DomainResult<UpdateResponse>) -> (Self, Arc<StdMutex<Vec<(u32, String, String)>>>) {
            let calls = Arc::new(StdMutex::new(Vec::new()));
            (
                Self {
                    reply,
                    calls: calls.clone(),
                },
                calls,
            )
        }

        fn success(name: &str, description: &str) -> (Self, Arc<StdMutex<Vec<(u32, String, String)>>>) {
            Self::new(Ok(UpdateResponse {
                success: true,
                name: Some(name.to_string()),
                description: Some(description.to_string()),
                error: None,
            }))
        }

        fn rejection(error: &str) -> (Self, Arc<StdMutex<Vec<(u32, String, String)>>>) {
            Self::new(Ok(UpdateResponse {
                success: false,
                name: None,
                description: None,
                error: Some(error.to_string()),
            }))
        }
    }

    #[async_trait]
    impl RemoteStore for MockRemote {
        async fn update_session(&self, id: u32, name: &str, description: &str)
            -> DomainResult<UpdateResponse>
        {
            self.calls
                .lock()
                .unwrap()
                .push((id, name.to_string(), description.to_string()));
            self.reply.clone()
        }
    }

    /// Prompt returning a scripted outcome, recording the defaults it saw
    struct MockPrompt {
        outcome: PromptOutcome,
        seen_defaults: Option<EditDraft>,
        calls: usize,
    }

    impl MockPrompt {
        fn submitting(name: &str, description: &str) -> Self {
            Self {
                outcome: PromptOutcome::Submitted(EditDraft {
                    session_id: 0,
                    name: name.to_string(),
                    description: description.to_string(),
                }),
                seen_defaults: None,
                calls: 0,
            }
        }

        fn cancelling() -> Self {
            Self {
                outcome: PromptOutcome::Cancelled,
                seen_defaults: None,
                calls: 0,
            }
        }
    }

    #[async_trait]
    impl EditPrompt for MockPrompt {
        async fn collect(&mut self, defaults: EditDraft) -> PromptOutcome {
            self.calls += 1;
            let outcome = match &self.outcome {
                PromptOutcome::Submitted(draft) => PromptOutcome::Submitted(EditDraft {
                    session_id: defaults.session_id,
                    name: draft.name.clone(),
                    description: draft.description.clone(),
                }),
                PromptOutcome::Cancelled => PromptOutcome::Cancelled,
            };
            self.seen_defaults = Some(defaults);
            outcome
        }
    }

    fn store_with_session() -> AppStore {
        AppStore::new(AppState {
            sessions: vec![Session::new(1, "Scan-1", "initial run").expect("Failed to create")],
        })
    }

    async fn snapshot(store: &AppStore) -> AppState {
        store.lock().await.clone()
    }

    #[tokio::test]
    async fn test_successful_rename_reconciles_view() {
        let store = store_with_session();
        let (remote, calls) = MockRemote::success("Scan-1-renamed", "initial run");
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::submitting("  Scan-1-renamed  ", " initial run ");

        let outcome = controller.edit_session(&store, 1, &mut prompt).await;

        // Request carried the trimmed values
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            &[(1, "Scan-1-renamed".to_string(), "initial run".to_string())]
        );
        assert!(outcome.is_updated());
        assert_eq!(outcome.message().as_deref(), Some("Session updated successfully!"));

        let state = store.lock().await;
        let session = state.session(1).expect("Session missing");
        assert_eq!(session.name(), "Scan-1-renamed");
        assert_eq!(session.description, "initial run");
        assert_eq!(session.sort_key(), "scan-1-renamed");
    }

    #[tokio::test]
    async fn test_server_canonical_values_win() {
        let store = store_with_session();
        // Server normalizes differently from what the client submitted
        let (remote, _calls) = MockRemote::success("Scan-1 (canonical)", "tidied");
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::submitting("Scan-1-renamed", "untidy");

        let outcome = controller.edit_session(&store, 1, &mut prompt).await;

        assert!(outcome.is_updated());
        let state = store.lock().await;
        let session = state.session(1).expect("Session missing");
        assert_eq!(session.name(), "Scan-1 (canonical)");
        assert_eq!(session.description, "tidied");
        assert_eq!(session.sort_key(), "scan-1 (canonical)");
    }

    #[tokio::test]
    async fn test_prompt_defaults_are_current_values() {
        let store = store_with_session();
        let (remote, _calls) = MockRemote::success("Scan-1", "initial run");
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::submitting("Scan-1", "initial run");

        controller.edit_session(&store, 1, &mut prompt).await;

        let defaults = prompt.seen_defaults.expect("Prompt never invoked");
        assert_eq!(defaults.session_id, 1);
        assert_eq!(defaults.name, "Scan-1");
        assert_eq!(defaults.description, "initial run");
    }

    #[tokio::test]
    async fn test_whitespace_name_fails_validation() {
        let store = store_with_session();
        let before = snapshot(&store).await;
        let (remote, calls) = MockRemote::success("x", "x");
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::submitting("   ", "whatever");

        let outcome = controller.edit_session(&store, 1, &mut prompt).await;

        assert_eq!(outcome, EditOutcome::ValidationFailed);
        assert_eq!(outcome.message().as_deref(), Some("Session name cannot be empty"));
        assert!(calls.lock().unwrap().is_empty(), "no request may be sent");
        assert_eq!(snapshot(&store).await, before);
    }

    #[tokio::test]
    async fn test_server_rejection_leaves_view_unchanged() {
        let store = store_with_session();
        let before = snapshot(&store).await;
        let (remote, _calls) = MockRemote::rejection("name already exists");
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::submitting("Scan-2", "");

        let outcome = controller.edit_session(&store, 1, &mut prompt).await;

        assert_eq!(outcome, EditOutcome::Rejected("name already exists".to_string()));
        assert_eq!(
            outcome.message().as_deref(),
            Some("Failed to update session: name already exists")
        );
        assert_eq!(snapshot(&store).await, before);
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_view_unchanged() {
        let store = store_with_session();
        let before = snapshot(&store).await;
        let (remote, _calls) =
            MockRemote::new(Err(DomainError::Network("connection refused".to_string())));
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::submitting("Scan-2", "");

        let outcome = controller.edit_session(&store, 1, &mut prompt).await;

        assert!(matches!(outcome, EditOutcome::TransportFailed(_)));
        assert_eq!(outcome.message().as_deref(), Some("Failed to update session"));
        assert_eq!(snapshot(&store).await, before);
    }

    #[tokio::test]
    async fn test_cancellation_is_a_no_op() {
        let store = store_with_session();
        let before = snapshot(&store).await;
        let (remote, calls) = MockRemote::success("x", "x");
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::cancelling();

        let outcome = controller.edit_session(&store, 1, &mut prompt).await;

        assert_eq!(outcome, EditOutcome::Cancelled);
        assert_eq!(outcome.message(), None);
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(snapshot(&store).await, before);
        assert!(!controller.is_editing(1).await);
    }

    #[tokio::test]
    async fn test_unknown_session_skips_prompt() {
        let store = store_with_session();
        let (remote, calls) = MockRemote::success("x", "x");
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::submitting("Scan-2", "");

        let outcome = controller.edit_session(&store, 99, &mut prompt).await;

        assert_eq!(outcome, EditOutcome::UnknownSession(99));
        assert_eq!(prompt.calls, 0);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_success_without_canonical_values_is_transport_failure() {
        let store = store_with_session();
        let before = snapshot(&store).await;
        let (remote, _calls) = MockRemote::new(Ok(UpdateResponse {
            success: true,
            name: None,
            description: None,
            error: None,
        }));
        let controller = EditController::new(remote);
        let mut prompt = MockPrompt::submitting("Scan-2", "");

        let outcome = controller.edit_session(&store, 1, &mut prompt).await;

        assert!(matches!(outcome, EditOutcome::TransportFailed(_)));
        assert_eq!(snapshot(&store).await, before);
    }

    /// Prompt that parks until released, to hold an edit in flight
    struct GatedPrompt {
        entered: Arc<Notify>,
        release: Arc<Notify>,
        draft: EditDraft,
    }

    #[async_trait]
    impl EditPrompt for GatedPrompt {
        async fn collect(&mut self, _defaults: EditDraft) -> PromptOutcome {
            self.entered.notify_one();
            self.release.notified().await;
            PromptOutcome::Submitted(self.draft.clone())
        }
    }

    #[tokio::test]
    async fn test_second_edit_for_same_session_is_busy() {
        let store = Arc::new(store_with_session());
        let (remote, _calls) = MockRemote::success("Scan-1-renamed", "");
        let controller = Arc::new(EditController::new(remote));

        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());

        let first = {
            let store = store.clone();
            let controller = controller.clone();
            let mut prompt = GatedPrompt {
                entered: entered.clone(),
                release: release.clone(),
                draft: EditDraft {
                    session_id: 1,
                    name: "Scan-1-renamed".to_string(),
                    description: String::new(),
                },
            };
            tokio::spawn(async move { controller.edit_session(&store, 1, &mut prompt).await })
        };

        // Wait until the first edit is parked at its prompt
        entered.notified().await;
        assert!(controller.is_editing(1).await);

        let mut second_prompt = MockPrompt::submitting("other", "");
        let second = controller.edit_session(&store, 1, &mut second_prompt).await;
        assert_eq!(second, EditOutcome::Busy);
        assert_eq!(second_prompt.calls, 0, "busy trigger must not open a prompt");

        release.notify_one();
        let first = first.await.expect("First edit panicked");
        assert!(first.is_updated());
        assert!(!controller.is_editing(1).await);

        // The guard is released, a new edit may start
        let mut third_prompt = MockPrompt::cancelling();
        let third = controller.edit_session(&store, 1, &mut third_prompt).await;
        assert_eq!(third, EditOutcome::Cancelled);
        assert_eq!(third_prompt.calls, 1);
    }
}
