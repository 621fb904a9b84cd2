//! Edit Prompt
//!
//! Abstraction over however the surrounding UI collects the proposed
//! values. The controller hands over a draft pre-filled with the current
//! values and gets back either a submitted draft or a cancellation, so it
//! never talks to a user directly.

use async_trait::async_trait;

use crate::domain::EditDraft;

/// What the user did with the edit prompt
///
/// Cancellation is explicit and distinct from submitting unchanged or
/// empty values.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptOutcome {
    Submitted(EditDraft),
    Cancelled,
}

/// Collects both proposed fields in one step
///
/// The draft holds name and description together, so cancelling can never
/// silently discard an already-entered value.
#[async_trait]
pub trait EditPrompt: Send {
    async fn collect(&mut self, defaults: EditDraft) -> PromptOutcome;
}
