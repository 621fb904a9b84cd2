//! RF-Sessions Client
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - remote: Access to the analyzer server (the store of record)
//! - editor: The rename workflow state machine
//! - store: Client-side view state and its persistence
//! - config: Sync server configuration

pub mod config;
pub mod domain;
pub mod editor;
pub mod remote;
pub mod store;

pub use config::SyncConfig;
pub use domain::{DomainError, DomainResult, EditDraft, Session};
pub use editor::{EditController, EditOutcome, EditPhase, EditPrompt, PromptOutcome};
pub use remote::{HttpRemoteStore, RemoteStore, TokenProvider, UpdateResponse};
pub use store::{AppState, AppStore};
