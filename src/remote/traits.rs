//! Remote Layer - Core Trait
//!
//! Defines the abstract interface to the server-side session store.
//! Implementations can use HTTP, in-memory mocks, etc.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

/// Server reply to a session update
///
/// On success the server echoes the canonical values it persisted, which
/// may differ from what was submitted (the server trims both fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    /// Canonical name, present on success
    #[serde(default)]
    pub name: Option<String>,
    /// Canonical description, present on success
    #[serde(default)]
    pub description: Option<String>,
    /// Human-readable reason, present on failure
    #[serde(default)]
    pub error: Option<String>,
}

/// The store of record for sessions
///
/// All operations are async; errors are transport-level only. A logical
/// rejection by the server is a successful call carrying
/// `success: false`.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Persist a new name/description for the session with `id`
    async fn update_session(&self, id: u32, name: &str, description: &str)
        -> DomainResult<UpdateResponse>;
}
