//! Sync Server Configuration
//!
//! Where the analyzer server lives and the token it expects, persisted as
//! a JSON file beside the view state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::remote::TokenProvider;

/// Server endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Service root, e.g. `https://host/rf-analyzer`
    pub url: String,
    /// Anti-forgery token sent with every update
    pub token: String,
}

impl SyncConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.url.trim().is_empty() {
            return Err(DomainError::InvalidInput("sync URL cannot be empty".to_string()));
        }
        if self.token.trim().is_empty() {
            return Err(DomainError::InvalidInput("sync token cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl TokenProvider for SyncConfig {
    fn csrf_token(&self) -> String {
        self.token.clone()
    }
}

/// Validate and save the sync configuration
pub fn configure_sync(path: &Path, url: String, token: String) -> DomainResult<()> {
    let config = SyncConfig::new(url, token);
    config.validate()?;
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| DomainError::Internal(format!("failed to write sync config: {}", e)))?;
    log::info!("sync config saved to {}", path.display());
    Ok(())
}

/// Read the sync configuration, `None` if not configured yet
pub fn get_sync_config(path: &Path) -> Option<SyncConfig> {
    let json = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("ignoring unreadable sync config {}: {}", path.display(), e);
            None
        }
    }
}
