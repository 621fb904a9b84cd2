//! HTTP Remote Store
//!
//! reqwest-backed implementation of [`RemoteStore`] against the analyzer
//! server's update endpoint.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult};

use super::token::TokenProvider;
use super::traits::{RemoteStore, UpdateResponse};

/// HTTP implementation of the session store
pub struct HttpRemoteStore {
    base_url: String,
    client: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpRemoteStore {
    /// `base_url` is the service root, e.g. `https://host/rf-analyzer`
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
            tokens,
        }
    }

    fn update_url(&self, id: u32) -> String {
        format!("{}/session/update/{}/", self.base_url, id)
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn update_session(&self, id: u32, name: &str, description: &str)
        -> DomainResult<UpdateResponse>
    {
        let url = self.update_url(id);
        log::debug!("POST {}", url);

        // The server answers 400/404/500 with the same JSON shape as 200,
        // so the body is decoded regardless of status. A body that does
        // not decode is a transport failure.
        let response = self
            .client
            .post(&url)
            .header("X-CSRFToken", self.tokens.csrf_token())
            .form(&[("name", name), ("description", description)])
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        response
            .json::<UpdateResponse>()
            .await
            .map_err(|e| DomainError::Network(format!("malformed server response: {}", e)))
    }
}
