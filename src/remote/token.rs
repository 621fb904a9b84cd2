//! CSRF Token Provider
//!
//! The server requires an anti-forgery token on every mutating request.
//! Where the token comes from is none of the HTTP store's business, so it
//! is injected at construction.

/// Source of the anti-forgery token sent as `X-CSRFToken`
pub trait TokenProvider: Send + Sync {
    fn csrf_token(&self) -> String;
}

/// Fixed token, for long-lived API tokens and tests
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn csrf_token(&self) -> String {
        self.0.clone()
    }
}
