//! Remote Layer
//!
//! Access to the analyzer server, the store of record for sessions.
//! The trait keeps the editor testable without a live server.

mod http;
mod token;
mod traits;

pub use http::HttpRemoteStore;
pub use token::{StaticToken, TokenProvider};
pub use traits::{RemoteStore, UpdateResponse};
