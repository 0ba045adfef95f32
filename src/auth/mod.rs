//! API-key authentication — providers and per-call metadata.
//!
//! ## Key Handling
//!
//! - The key is looked up from an [`ApiKeyProvider`] on **every** call and
//!   turned into fresh metadata via [`api_key_meta`]. Nothing is cached on
//!   the query or in the client.
//! - Rotation: share an [`ApiKeyStore`] and call [`ApiKeyStore::set`]; the
//!   next request picks it up.
//! - The key is never logged and has no `Debug` exposure beyond a redacted
//!   marker.

mod provider;

pub use provider::{ApiKeyStore, EnvApiKey, StaticApiKey};

use std::future::Future;

use crate::network::API_KEY_HEADER;
use crate::options::RequestOptions;

/// Source of the API key attached to outgoing requests.
pub trait ApiKeyProvider: Send + Sync {
    /// The current key, or `None` to send the request unauthenticated.
    fn api_key(&self) -> impl Future<Output = Option<String>> + Send;
}

/// Build the metadata options injected into a request.
///
/// Returns empty options when the provider has no key, so the merge
/// contributes nothing.
pub async fn api_key_meta<P: ApiKeyProvider>(provider: &P) -> RequestOptions {
    match provider.api_key().await {
        Some(key) => RequestOptions::new().with_header(API_KEY_HEADER, key),
        None => RequestOptions::default(),
    }
}

pub(crate) fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
