//! High-level client — `CoinsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared forwarding path, and the
//! accessor methods.

use crate::auth::{api_key_meta, ApiKeyProvider, ApiKeyStore};
use crate::domain::coin::client::Coins;
use crate::domain::profile::client::Profiles;
use crate::error::SdkError;
use crate::options::{merge_options, RequestOptions};
use crate::transport::{ApiRequest, ApiResponse, Endpoint, Transport};

use serde::de::DeserializeOwned;
use serde::Serialize;

#[cfg(feature = "http")]
use crate::http::{client::DEFAULT_TIMEOUT, CoinsHttp};
#[cfg(feature = "http")]
use crate::network::{API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};
#[cfg(feature = "http")]
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsSubClient;
pub use crate::domain::profile::client::Profiles as ProfilesClient;

/// The primary entry point for the coins SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()` and `client.profiles()`. Every call asks the key
/// provider for fresh metadata, merges it with the caller's options and
/// hands the request to the transport once.
#[derive(Debug, Clone)]
pub struct CoinsClient<T, K = ApiKeyStore> {
    pub(crate) transport: T,
    pub(crate) api_key: K,
}

impl<T: Transport, K: ApiKeyProvider> CoinsClient<T, K> {
    /// Build a client over any transport and key provider.
    pub fn with_transport(transport: T, api_key: K) -> Self {
        Self { transport, api_key }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_, T, K> {
        Coins { client: self }
    }

    pub fn profiles(&self) -> Profiles<'_, T, K> {
        Profiles { client: self }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn api_key_provider(&self) -> &K {
        &self.api_key
    }

    /// Merge fresh key metadata into the caller's options and forward once.
    pub(crate) async fn forward<Q, R>(
        &self,
        endpoint: Endpoint,
        query: Q,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<R>, SdkError>
    where
        Q: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        let metadata = api_key_meta(&self.api_key).await;
        let injected = !metadata.is_empty();
        let precedence = endpoint.precedence();
        let options = merge_options(options.unwrap_or_default(), metadata, precedence);

        tracing::trace!(
            endpoint = endpoint.name(),
            ?precedence,
            injected,
            "Forwarding request"
        );

        let resp = self
            .transport
            .get(endpoint, ApiRequest { query, options })
            .await?;
        Ok(resp)
    }
}

#[cfg(feature = "http")]
impl CoinsClient<CoinsHttp, ApiKeyStore> {
    pub fn builder() -> CoinsClientBuilder {
        CoinsClientBuilder::default()
    }

    /// Shared key slot; `set`/`clear` take effect on the next call.
    pub fn api_key_store(&self) -> &ApiKeyStore {
        &self.api_key
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
pub struct CoinsClientBuilder {
    base_url: String,
    api_key: ApiKeyStore,
    timeout: Duration,
}

#[cfg(feature = "http")]
impl Default for CoinsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: ApiKeyStore::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(feature = "http")]
impl CoinsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `COINS_API_URL` and `COINS_API_KEY` when set.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Some(url) = env_non_empty(API_URL_ENV) {
            builder.base_url = url;
        }
        if let Some(key) = env_non_empty(API_KEY_ENV) {
            builder.api_key = ApiKeyStore::with_key(key);
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Use a fixed API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKeyStore::with_key(key);
        self
    }

    /// Share an existing key slot, e.g. one rotated elsewhere in the process.
    pub fn api_key_store(mut self, store: ApiKeyStore) -> Self {
        self.api_key = store;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<CoinsClient<CoinsHttp, ApiKeyStore>, SdkError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        Ok(CoinsClient {
            transport: CoinsHttp::with_timeout(&self.base_url, self.timeout)?,
            api_key: self.api_key,
        })
    }
}

#[cfg(feature = "http")]
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
