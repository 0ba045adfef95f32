//! Built-in API-key providers.

use async_lock::RwLock;
use std::sync::Arc;

use super::{normalize_key, ApiKeyProvider};
use crate::network::API_KEY_ENV;

/// Shared, settable API key. Clones share the same slot.
#[derive(Clone, Default)]
pub struct ApiKeyStore {
    key: Arc<RwLock<Option<String>>>,
}

impl ApiKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Arc::new(RwLock::new(normalize_key(Some(key.into())))),
        }
    }

    /// Replace the key. Blank keys clear it.
    pub async fn set(&self, key: impl Into<String>) {
        *self.key.write().await = normalize_key(Some(key.into()));
    }

    pub async fn clear(&self) {
        *self.key.write().await = None;
    }

    pub async fn is_set(&self) -> bool {
        self.key.read().await.is_some()
    }
}

impl std::fmt::Debug for ApiKeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyStore").field("key", &"<redacted>").finish()
    }
}

impl ApiKeyProvider for ApiKeyStore {
    async fn api_key(&self) -> Option<String> {
        self.key.read().await.clone()
    }
}

/// A fixed key (or none) for the lifetime of the client.
#[derive(Clone, Default)]
pub struct StaticApiKey(Option<String>);

impl StaticApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(normalize_key(Some(key.into())))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl std::fmt::Debug for StaticApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self.0.as_ref().map(|_| "<redacted>");
        f.debug_tuple("StaticApiKey").field(&shown).finish()
    }
}

impl ApiKeyProvider for StaticApiKey {
    async fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the key from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvApiKey {
    var: String,
}

impl EnvApiKey {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvApiKey {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl ApiKeyProvider for EnvApiKey {
    async fn api_key(&self) -> Option<String> {
        normalize_key(std::env::var(&self.var).ok())
    }
}
