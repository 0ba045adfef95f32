//! Per-call request options and the ordered merge with API-key metadata.
//!
//! Merging is shallow: each top-level field is taken whole from whichever
//! side wins. A `headers` collision therefore replaces the entire header map
//! rather than combining entries.
//!
//! | Side present on both | `MetadataWins` | `CallerWins` |
//! |---|---|---|
//! | `base_url` | metadata | caller |
//! | `headers`  | metadata | caller |
//! | `timeout`  | metadata | caller |
//!
//! Fields that are `None` on the winning side fall back to the other side.

use std::collections::BTreeMap;
use std::time::Duration;

/// Transport-level overrides for a single call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overrides the client's base URL.
    pub base_url: Option<String>,
    /// Request headers. Replaced as a whole when merged.
    pub headers: Option<BTreeMap<String, String>>,
    /// Overrides the client's request timeout.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Add a header, creating the header map if needed.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|h| h.get(name))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.base_url.is_none() && self.headers.is_none() && self.timeout.is_none()
    }

    /// Apply `top` over `self`: every field set on `top` wins.
    fn overlay(self, top: RequestOptions) -> RequestOptions {
        RequestOptions {
            base_url: top.base_url.or(self.base_url),
            headers: top.headers.or(self.headers),
            timeout: top.timeout.or(self.timeout),
        }
    }
}

/// Which side wins when caller options and injected metadata set the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Injected API-key metadata overrides caller options.
    MetadataWins,
    /// Caller options override injected API-key metadata.
    CallerWins,
}

/// Merge caller options with injected metadata in the given precedence.
pub fn merge_options(
    caller: RequestOptions,
    metadata: RequestOptions,
    precedence: Precedence,
) -> RequestOptions {
    match precedence {
        Precedence::MetadataWins => caller.overlay(metadata),
        Precedence::CallerWins => metadata.overlay(caller),
    }
}
