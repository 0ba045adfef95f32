//! # Coins SDK
//!
//! A typed Rust client for the coins & profiles data API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Query records, wire types, request options (always available)
//! 2. **Auth** — API-key providers and per-call metadata
//! 3. **Transport** — the `Transport` trait; `CoinsHttp` (reqwest) behind the `http` feature
//! 4. **High-Level Client** — `CoinsClient` with `coins()` / `profiles()` sub-clients
//!
//! Every sub-client call merges fresh API-key metadata into the caller's
//! options, hands the request to the transport exactly once, and returns
//! the transport's result unchanged. There is no caching and no retry.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coins_sdk::prelude::*;
//!
//! let client = CoinsClientBuilder::new()
//!     .api_key("my-key")
//!     .build()?;
//!
//! let coin = client.coins().get(GetCoinQuery::new("0xabc"), None).await?;
//! let profile = client
//!     .profiles()
//!     .balances(ProfilePageQuery::new("jacob").count(20), None)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared wire shapes: pagination connections, media.
pub mod shared;

/// Domain modules (vertical slices): query records, wire types, sub-clients.
pub mod domain;

/// Per-call request options and the metadata merge.
pub mod options;

/// Unified SDK error types.
pub mod error;

/// Network URL and configuration constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// API-key providers and metadata injection.
pub mod auth;

// ── Layer 3: Transport ───────────────────────────────────────────────────────

/// Transport capability trait and request/response envelopes.
pub mod transport;

/// reqwest-backed transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinsClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared wire shapes
    pub use crate::shared::{chains, Connection, Edge, PageInfo};

    // Coin domain — queries + responses
    pub use crate::domain::coin::{
        Coin, CoinData, CoinIdentifier, Comment, GetCoinCommentsQuery, GetCoinCommentsResponse,
        GetCoinQuery, GetCoinResponse, GetCoinsQuery, GetCoinsResponse,
    };

    // Profile domain — queries + responses
    pub use crate::domain::profile::{
        CoinBalance, GetProfileBalancesQuery, GetProfileBalancesResponse, GetProfileCoinsQuery,
        GetProfileCoinsResponse, GetProfileQuery, GetProfileResponse, Profile, ProfilePageQuery,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{API_KEY_HEADER, DEFAULT_API_URL};

    // Auth
    pub use crate::auth::{ApiKeyProvider, ApiKeyStore, EnvApiKey, StaticApiKey};

    // Options + transport
    pub use crate::options::{Precedence, RequestOptions};
    pub use crate::transport::{ApiRequest, ApiResponse, Endpoint, Transport};

    // Client + sub-clients
    pub use crate::client::{CoinsClient, CoinsSubClient, ProfilesClient};
    #[cfg(feature = "http")]
    pub use crate::client::CoinsClientBuilder;
    #[cfg(feature = "http")]
    pub use crate::http::CoinsHttp;
}
