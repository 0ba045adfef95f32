//! Transport capability — the seam between the facade and the wire.
//!
//! The facade builds an [`ApiRequest`] per call and hands it to a
//! [`Transport`] exactly once. `CoinsHttp` is the reqwest-backed
//! implementation; tests plug in recording doubles.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::HttpError;
use crate::options::{Precedence, RequestOptions};

/// One API endpoint served by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetCoin,
    GetCoins,
    GetCoinComments,
    GetProfile,
    GetProfileCoins,
    GetProfileBalances,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::GetCoin,
        Endpoint::GetCoins,
        Endpoint::GetCoinComments,
        Endpoint::GetProfile,
        Endpoint::GetProfileCoins,
        Endpoint::GetProfileBalances,
    ];

    /// URL path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetCoin => "/coin",
            Endpoint::GetCoins => "/coins",
            Endpoint::GetCoinComments => "/coinComments",
            Endpoint::GetProfile => "/profile",
            Endpoint::GetProfileCoins => "/profileCoins",
            Endpoint::GetProfileBalances => "/profileBalances",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::GetCoin => "getCoin",
            Endpoint::GetCoins => "getCoins",
            Endpoint::GetCoinComments => "getCoinComments",
            Endpoint::GetProfile => "getProfile",
            Endpoint::GetProfileCoins => "getProfileCoins",
            Endpoint::GetProfileBalances => "getProfileBalances",
        }
    }

    /// How caller options and API-key metadata are merged for this endpoint.
    ///
    /// The multi-coin lookup is the only endpoint where caller options win.
    /// Existing callers depend on that, so it is kept as is.
    pub fn precedence(&self) -> Precedence {
        match self {
            Endpoint::GetCoins => Precedence::CallerWins,
            _ => Precedence::MetadataWins,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload handed to the transport: the query plus merged options.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest<Q> {
    pub query: Q,
    pub options: RequestOptions,
}

/// Result wrapper returned by the transport and passed through by the facade.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Performs one GET request for an endpoint and decodes the response.
pub trait Transport: Send + Sync {
    fn get<Q, R>(
        &self,
        endpoint: Endpoint,
        request: ApiRequest<Q>,
    ) -> impl Future<Output = Result<ApiResponse<R>, HttpError>> + Send
    where
        Q: Serialize + Send,
        R: DeserializeOwned + Send;
}
