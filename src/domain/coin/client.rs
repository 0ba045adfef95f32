//! Coins sub-client — coin lookups and comments.

use crate::auth::ApiKeyProvider;
use crate::client::CoinsClient;
use crate::domain::coin::wire::{GetCoinCommentsResponse, GetCoinResponse, GetCoinsResponse};
use crate::domain::coin::{EncodedCoinsQuery, GetCoinCommentsQuery, GetCoinQuery, GetCoinsQuery};
use crate::error::SdkError;
use crate::options::RequestOptions;
use crate::transport::{ApiResponse, Endpoint, Transport};

/// Sub-client for coin queries.
pub struct Coins<'a, T, K> {
    pub(crate) client: &'a CoinsClient<T, K>,
}

impl<'a, T: Transport, K: ApiKeyProvider> Coins<'a, T, K> {
    /// Look up a single coin by contract address.
    pub async fn get(
        &self,
        query: GetCoinQuery,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<GetCoinResponse>, SdkError> {
        self.client.forward(Endpoint::GetCoin, query, options).await
    }

    /// Look up several coins at once.
    ///
    /// Identifiers are sent JSON-encoded, one string per coin, in input
    /// order. Caller options take precedence over the injected API key here.
    pub async fn get_many(
        &self,
        query: GetCoinsQuery,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<GetCoinsResponse>, SdkError> {
        let encoded = EncodedCoinsQuery::try_from(query)?;
        self.client.forward(Endpoint::GetCoins, encoded, options).await
    }

    /// One page of comments on a coin.
    pub async fn comments(
        &self,
        query: GetCoinCommentsQuery,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<GetCoinCommentsResponse>, SdkError> {
        self.client
            .forward(Endpoint::GetCoinComments, query, options)
            .await
    }
}
