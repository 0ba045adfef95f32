//! Profiles sub-client — profile, created coins, balances.

use crate::auth::ApiKeyProvider;
use crate::client::CoinsClient;
use crate::domain::profile::wire::{
    GetProfileBalancesResponse, GetProfileCoinsResponse, GetProfileResponse,
};
use crate::domain::profile::{GetProfileBalancesQuery, GetProfileCoinsQuery, GetProfileQuery};
use crate::error::SdkError;
use crate::options::RequestOptions;
use crate::transport::{ApiResponse, Endpoint, Transport};

pub struct Profiles<'a, T, K> {
    pub(crate) client: &'a CoinsClient<T, K>,
}

impl<'a, T: Transport, K: ApiKeyProvider> Profiles<'a, T, K> {
    pub async fn get(
        &self,
        query: GetProfileQuery,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<GetProfileResponse>, SdkError> {
        self.client.forward(Endpoint::GetProfile, query, options).await
    }

    /// Coins created by the profile, one page at a time.
    pub async fn coins(
        &self,
        query: GetProfileCoinsQuery,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<GetProfileCoinsResponse>, SdkError> {
        self.client
            .forward(Endpoint::GetProfileCoins, query, options)
            .await
    }

    /// Coin balances held by the profile, one page at a time.
    pub async fn balances(
        &self,
        query: GetProfileBalancesQuery,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<GetProfileBalancesResponse>, SdkError> {
        self.client
            .forward(Endpoint::GetProfileBalances, query, options)
            .await
    }
}
