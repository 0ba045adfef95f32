//! Profile domain — profile lookup, created coins, coin balances.

pub mod client;
pub mod wire;

pub use wire::{
    CoinBalance, GetProfileBalancesResponse, GetProfileCoinsResponse, GetProfileResponse,
    Profile, ProfileCoinBalances, ProfileCreatedCoins, PublicWallet,
};

use serde::{Deserialize, Serialize};

/// Query for `/profile`. `identifier` is a wallet address or a handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProfileQuery {
    pub identifier: String,
}

impl GetProfileQuery {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// Paginated query over a profile's coins or balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePageQuery {
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_ids: Option<Vec<u64>>,
}

impl ProfilePageQuery {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            count: None,
            after: None,
            chain_ids: None,
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Resume after a page cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn chain_ids(mut self, chain_ids: impl IntoIterator<Item = u64>) -> Self {
        self.chain_ids = Some(chain_ids.into_iter().collect());
        self
    }
}

/// Query for `/profileCoins`.
pub type GetProfileCoinsQuery = ProfilePageQuery;

/// Query for `/profileBalances`.
pub type GetProfileBalancesQuery = ProfilePageQuery;
