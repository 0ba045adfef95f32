//! Wire types for profile responses (REST).

use crate::domain::coin::wire::Coin;
use crate::shared::{Avatar, Connection};
use serde::{Deserialize, Serialize};

/// A user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Option<String>,
    pub handle: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<Avatar>,
    pub public_wallet: Option<PublicWallet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicWallet {
    pub wallet_address: Option<String>,
}

/// Profile record wrapping the coins it created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCreatedCoins {
    pub id: Option<String>,
    pub handle: Option<String>,
    #[serde(default)]
    pub created_coins: Connection<Coin>,
}

/// A held balance of one coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalance {
    pub id: Option<String>,
    pub balance: Option<String>,
    pub coin: Option<Coin>,
}

/// Profile record wrapping its coin balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCoinBalances {
    pub id: Option<String>,
    pub handle: Option<String>,
    #[serde(default)]
    pub coin_balances: Connection<CoinBalance>,
}

// ─── Endpoint responses ──────────────────────────────────────────────────────

/// REST response for `/profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProfileResponse {
    pub profile: Option<Profile>,
}

/// REST response for `/profileCoins`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetProfileCoinsResponse {
    pub profile: Option<ProfileCreatedCoins>,
}

/// REST response for `/profileBalances`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetProfileBalancesResponse {
    pub profile: Option<ProfileCoinBalances>,
}
