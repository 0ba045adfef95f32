//! Wire types for coin responses (REST).

use crate::shared::{Avatar, Connection, MediaContent};
use serde::{Deserialize, Serialize};

/// A coin as returned by the coin, coins, and profile endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub symbol: Option<String>,
    pub chain_id: Option<u64>,
    pub total_supply: Option<String>,
    pub total_volume: Option<String>,
    pub volume_24h: Option<String>,
    pub market_cap: Option<String>,
    pub market_cap_delta_24h: Option<String>,
    pub unique_holders: Option<u64>,
    pub created_at: Option<String>,
    pub creator_address: Option<String>,
    pub creator_profile: Option<CreatorProfile>,
    pub media_content: Option<MediaContent>,
}

/// Short profile embedded in coins and comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    pub id: Option<String>,
    pub handle: Option<String>,
    pub avatar: Option<Avatar>,
}

/// A comment left on a coin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub tx_hash: Option<String>,
    pub comment: Option<String>,
    pub user_address: Option<String>,
    pub timestamp: Option<u64>,
    pub user_profile: Option<CreatorProfile>,
}

/// Coin record wrapping its comment connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinComments {
    #[serde(default)]
    pub zora_comments: Connection<Comment>,
}

// ─── Endpoint responses ──────────────────────────────────────────────────────

/// REST response for `/coin`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoinResponse {
    pub zora20_token: Option<Coin>,
}

/// REST response for `/coins`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoinsResponse {
    #[serde(default)]
    pub zora20_tokens: Vec<Coin>,
}

/// REST response for `/coinComments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoinCommentsResponse {
    pub zora20_token: Option<CoinComments>,
}

/// The coin record carried by [`GetCoinResponse`].
pub type CoinData = Coin;
