//! Coin domain — single and multi-coin lookups, coin comments.

pub mod client;
pub mod wire;

pub use wire::{
    Coin, CoinComments, CoinData, Comment, CreatorProfile, GetCoinCommentsResponse,
    GetCoinResponse, GetCoinsResponse,
};

use serde::{Deserialize, Serialize};

// ─── Queries ─────────────────────────────────────────────────────────────────

/// Query for `/coin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoinQuery {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<u64>,
}

impl GetCoinQuery {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            chain: None,
        }
    }

    pub fn chain(mut self, chain: u64) -> Self {
        self.chain = Some(chain);
        self
    }
}

/// Identifies one coin in a multi-coin lookup.
///
/// Field order is significant: the encoded form is
/// `{"chainId":..,"collectionAddress":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinIdentifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    pub collection_address: String,
}

impl CoinIdentifier {
    pub fn new(chain_id: u64, collection_address: impl Into<String>) -> Self {
        Self {
            chain_id: Some(chain_id),
            collection_address: collection_address.into(),
        }
    }

    pub fn on_default_chain(collection_address: impl Into<String>) -> Self {
        Self {
            chain_id: None,
            collection_address: collection_address.into(),
        }
    }
}

/// Query for `/coins`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCoinsQuery {
    pub coins: Vec<CoinIdentifier>,
}

impl GetCoinsQuery {
    pub fn new(coins: impl IntoIterator<Item = CoinIdentifier>) -> Self {
        Self {
            coins: coins.into_iter().collect(),
        }
    }
}

/// Outgoing form of [`GetCoinsQuery`]: each identifier as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedCoinsQuery {
    pub coins: Vec<String>,
}

impl TryFrom<GetCoinsQuery> for EncodedCoinsQuery {
    type Error = serde_json::Error;

    fn try_from(query: GetCoinsQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            coins: encode_coin_identifiers(&query.coins)?,
        })
    }
}

/// JSON-encode each identifier, preserving order.
pub fn encode_coin_identifiers(coins: &[CoinIdentifier]) -> Result<Vec<String>, serde_json::Error> {
    coins.iter().map(serde_json::to_string).collect()
}

/// Query for `/coinComments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCoinCommentsQuery {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl GetCoinCommentsQuery {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            chain: None,
            after: None,
            count: None,
        }
    }

    pub fn chain(mut self, chain: u64) -> Self {
        self.chain = Some(chain);
        self
    }

    /// Resume after a page cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}
