//! Shared wire shapes used across domain modules.
//!
//! The API returns paginated lists as GraphQL-style connections:
//! `{ count, edges: [{ node }], pageInfo: { endCursor, hasNextPage } }`.

use serde::{Deserialize, Serialize};

/// Well-known chain ids accepted by the `chain` / `chainIds` query fields.
pub mod chains {
    pub const BASE: u64 = 8453;
    pub const BASE_SEPOLIA: u64 = 84532;
}

// ─── Connection ──────────────────────────────────────────────────────────────

/// A paginated list of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl<T> Connection<T> {
    /// Iterate the nodes in page order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }

    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|e| e.node).collect()
    }

    /// Cursor to pass as `after` for the next page, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.page_info
            .as_ref()
            .filter(|p| p.has_next_page)
            .and_then(|p| p.end_cursor.as_deref())
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            count: None,
            edges: Vec::new(),
            page_info: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub end_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

// ─── Media ───────────────────────────────────────────────────────────────────

/// Resized preview of an image asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewImage {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub blurhash: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub preview_image: Option<PreviewImage>,
}

/// Media attached to a coin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContent {
    pub mime_type: Option<String>,
    pub original_uri: Option<String>,
    pub preview_image: Option<PreviewImage>,
}
