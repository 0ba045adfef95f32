//! HTTP transport layer — `CoinsHttp`, the reqwest-backed [`Transport`](crate::transport::Transport).

pub mod client;
pub mod query;

pub use client::CoinsHttp;
