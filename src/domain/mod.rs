//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Typed query records for its endpoints
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `client.rs` — Sub-client forwarding each query through the transport

pub mod coin;
pub mod profile;
