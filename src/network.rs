//! Network and configuration constants for the coins SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api-sdk.zora.engineering";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "api-key";

/// Environment variable read by [`crate::auth::EnvApiKey`] and `CoinsClientBuilder::from_env`.
pub const API_KEY_ENV: &str = "COINS_API_KEY";

/// Environment variable overriding the API base URL in `CoinsClientBuilder::from_env`.
pub const API_URL_ENV: &str = "COINS_API_URL";
